use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version assumed for a method whose schema entry carries no `version`.
pub const DEFAULT_METHOD_VERSION: u32 = 1;

/// A named group of remote methods (e.g. `ISteamNews`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDefinition {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

/// A single remote method as published by the schema.
///
/// `http_method` keeps the raw verb from the schema. It is validated when the
/// [`MethodIndex`](super::index::MethodIndex) is built, see [`HttpMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "httpmethod")]
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
}

impl MethodDefinition {
    /// Returns the dispatch key of this method (e.g. `GetNewsForApp_v2`).
    pub fn identifier(&self) -> MethodIdentifier {
        MethodIdentifier::new(&self.name, self.version)
    }

    /// Looks up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A parameter declared by a method.
///
/// `type` is descriptive only; values are never checked against it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: String,
}

fn default_version() -> u32 {
    DEFAULT_METHOD_VERSION
}

/// The dispatch key of a method within its interface: `{name}_v{version}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodIdentifier(String);

impl MethodIdentifier {
    pub fn new(name: &str, version: u32) -> Self {
        Self(format!("{name}_v{version}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for MethodIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The only HTTP verbs the Web API publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a verb other than `GET` or `POST` is parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported HTTP method '{0}', expected GET or POST")]
pub struct UnsupportedMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(UnsupportedMethodError(other.to_string())),
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
        }
    }
}
