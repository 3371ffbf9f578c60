//! # Vapor Client
//!
//! The dispatch layer. A [`VaporClient`] is built once from a schema and exposes every method of
//! every interface through a two-level lookup: interface name, then method identifier
//! (`{name}_v{version}`).
//!
//! Each call is resolved and executed independently:
//!
//! 1. **Resolve** the `(interface, method)` pair against the [`MethodIndex`].
//! 2. **Build** the [`ApiRequest`](crate::http::ApiRequest) with the [`RequestBuilder`].
//! 3. **Dispatch** it through the [`Transport`], the only step that awaits.
//! 4. **Handle** the response: status check and JSON decoding.
//!
//! Nothing is cached or shared between calls, and the index is read-only after construction,
//! so a client can be used from many tasks at once.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vapor_core::client::{ClientConfig, Params, VaporClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let schema: serde_json::Value = serde_json::from_slice(&std::fs::read("api-definition.json")?)?;
//! let client = VaporClient::new(&schema, ClientConfig::new("MY-API-KEY"))?;
//!
//! let news = client
//!     .interface("ISteamNews")
//!     .method("GetNewsForApp_v2")
//!     .call(Params::new().with("appid", 440).with("count", 3))
//!     .await?;
//! # Ok(())
//! # }
//! ```
mod credential;
mod params;

pub use credential::ApiKey;
pub use params::{ParamValue, Params, ParamsError};

use crate::http::response::{self, ApiError, ResponseError};
use crate::http::{HttpTransport, RequestBuilder, RequestError, Transport, TransportError};
use crate::schema::index::MethodTable;
use crate::schema::{
    MethodDefinition, MethodIdentifier, MethodIndex, SchemaError, SchemaStore,
    UnsupportedMethodError,
};
use std::sync::Arc;
use url::Url;

/// Root of the public Steam Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{0}': '{1}'")]
    InvalidUrl(String, #[source] url::ParseError),
    #[error("Base URL '{0}' cannot carry a path")]
    CannotBeABase(String),
}

/// A call targeted an interface or method the schema does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Interface '{interface}' not found (while calling '{interface}.{method}')")]
    InterfaceNotFound { interface: String, method: String },
    #[error("Method '{method}' not found in interface '{interface}'")]
    MethodNotFound { interface: String, method: String },
}

/// Every way a call can fail. A failed call never carries a partial result.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    UnsupportedMethod(#[from] UnsupportedMethodError),
    #[error(transparent)]
    InvalidParameter(#[from] ParamsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Failed to decode response body as JSON: '{0}'")]
    Decode(#[source] serde_json::Error),
}

impl From<RequestError> for CallError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::UnsupportedMethod(err) => CallError::UnsupportedMethod(err),
            RequestError::InvalidParameter(err) => CallError::InvalidParameter(err),
            RequestError::Config(err) => CallError::Config(err),
        }
    }
}

impl From<ResponseError> for CallError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::Api(err) => CallError::Api(err),
            ResponseError::Decode(err) => CallError::Decode(err),
        }
    }
}

/// Where to send requests and which credential to attach to them.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    credential: ApiKey,
}

impl ClientConfig {
    /// A configuration targeting [`DEFAULT_BASE_URL`].
    pub fn new(credential: impl Into<ApiKey>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base URL"),
            credential: credential.into(),
        }
    }

    /// Overrides the base URL (e.g. a proxy or a local test server).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e))?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(base_url.to_string()));
        }

        self.base_url = url;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// The dynamic Web API client.
///
/// The generic parameter `T` is the [`Transport`] used to reach the network.
#[derive(Debug, Clone)]
pub struct VaporClient<T = HttpTransport> {
    index: Arc<MethodIndex>,
    requests: RequestBuilder,
    transport: T,
}

impl VaporClient<HttpTransport> {
    /// Loads a raw schema and builds a client that talks to the network through `reqwest`.
    ///
    /// # Returns
    ///
    /// * `Ok(VaporClient)` - The client, with its method index built.
    /// * `Err(SchemaError)` - If the schema is malformed, empty or inconsistent.
    pub fn new(schema: &serde_json::Value, config: ClientConfig) -> Result<Self, SchemaError> {
        let store = SchemaStore::load(schema)?;
        Self::from_store(&store, config, HttpTransport::new())
    }
}

impl<T> VaporClient<T> {
    /// Builds a client from an already loaded schema and any [`Transport`].
    pub fn from_store(
        store: &SchemaStore,
        config: ClientConfig,
        transport: T,
    ) -> Result<Self, SchemaError> {
        let index = store.index()?;
        Ok(Self::from_index(Arc::new(index), config, transport))
    }

    /// Builds a client around an existing, shared index.
    pub fn from_index(index: Arc<MethodIndex>, config: ClientConfig, transport: T) -> Self {
        let ClientConfig {
            base_url,
            credential,
        } = config;

        Self {
            index,
            requests: RequestBuilder::from_checked(base_url, credential),
            transport,
        }
    }

    pub fn index(&self) -> &MethodIndex {
        &self.index
    }

    pub fn base_url(&self) -> &Url {
        self.requests.base_url()
    }

    /// Names of all interfaces, in lexicographic order.
    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        self.index.interface_names()
    }

    /// Looks up an interface.
    ///
    /// This never fails: an unknown name yields an unresolved handle whose calls fail with
    /// [`ResolutionError::InterfaceNotFound`].
    pub fn interface(&self, name: &str) -> InterfaceHandle<'_, T> {
        InterfaceHandle {
            client: self,
            name: name.to_string(),
            methods: self.index.interface(name),
        }
    }
}

impl<T: Transport> VaporClient<T> {
    /// Shorthand for `client.interface(interface).method(method).call(params)`.
    pub async fn call(
        &self,
        interface: &str,
        method: &str,
        params: Params,
    ) -> Result<serde_json::Value, CallError> {
        self.interface(interface).method(method).call(params).await
    }
}

/// One interface of a [`VaporClient`], possibly unresolved.
#[derive(Debug)]
pub struct InterfaceHandle<'a, T> {
    client: &'a VaporClient<T>,
    name: String,
    methods: Option<&'a MethodTable>,
}

impl<'a, T> InterfaceHandle<'a, T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_resolved(&self) -> bool {
        self.methods.is_some()
    }

    /// The methods of this interface, empty when unresolved.
    pub fn methods(&self) -> impl Iterator<Item = (&'a MethodIdentifier, &'a MethodDefinition)> + use<'a, T> {
        self.methods.into_iter().flat_map(|table| table.iter())
    }

    /// Looks up a method by identifier (e.g. `GetNewsForApp_v2`).
    pub fn method(&self, id: &str) -> MethodHandle<'a, T> {
        MethodHandle {
            client: self.client,
            interface: self.name.clone(),
            method: id.to_string(),
            interface_resolved: self.methods.is_some(),
            definition: self.methods.and_then(|table| table.get(id)),
        }
    }
}

/// A callable method of a [`VaporClient`], possibly unresolved.
#[derive(Debug)]
pub struct MethodHandle<'a, T> {
    client: &'a VaporClient<T>,
    interface: String,
    method: String,
    interface_resolved: bool,
    definition: Option<&'a MethodDefinition>,
}

impl<T> MethodHandle<'_, T> {
    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn identifier(&self) -> &str {
        &self.method
    }

    pub fn definition(&self) -> Option<&MethodDefinition> {
        self.definition
    }

    pub fn is_resolved(&self) -> bool {
        self.definition.is_some()
    }

    fn resolve(&self) -> Result<&MethodDefinition, ResolutionError> {
        self.definition.ok_or_else(|| {
            let interface = self.interface.clone();
            let method = self.method.clone();
            if self.interface_resolved {
                ResolutionError::MethodNotFound { interface, method }
            } else {
                ResolutionError::InterfaceNotFound { interface, method }
            }
        })
    }
}

impl<T: Transport> MethodHandle<'_, T> {
    /// Executes the method with the given parameters.
    ///
    /// Parameters set to `None` are dropped and the credential is always added as `key`.
    /// Parameters the method does not declare are still sent.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The decoded JSON body of a `2xx` response, untouched.
    /// * `Err(CallError)` - If the method cannot be resolved, the request fails on the network,
    ///   the service answers with a non-success status or the body is not JSON.
    #[tracing::instrument(
        name = "call",
        skip_all,
        fields(interface = %self.interface, method = %self.method)
    )]
    pub async fn call(&self, params: Params) -> Result<serde_json::Value, CallError> {
        let definition = self.resolve()?;

        let request = self
            .client
            .requests
            .build(&self.interface, definition, &params)?;

        let response = self.client.transport.send(request).await?;

        Ok(response::handle(response)?)
    }
}
