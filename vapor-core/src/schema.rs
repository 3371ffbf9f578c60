//! # Schema
//!
//! Loading and validation of the Web API interface schema, the document published by
//! `ISteamWebAPIUtil/GetSupportedAPIList/v1/`:
//!
//! ```json
//! { "apilist": { "interfaces": [
//!     { "name": "ISteamNews",
//!       "methods": [
//!         { "name": "GetNewsForApp", "version": 2, "httpmethod": "GET",
//!           "parameters": [ { "name": "appid", "type": "uint32", "optional": false, "description": "" } ] }
//!       ] } ] } }
//! ```
//!
//! * **[`SchemaStore`]:** Validates the top-level shape and owns the parsed
//!   [`InterfaceDefinition`]s. It performs no network I/O; getting the bytes is up to the caller.
//! * **[`MethodIndex`]:** The immutable `interface -> method identifier -> method` lookup built
//!   once from a store.
pub mod index;
mod types;

pub use index::MethodIndex;
pub use types::*;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Errors raised while loading a schema or building its [`MethodIndex`].
///
/// All of them are fatal to client construction.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to read schema file '{path}': '{source}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema is not valid JSON: '{0}'")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Schema is missing the '{0}' field")]
    MissingField(&'static str),
    #[error("Schema is malformed: '{0}'")]
    Malformed(#[source] serde_json::Error),
    #[error("Schema declares no interfaces")]
    EmptyInterfaceList,
    #[error("Interface '{0}' is declared more than once")]
    DuplicateInterface(String),
    #[error("Method '{interface}.{method}' has invalid version 0, versions start at 1")]
    InvalidVersion { interface: String, method: String },
    #[error("Method '{interface}.{method}' uses unsupported HTTP method '{http_method}'")]
    UnsupportedHttpMethod {
        interface: String,
        method: String,
        http_method: String,
    },
    #[error("Method identifier '{method}' is declared more than once in interface '{interface}'")]
    DuplicateMethod { interface: String, method: String },
}

/// The validated set of interfaces of a loaded schema.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    interfaces: Vec<InterfaceDefinition>,
}

impl SchemaStore {
    /// Validates a raw schema document.
    ///
    /// # Returns
    ///
    /// * `Ok(SchemaStore)` - The interfaces, in schema order.
    /// * `Err(SchemaError)` - If `apilist.interfaces` is missing, malformed or empty, if an
    ///   interface name repeats, or if a method declares version `0`.
    pub fn load(raw: &serde_json::Value) -> Result<Self, SchemaError> {
        let interfaces = raw
            .get("apilist")
            .ok_or(SchemaError::MissingField("apilist"))?
            .get("interfaces")
            .ok_or(SchemaError::MissingField("apilist.interfaces"))?;

        let interfaces: Vec<InterfaceDefinition> =
            serde_json::from_value(interfaces.clone()).map_err(SchemaError::Malformed)?;

        if interfaces.is_empty() {
            return Err(SchemaError::EmptyInterfaceList);
        }

        let mut seen = HashSet::new();
        for interface in &interfaces {
            if !seen.insert(interface.name.as_str()) {
                return Err(SchemaError::DuplicateInterface(interface.name.clone()));
            }

            if let Some(method) = interface.methods.iter().find(|m| m.version == 0) {
                return Err(SchemaError::InvalidVersion {
                    interface: interface.name.clone(),
                    method: method.name.clone(),
                });
            }
        }

        tracing::debug!(interfaces = interfaces.len(), "schema loaded");

        Ok(Self { interfaces })
    }

    /// Parses and validates a schema from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let raw: serde_json::Value =
            serde_json::from_slice(bytes).map_err(SchemaError::InvalidJson)?;
        Self::load(&raw)
    }

    /// Reads, parses and validates a schema persisted on disk (e.g. `api-definition.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn interfaces(&self) -> &[InterfaceDefinition] {
        &self.interfaces
    }

    pub fn into_interfaces(self) -> Vec<InterfaceDefinition> {
        self.interfaces
    }

    /// Builds the dispatch index for this schema.
    pub fn index(&self) -> Result<MethodIndex, SchemaError> {
        MethodIndex::build(&self.interfaces)
    }
}
