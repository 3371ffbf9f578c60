//! # Vapor Core
//!
//! `vapor-core` is the foundational library powering the Vapor CLI. It provides a dynamic
//! Steam Web API client: every interface and method published by the Web API schema can be
//! called without any hand-written, per-method request code.
//!
//! ## Key Components
//!
//! * **[`SchemaStore`](schema::SchemaStore) & [`MethodIndex`](schema::MethodIndex):** Load and
//!   validate the schema (`apilist.interfaces`) and derive, once, the
//!   `interface -> method identifier -> method` lookup used for dispatch.
//! * **[`VaporClient`](client::VaporClient):** The main entry point. It resolves
//!   `(interface, "Method_vN")` pairs and runs them through the HTTP pipeline.
//! * **[`RequestBuilder`](http::RequestBuilder), [`Transport`](http::Transport) and
//!   [`response`](http::response):** Encode the request (query string for `GET`, form body for
//!   `POST`), send it, check the status and decode the JSON body.
//! * **[`codegen`]:** Emits typed Rust wrappers for every method of a schema, calling into the
//!   dynamic client.
//!
//! Responses are passed through as untyped `serde_json::Value`s.
//!
//! ## Re-exports
//!
//! This crate re-exports `reqwest`, `serde_json` and `url` to ensure that consumers
//! use compatible versions of these underlying dependencies.
pub mod client;
pub mod codegen;
pub mod http;
pub mod schema;

// Re-exports
pub use reqwest;
pub use serde_json;
pub use url;

/// Type alias for the standard boxed error used by transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
