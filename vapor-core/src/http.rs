//! # HTTP Plumbing
//!
//! The three stages a resolved call goes through:
//!
//! 1. [`request`] encodes a method definition and its parameters into an [`ApiRequest`].
//! 2. [`transport`] sends it over the network.
//! 3. [`response`] checks the status and decodes the JSON body.
//!
//! None of them keeps state between calls.
pub mod request;
pub mod response;
pub mod transport;

pub use request::{ApiRequest, RequestBuilder, RequestError};
pub use response::{ApiError, ResponseError};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
