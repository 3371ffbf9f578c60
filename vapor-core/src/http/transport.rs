//! # Transport
//!
//! The network boundary of a call. [`Transport`] is the only place where a call suspends.
//!
//! [`HttpTransport`] is the default implementation, a thin wrapper over `reqwest::Client`. No
//! timeout is configured by default: pass a pre-configured client to
//! [`HttpTransport::from_client`] to impose one.
use super::request::ApiRequest;
use crate::BoxError;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::future::Future;

/// A network-level failure (DNS, connection refused, timeout, interrupted body).
#[derive(Debug, thiserror::Error)]
#[error("Request to '{url}' failed: '{source}'")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: BoxError,
}

impl TransportError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// The undecoded response of a request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Executes [`ApiRequest`]s.
///
/// Implementations must not retry, cache or deduplicate: every call to `send` is one
/// independent request.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let target = url.to_string();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(target.clone(), e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(target.clone(), e))?;

        tracing::trace!(url = %target, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
