//! # Request Builder
//!
//! Turns a [`MethodDefinition`] and a [`Params`] set into a fully specified [`ApiRequest`].
//!
//! * The target is `{base_url}/{interface}/{method}/v{version}/`.
//! * The parameters are the caller's present values plus `key` (the credential). A caller
//!   supplied `key` is replaced, so it appears exactly once.
//! * `GET` sends everything in the query string and has no body.
//! * `POST` sends everything as an `application/x-www-form-urlencoded` body and leaves the
//!   query string empty.
use crate::client::{ApiKey, ConfigError, ParamValue, Params, ParamsError};
use crate::schema::{HttpMethod, MethodDefinition, UnsupportedMethodError};
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::collections::BTreeMap;
use url::Url;
use url::form_urlencoded;

/// Name of the parameter carrying the credential.
pub const KEY_PARAM: &str = "key";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Reasons a call cannot be turned into a request. Nothing is sent in any of these cases.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    UnsupportedMethod(#[from] UnsupportedMethodError),
    #[error(transparent)]
    InvalidParameter(#[from] ParamsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A request ready to be handed to a [`Transport`](super::transport::Transport).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: http::Method,
    /// Full target, query string included.
    pub url: Url,
    pub headers: HeaderMap,
    /// Encoded form body, only set for `POST`.
    pub body: Option<String>,
}

impl ApiRequest {
    /// A bare `GET` with no parameters, no credential and no body.
    pub fn get(url: Url) -> Self {
        Self {
            method: http::Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Builds [`ApiRequest`]s against a fixed base URL with a fixed credential.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    credential: ApiKey,
}

impl RequestBuilder {
    /// # Returns
    ///
    /// * `Ok(RequestBuilder)` - The builder.
    /// * `Err(ConfigError::CannotBeABase)` - If `base_url` cannot carry path segments
    ///   (e.g. `mailto:`), see [`Url::cannot_be_a_base`].
    pub fn new(base_url: Url, credential: ApiKey) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(base_url.to_string()));
        }

        Ok(Self::from_checked(base_url, credential))
    }

    /// For base URLs already validated by [`ClientConfig`](crate::client::ClientConfig).
    pub(crate) fn from_checked(base_url: Url, credential: ApiKey) -> Self {
        Self {
            base_url,
            credential,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the request for one call.
    ///
    /// # Returns
    ///
    /// * `Ok(ApiRequest)` - The encoded request.
    /// * `Err(RequestError)` - If the method verb is neither `GET` nor `POST` (the index already
    ///   rejects such schemas, this guards hand-built definitions), or a parameter is a
    ///   non-finite float.
    pub fn build(
        &self,
        interface: &str,
        method: &MethodDefinition,
        params: &Params,
    ) -> Result<ApiRequest, RequestError> {
        let http_method: HttpMethod = method.http_method.parse()?;
        let pairs = self.merge(method, params)?;

        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(interface)
            .push(&method.name)
            .push(&format!("v{}", method.version))
            .push("");

        let mut headers = HeaderMap::new();

        let body = match http_method {
            HttpMethod::Get => {
                url.query_pairs_mut().extend_pairs(&pairs);
                None
            }
            HttpMethod::Post => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
                Some(
                    form_urlencoded::Serializer::new(String::new())
                        .extend_pairs(&pairs)
                        .finish(),
                )
            }
        };

        tracing::debug!(
            method = %http_method,
            path = url.path(),
            params = pairs.len(),
            "request built"
        );

        Ok(ApiRequest {
            method: http_method.into(),
            url,
            headers,
            body,
        })
    }

    fn merge(
        &self,
        method: &MethodDefinition,
        params: &Params,
    ) -> Result<BTreeMap<String, String>, ParamsError> {
        let mut merged = BTreeMap::new();

        for (name, value) in params.present() {
            if name == KEY_PARAM {
                continue;
            }
            if let ParamValue::Float(f) = value
                && !f.is_finite()
            {
                return Err(ParamsError::NonFinite(name.to_string()));
            }
            if method.parameter(name).is_none() {
                tracing::warn!(
                    parameter = name,
                    method = %method.identifier(),
                    "parameter is not declared by the method, passing it through"
                );
            }
            merged.insert(name.to_string(), value.to_string());
        }

        merged.insert(KEY_PARAM.to_string(), self.credential.expose().to_string());
        Ok(merged)
    }
}
