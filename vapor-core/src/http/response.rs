//! # Response Handler
//!
//! Checks the status of a [`RawResponse`] and decodes its body as JSON. The payload is passed
//! through untyped: the schema only describes requests.
use super::transport::RawResponse;

/// The remote service answered with a status outside `200..=299`.
///
/// `reason` is the standard phrase for `status`, or `"Unknown"` for codes without one (such as
/// `599`). The phrase the server actually sent is not available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API error: {status} {reason}")]
pub struct ApiError {
    pub status: u16,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Failed to decode response body as JSON: '{0}'")]
    Decode(#[source] serde_json::Error),
}

/// Validates the status and decodes the body.
///
/// Either the whole body decodes or the call fails, there is no partial result.
pub fn handle(response: RawResponse) -> Result<serde_json::Value, ResponseError> {
    let status = response.status;

    if !status.is_success() {
        return Err(ApiError {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
        .into());
    }

    serde_json::from_slice(&response.body).map_err(ResponseError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};

    fn response(status: u16, body: &'static str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_success_body_is_returned_unmodified() {
        let value = handle(response(200, r#"{"appnews":{"appid":440,"newsitems":[]}}"#)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "appnews": { "appid": 440, "newsitems": [] } })
        );
    }

    #[test]
    fn test_whole_success_range_is_accepted() {
        assert!(handle(response(204, "null")).is_ok());
        assert!(handle(response(299, "{}")).is_ok());
    }

    #[test]
    fn test_forbidden_is_an_api_error() {
        match handle(response(403, "<html>Forbidden</html>")) {
            Err(ResponseError::Api(err)) => assert_eq!(
                err,
                ApiError {
                    status: 403,
                    reason: "Forbidden".to_string()
                }
            ),
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_unregistered_status_has_unknown_reason() {
        match handle(response(599, "")) {
            Err(ResponseError::Api(err)) => {
                assert_eq!(
                    err,
                    ApiError {
                        status: 599,
                        reason: "Unknown".to_string()
                    }
                );
                assert_eq!(err.to_string(), "API error: 599 Unknown");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_is_not_a_success() {
        assert!(matches!(
            handle(response(302, "")),
            Err(ResponseError::Api(ApiError { status: 302, .. }))
        ));
    }

    #[test]
    fn test_invalid_json_fails_to_decode() {
        assert!(matches!(
            handle(response(200, "<html>oops</html>")),
            Err(ResponseError::Decode(_))
        ));
    }
}
