//! # Mock Web API
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide an HTTP server and a matching
//! schema for integration testing the `vapor` client and CLI.
//! It is not intended for production use.
//!
//! Every route is answered by a single echo handler:
//!
//! * `ISteamWebAPIUtil/GetSupportedAPIList/v1/` returns [`SCHEMA`], no key required.
//! * Any other request without `key=MOCK_API_KEY` (query or form body) gets `403 Forbidden`.
//! * Interface `IMockBroken` answers `200` with a body that is not JSON.
//! * Everything else echoes the request back as JSON:
//!   `{ "method", "path", "content_type", "query": {..}, "form": {..} }`.
use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::collections::BTreeMap;
use std::net::SocketAddr;

pub const MOCK_API_KEY: &str = "MOCK-KEY-0123456789";

/// The schema served by the mock, in the Web API `GetSupportedAPIList` format.
pub const SCHEMA: &str = r##"{
  "apilist": {
    "interfaces": [
      {
        "name": "ISteamNews",
        "methods": [
          {
            "name": "GetNewsForApp",
            "version": 2,
            "httpmethod": "GET",
            "parameters": [
              { "name": "appid", "type": "uint32", "optional": false, "description": "AppID to retrieve news for" },
              { "name": "count", "type": "uint32", "optional": false, "description": "# of posts to retrieve (default 20)" },
              { "name": "maxlength", "type": "uint32", "optional": true, "description": "Maximum length for the content to return" }
            ]
          }
        ]
      },
      {
        "name": "ICheatReportingService",
        "methods": [
          {
            "name": "ReportPlayerCheating",
            "version": 1,
            "httpmethod": "POST",
            "parameters": [
              { "name": "key", "type": "string", "optional": false, "description": "Access key" },
              { "name": "steamid", "type": "uint64", "optional": false, "description": "steamid of the user running and reporting the cheat." },
              { "name": "appid", "type": "uint32", "optional": false, "description": "The appid." },
              { "name": "heuristic", "type": "bool", "optional": true, "description": "true if the report is from a heuristic." }
            ]
          }
        ]
      },
      {
        "name": "ISteamWebAPIUtil",
        "methods": [
          { "name": "GetServerInfo", "version": 1, "httpmethod": "GET", "parameters": [] },
          { "name": "GetSupportedAPIList", "version": 1, "httpmethod": "GET", "parameters": [
              { "name": "key", "type": "string", "optional": true, "description": "access key" }
          ] }
        ]
      },
      {
        "name": "IMockBroken",
        "methods": [
          { "name": "Fetch", "httpmethod": "GET", "parameters": [] }
        ]
      }
    ]
  }
}"##;

/// The mock service as an axum router.
pub fn router() -> Router {
    Router::new().fallback(echo)
}

/// Binds the mock on an ephemeral local port and serves it in the background.
///
/// Returns the base URL to point a client at (e.g. `http://127.0.0.1:41234`).
pub async fn spawn() -> std::io::Result<String> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router()).await;
    });

    Ok(format!("http://{addr}"))
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().to_string();
    let query = pairs(uri.query().unwrap_or_default().as_bytes());
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let form = match content_type.as_deref() {
        Some("application/x-www-form-urlencoded") => pairs(&body),
        _ => BTreeMap::new(),
    };

    if path == "/ISteamWebAPIUtil/GetSupportedAPIList/v1/" {
        return ([(header::CONTENT_TYPE, "application/json")], SCHEMA).into_response();
    }

    let key = query.get("key").or_else(|| form.get("key"));
    if key.map(String::as_str) != Some(MOCK_API_KEY) {
        return (StatusCode::FORBIDDEN, "<html><body>Forbidden</body></html>").into_response();
    }

    if path.starts_with("/IMockBroken/") {
        return (StatusCode::OK, "<html><body>Service Unavailable</body></html>").into_response();
    }

    axum::Json(json!({
        "method": method.as_str(),
        "path": path,
        "content_type": content_type,
        "query": query,
        "form": form,
    }))
    .into_response()
}

fn pairs(input: &[u8]) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_complete_json() {
        let schema: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();

        let interfaces = schema["apilist"]["interfaces"].as_array().unwrap();
        assert_eq!(interfaces.len(), 4);
        assert_eq!(
            interfaces[0]["methods"][0]["parameters"][1]["description"],
            "# of posts to retrieve (default 20)"
        );
    }

    #[test]
    fn test_manifest_inherits_workspace_package() {
        assert!(!env!("CARGO_PKG_AUTHORS").is_empty());
        assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT OR Apache-2.0");
        assert_eq!(env!("CARGO_PKG_RUST_VERSION"), "1.89");
    }
}
