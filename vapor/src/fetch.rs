//! # Schema Download
//!
//! Retrieves the schema from `ISteamWebAPIUtil/GetSupportedAPIList/v1/`. The request carries no
//! credential, so the result only lists the publicly documented interfaces.
use anyhow::{Context, bail};
use std::path::Path;
use vapor_core::http::{ApiRequest, HttpTransport, Transport, response};
use vapor_core::schema::SchemaStore;
use vapor_core::url::Url;

const SCHEMA_PATH: [&str; 3] = ["ISteamWebAPIUtil", "GetSupportedAPIList", "v1"];

/// A schema downloaded from the Web API, validated before anything is written.
pub struct FetchedSchema {
    raw: serde_json::Value,
    store: SchemaStore,
}

impl FetchedSchema {
    pub fn interface_count(&self) -> usize {
        self.store.interfaces().len()
    }

    /// Writes the schema as pretty-printed JSON, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.raw)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write schema to '{}'", path.display()))
    }
}

pub async fn fetch(base_url: &str) -> anyhow::Result<FetchedSchema> {
    let url = schema_url(base_url)?;
    tracing::debug!(%url, "fetching schema");

    let response = HttpTransport::new()
        .send(ApiRequest::get(url))
        .await
        .context("Failed to download the schema")?;

    let raw = response::handle(response).context("The Web API rejected the schema request")?;
    let store = SchemaStore::load(&raw).context("The downloaded schema is invalid")?;

    Ok(FetchedSchema { raw, store })
}

fn schema_url(base_url: &str) -> anyhow::Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid base URL '{base_url}'"))?;

    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().extend(SCHEMA_PATH).push("");
        }
        Err(()) => bail!("Base URL '{base_url}' cannot carry a path"),
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_url() {
        assert_eq!(
            schema_url("https://api.steampowered.com").unwrap().as_str(),
            "https://api.steampowered.com/ISteamWebAPIUtil/GetSupportedAPIList/v1/"
        );
        assert_eq!(
            schema_url("http://localhost:8080/proxy/").unwrap().as_str(),
            "http://localhost:8080/proxy/ISteamWebAPIUtil/GetSupportedAPIList/v1/"
        );
        assert!(schema_url("mailto:someone@example.com").is_err());
        assert!(schema_url("not a url").is_err());
    }

    #[tokio::test]
    async fn test_fetch_and_save() {
        let base_url = mock_webapi::spawn().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("api-definition.json");

        let schema = fetch(&base_url).await.unwrap();
        assert_eq!(schema.interface_count(), 4);

        schema.save(&path).unwrap();

        let saved = SchemaStore::from_path(&path).unwrap();
        assert_eq!(saved.interfaces().len(), 4);
        assert!(saved.index().unwrap().get("ISteamNews", "GetNewsForApp_v2").is_some());
    }

    #[tokio::test]
    async fn test_fetch_from_unreachable_server_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch(&format!("http://{addr}")).await.err().unwrap();
        assert!(format!("{err:#}").contains("Failed to download the schema"));
    }
}
