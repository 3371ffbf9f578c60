//! # Vapor CLI Entry Point
//!
//! The main executable for the Vapor tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs logging.
//! 2. **Schema**: Loads the Web API schema from disk (or downloads it, for `fetch`).
//! 3. **Execution**: Delegates calls to the `VaporClient`, or renders the schema.
//! 4. **Presentation**: Formats and prints the resulting data or error to standard output/error.
mod cli;
mod docgen;
mod fetch;
mod formatter;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, DescribeCommands};
use formatter::{FormattedString, InterfaceList, InterfaceView, MethodView};
use std::path::Path;
use std::process;
use vapor_core::client::{ClientConfig, Params, VaporClient};
use vapor_core::http::HttpTransport;
use vapor_core::schema::{MethodIndex, SchemaStore};

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    telemetry::init(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{}", FormattedString::from(err));
        process::exit(1);
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let Cli {
        schema,
        base_url,
        key,
        command,
        ..
    } = args;

    match command {
        Commands::Call {
            endpoint,
            params,
            json,
        } => {
            let (interface, method) = endpoint;
            let key = key.context("Missing API key: pass --key or set STEAM_API_KEY")?;
            let params = collect_params(json, params)?;
            run_call(&schema, &base_url, key, &interface, &method, params).await
        }
        Commands::Fetch { out } => {
            let out = out.unwrap_or(schema);
            let fetched = fetch::fetch(&base_url).await?;
            fetched.save(&out)?;
            println!(
                "Saved {} interfaces to {}",
                fetched.interface_count(),
                out.display()
            );
            Ok(())
        }
        Commands::List { filter } => {
            let index = load_index(&schema)?;
            let interfaces = index
                .filter_interfaces(filter.as_deref().unwrap_or_default())
                .map(|(name, methods)| (name.to_string(), methods.len()))
                .collect();
            println!("{}", FormattedString::from(InterfaceList(interfaces)));
            Ok(())
        }
        Commands::Describe { sub } => {
            let index = load_index(&schema)?;
            match sub {
                DescribeCommands::Interface { interface } => {
                    let methods = index
                        .interface(&interface)
                        .with_context(|| format!("Interface '{interface}' not found"))?;
                    println!("{}", FormattedString::from(InterfaceView(&interface, methods)));
                }
                DescribeCommands::Method { method } => {
                    let (interface, id) = method;
                    let definition = index.get(&interface, &id).with_context(|| {
                        format!("Method '{id}' not found in interface '{interface}'")
                    })?;
                    println!("{}", FormattedString::from(MethodView(&interface, definition)));
                }
            }
            Ok(())
        }
        Commands::Docs { out } => {
            let index = load_index(&schema)?;
            docgen::generate(&out, &index)
                .with_context(|| format!("Failed to write docs to '{}'", out.display()))
        }
        Commands::Generate { out } => {
            let index = load_index(&schema)?;
            write_bindings(&out, &index)?;
            println!("Generated: {}", out.display());
            Ok(())
        }
    }
}

async fn run_call(
    schema: &Path,
    base_url: &str,
    key: String,
    interface: &str,
    method: &str,
    params: Params,
) -> anyhow::Result<()> {
    let store = load_store(schema)?;
    let config = ClientConfig::new(key).with_base_url(base_url)?;
    let client = VaporClient::from_store(&store, config, HttpTransport::new())?;

    match client.call(interface, method, params).await {
        Ok(value) => println!("{}", FormattedString::from(value)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }

    Ok(())
}

/// Merges `--params` JSON and `-p name=value` pairs, the latter winning.
fn collect_params(
    json: Option<serde_json::Value>,
    pairs: Vec<(String, String)>,
) -> anyhow::Result<Params> {
    let mut params = match json {
        Some(json) => Params::from_json(&json).context("Invalid --params")?,
        None => Params::new(),
    };

    for (name, value) in pairs {
        params.insert(name, value);
    }

    Ok(params)
}

fn load_store(path: &Path) -> anyhow::Result<SchemaStore> {
    SchemaStore::from_path(path)
        .context("Failed to load the schema (run `vapor fetch` to download it)")
}

fn load_index(path: &Path) -> anyhow::Result<MethodIndex> {
    Ok(load_store(path)?.index()?)
}

fn write_bindings(out: &Path, index: &MethodIndex) -> anyhow::Result<()> {
    std::fs::write(out, vapor_core::codegen::generate(index))
        .with_context(|| format!("Failed to write bindings to '{}'", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vapor_core::client::ParamValue;

    #[test]
    fn test_collect_params_pairs_override_json() {
        let params = collect_params(
            Some(serde_json::json!({ "appid": 440, "count": 3, "maxlength": null })),
            vec![("count".to_string(), "5".to_string())],
        )
        .unwrap();

        assert_eq!(params.get("appid"), Some(&ParamValue::from(440u64)));
        assert_eq!(params.get("count"), Some(&ParamValue::from("5")));
        assert_eq!(params.get("maxlength"), None);
    }

    #[test]
    fn test_collect_params_rejects_nested_values() {
        let err = collect_params(Some(serde_json::json!({ "ids": [1, 2] })), vec![]).unwrap_err();

        assert!(err.to_string().contains("Invalid --params"));
    }

    #[test]
    fn test_missing_schema_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_index(&dir.path().join("missing.json")).unwrap_err();

        assert!(format!("{err:#}").contains("vapor fetch"));
    }

    #[test]
    fn test_write_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("api-definition.json");
        let out = dir.path().join("bindings.rs");
        std::fs::write(&schema, mock_webapi::SCHEMA).unwrap();

        write_bindings(&out, &load_index(&schema).unwrap()).unwrap();

        let code = std::fs::read_to_string(&out).unwrap();
        assert!(code.contains("pub async fn get_news_for_app_v2("));
        assert!(code.contains("pub struct ICheatReportingService<'a, T> {"));
    }
}
