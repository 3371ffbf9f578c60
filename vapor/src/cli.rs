//! # CLI
//!
//! This module defines the command-line interface of `vapor` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring endpoints
//! are `Interface/Method_vN` and parameters are `name=value`).
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vapor", version, about = "Dynamic Steam Web API CLI")]
pub struct Cli {
    /// Path to the Web API schema (the `GetSupportedAPIList` JSON document)
    #[arg(
        long,
        global = true,
        env = "VAPOR_SCHEMA",
        default_value = "api-definition.json"
    )]
    pub schema: PathBuf,

    /// Root URL of the Web API (e.g. http://localhost:8080)
    #[arg(long, global = true, env = "VAPOR_BASE_URL", default_value = vapor_core::client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Steam Web API key, attached to every call as `key`
    #[arg(long, global = true, env = "STEAM_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Log requests and responses to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call a Web API method
    ///
    /// Parameters can be given one by one with `-p name=value`, as a JSON object with `--params`,
    /// or both (`-p` wins on conflicts).
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// vapor call ISteamNews/GetNewsForApp_v2 -p appid=440 -p count=3
    /// ```
    Call {
        /// Endpoint (Interface/Method_vN)
        #[arg(value_parser = parse_endpoint)]
        endpoint: (String, String),

        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// JSON object of parameters (e.g. '{"appid": 440}')
        #[arg(long = "params", value_parser = parse_params_json)]
        json: Option<serde_json::Value>,
    },

    /// Download the schema from the Web API (`ISteamWebAPIUtil/GetSupportedAPIList/v1/`)
    Fetch {
        /// Where to write the schema. Defaults to the `--schema` path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the interfaces of the schema
    List {
        /// Only show interfaces whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Describe an interface or a method in detail
    Describe {
        #[command(subcommand)]
        sub: DescribeCommands,
    },

    /// Render Markdown documentation for every interface
    Docs {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Generate typed Rust bindings for every method
    Generate {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum DescribeCommands {
    /// Describe an interface (list its methods)
    Interface {
        /// Interface name (e.g. ISteamNews)
        interface: String,
    },
    /// Describe a method (verb, version and parameters)
    Method {
        /// Method endpoint (e.g. ISteamNews/GetNewsForApp_v2)
        #[arg(value_parser = parse_endpoint)]
        method: (String, String),
    },
}

fn parse_endpoint(value: &str) -> Result<(String, String), String> {
    let (interface, method) = value.split_once('/').ok_or_else(|| {
        format!("Invalid endpoint format: '{value}'. Expected 'Interface/Method_vN'")
    })?;

    if interface.trim().is_empty() || method.trim().is_empty() {
        return Err("Interface and Method names cannot be empty".to_string());
    }

    Ok((interface.to_string(), method.to_string()))
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| "Format must be 'name=value'".to_string())?;

    let name = name.trim();
    if name.is_empty() {
        return Err("Parameter name cannot be empty".to_string());
    }

    Ok((name.to_string(), value.to_string()))
}

fn parse_params_json(value: &str) -> Result<serde_json::Value, String> {
    let json: serde_json::Value =
        serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))?;

    if !json.is_object() {
        return Err("Parameters must be a JSON object".to_string());
    }

    Ok(json)
}
