use colored::*;
use vapor_core::client::CallError;
use vapor_core::schema::index::MethodTable;
use vapor_core::schema::{HttpMethod, MethodDefinition};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

/// Interface names with their method counts.
pub struct InterfaceList(pub Vec<(String, usize)>);

/// An interface and all of its methods.
pub struct InterfaceView<'a>(pub &'a str, pub &'a MethodTable);

/// A single method of an interface, with its parameter table.
pub struct MethodView<'a>(pub &'a str, pub &'a MethodDefinition);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        FormattedString(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
    }
}

impl From<CallError> for FormattedString {
    fn from(err: CallError) -> Self {
        let title = match &err {
            CallError::Resolution(_) => "Method Lookup Failed:",
            CallError::UnsupportedMethod(_) => "Unsupported Method:",
            CallError::InvalidParameter(_) => "Invalid Parameter:",
            CallError::Config(_) => "Invalid Configuration:",
            CallError::Transport(_) => "Connection Error:",
            CallError::Api(_) => "Web API Failed:",
            CallError::Decode(_) => "Invalid Response:",
        };

        FormattedString(format!("{}\n\n'{}'", title.red().bold(), err))
    }
}

impl From<anyhow::Error> for FormattedString {
    fn from(err: anyhow::Error) -> Self {
        FormattedString(format!("{}\n\n'{:#}'", "Error:".red().bold(), err))
    }
}

impl From<InterfaceList> for FormattedString {
    fn from(InterfaceList(interfaces): InterfaceList) -> Self {
        if interfaces.is_empty() {
            return FormattedString("No interfaces found.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Available Interfaces:\n");
        for (name, count) in interfaces {
            out.push_str(&format!(
                "  - {} {}\n",
                name.green(),
                format!("({})", method_count(count)).dimmed()
            ));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<InterfaceView<'_>> for FormattedString {
    fn from(InterfaceView(name, methods): InterfaceView<'_>) -> Self {
        let mut out = String::new();
        out.push_str(&format!("{} {} {{\n", "interface".cyan(), name.green()));

        for method in methods.values() {
            out.push_str(&format!("  {}\n", signature(method)));
        }
        out.push('}');
        FormattedString(out)
    }
}

impl From<MethodView<'_>> for FormattedString {
    fn from(MethodView(interface, method): MethodView<'_>) -> Self {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}/{}/v{}/\n",
            verb(&method.http_method),
            interface,
            method.name.green(),
            method.version
        ));
        out.push_str(&format!(
            "  {} {}\n",
            "version".cyan(),
            method.version.to_string().purple()
        ));

        if method.parameters.is_empty() {
            out.push_str(&format!("  {} {}", "parameters".cyan(), "none".dimmed()));
            return FormattedString(out);
        }

        out.push_str(&format!("  {}\n", "parameters".cyan()));

        let name_width = method.parameters.iter().map(|p| p.name.len()).max().unwrap_or(0);
        let kind_width = method.parameters.iter().map(|p| p.kind.len()).max().unwrap_or(0);

        for param in &method.parameters {
            let presence = if param.optional {
                "optional".dimmed()
            } else {
                "required".bold()
            };
            let line = format!(
                "    {} {} {} {}",
                format!("{:<name_width$}", param.name).green(),
                format!("{:<kind_width$}", param.kind).yellow(),
                presence,
                param.description.trim()
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }

        FormattedString(out.trim_end().to_string())
    }
}

pub fn method_count(count: usize) -> String {
    match count {
        1 => "1 method".to_string(),
        n => format!("{n} methods"),
    }
}

/// One-line rendering of a method: `GET GetNewsForApp_v2(appid: uint32, maxlength?: uint32)`.
fn signature(method: &MethodDefinition) -> String {
    let params = method
        .parameters
        .iter()
        .map(|p| {
            let marker = if p.optional { "?" } else { "" };
            format!("{}{marker}: {}", p.name, p.kind.yellow())
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {}({})",
        verb(&method.http_method),
        method.identifier().as_str().green(),
        params
    )
}

fn verb(http_method: &str) -> ColoredString {
    match http_method.parse::<HttpMethod>() {
        Ok(HttpMethod::Get) => http_method.blue().bold(),
        Ok(HttpMethod::Post) => http_method.magenta().bold(),
        Err(_) => http_method.red(),
    }
}
