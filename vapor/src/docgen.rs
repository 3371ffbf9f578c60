//! # Markdown Documentation
//!
//! Renders a [`MethodIndex`] as Markdown: one `{Interface}.md` page per interface, with an
//! anchored section per method, and an `index.md` linking all of them.
use crate::formatter::{FormattedString, MethodView, method_count};
use std::fs;
use std::path::Path;
use vapor_core::schema::index::MethodTable;
use vapor_core::schema::{MethodDefinition, MethodIndex};

pub fn generate(output_dir: &Path, index: &MethodIndex) -> std::io::Result<()> {
    // Disable colors for plain text generation
    colored::control::set_override(false);

    let result = write_pages(output_dir, index);

    // Restore colors
    colored::control::unset_override();
    result
}

fn write_pages(output_dir: &Path, index: &MethodIndex) -> std::io::Result<()> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    for (interface, methods) in index.iter() {
        let filename = format!("{interface}.md");
        fs::write(output_dir.join(&filename), generate_interface_file(interface, methods))?;
        println!("Generated: {filename}");
    }

    fs::write(output_dir.join("index.md"), generate_index(index))?;
    println!("Generated: index.md");

    Ok(())
}

fn generate_index(index: &MethodIndex) -> String {
    let mut out = String::new();

    out.push_str("# Steam Web API\n\n");
    out.push_str(&format!(
        "{} interfaces, {}.\n\n",
        index.interface_count(),
        method_count(index.len())
    ));

    out.push_str("## Interfaces\n\n");
    for (interface, methods) in index.iter() {
        out.push_str(&format!(
            "- [{interface}]({interface}.md) ({})\n",
            method_count(methods.len())
        ));
    }

    out
}

fn generate_interface_file(interface: &str, methods: &MethodTable) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Interface: `{interface}`\n\n"));

    out.push_str("## Methods\n\n");
    for id in methods.keys() {
        out.push_str(&format!("- [{id}](#{id})\n"));
    }
    out.push('\n');

    for (id, method) in methods {
        out.push_str(&format!("<a id=\"{id}\"></a>\n"));
        out.push_str(&format!("## {id}\n\n"));
        write_method_content(&mut out, interface, method);
        out.push_str("---\n\n");
    }

    out
}

fn write_method_content(out: &mut String, interface: &str, method: &MethodDefinition) {
    out.push_str(&format!("**HTTP Method**: `{}`\n\n", method.http_method));
    out.push_str(&format!(
        "**Path**: `/{interface}/{}/v{}/`\n\n",
        method.name, method.version
    ));

    out.push_str("### Definition\n\n```text\n");
    out.push_str(&FormattedString::from(MethodView(interface, method)).0);
    out.push_str("\n```\n\n");

    out.push_str("### Parameters\n\n");
    if method.parameters.is_empty() {
        out.push_str("*None*\n\n");
        return;
    }

    out.push_str("| Name | Type | Required | Description |\n");
    out.push_str("|------|------|----------|-------------|\n");
    for param in &method.parameters {
        out.push_str(&format!(
            "| `{}` | `{}` | {} | {} |\n",
            param.name,
            param.kind,
            if param.optional { "no" } else { "yes" },
            table_cell(&param.description)
        ));
    }
    out.push('\n');
}

fn table_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
