//! # Binding Generator
//!
//! Emits typed Rust wrappers for every method of a [`MethodIndex`]. The output is meant to be
//! written to a file from a build script or with `vapor generate`, and `include!`d.
//!
//! For each interface it produces:
//!
//! * a wrapper struct named after the interface, borrowing a [`VaporClient`](crate::client::VaporClient),
//!   with one `async fn {method}_v{version}` per method;
//! * one parameter struct per method, whose fields follow the declared parameter types
//!   (`Option<_>` for optional ones) and which converts into [`Params`](crate::client::Params).
//!
//! The declared `key` parameter is skipped, the client always injects the credential.
//! The wrappers call into the dynamic client, so they add compile-time checking of parameter
//! names and types but no new behavior.
use crate::http::request::KEY_PARAM;
use crate::schema::{MethodDefinition, MethodIndex, ParameterDefinition};
use std::collections::HashSet;
use std::fmt::Write;

const HEADER: &str = "\
// @generated by vapor. Do not edit by hand.
//
// Typed wrappers over `vapor_core::client::VaporClient`, one per Web API method.
";

const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

// Cannot be raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate"];

/// Renders the bindings of every method in `index`.
pub fn generate(index: &MethodIndex) -> String {
    let mut out = String::from(HEADER);
    let mut types = Idents::default();

    for (interface, methods) in index.iter() {
        let interface_ident = types.unique(&sanitize(interface));
        let mut fns = Idents::default();
        let mut wrappers = String::new();
        let mut structs = String::new();

        for method in methods.values() {
            let fn_ident = fns.unique(&sanitize(&format!(
                "{}_v{}",
                snake_case(&method.name),
                method.version
            )));
            let params_ident = types.unique(&sanitize(&format!(
                "{interface_ident}{}V{}Params",
                pascal_case(&method.name),
                method.version
            )));

            write_wrapper_fn(&mut wrappers, interface, method, &fn_ident, &params_ident);
            write_params_struct(&mut structs, interface, method, &params_ident);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "/// Methods of the `{interface}` interface.");
        let _ = writeln!(out, "#[allow(non_camel_case_types)]");
        let _ = writeln!(out, "pub struct {interface_ident}<'a, T> {{");
        let _ = writeln!(
            out,
            "    client: &'a vapor_core::client::VaporClient<T>,"
        );
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "impl<'a, T: vapor_core::http::Transport> {interface_ident}<'a, T> {{"
        );
        let _ = writeln!(
            out,
            "    pub fn new(client: &'a vapor_core::client::VaporClient<T>) -> Self {{"
        );
        let _ = writeln!(out, "        Self {{ client }}");
        let _ = writeln!(out, "    }}");
        out.push_str(&wrappers);
        let _ = writeln!(out, "}}");
        out.push_str(&structs);
    }

    out
}

fn write_wrapper_fn(
    out: &mut String,
    interface: &str,
    method: &MethodDefinition,
    fn_ident: &str,
    params_ident: &str,
) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "    /// `{} {interface}/{}/v{}/`",
        method.http_method, method.name, method.version
    );
    let _ = writeln!(out, "    #[allow(non_snake_case)]");
    let _ = writeln!(out, "    pub async fn {fn_ident}(");
    let _ = writeln!(out, "        &self,");
    let _ = writeln!(out, "        params: {params_ident},");
    let _ = writeln!(
        out,
        "    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {{"
    );
    let _ = writeln!(out, "        self.client");
    let _ = writeln!(
        out,
        "            .call({interface:?}, {:?}, params.into())",
        method.identifier().as_str()
    );
    let _ = writeln!(out, "            .await");
    let _ = writeln!(out, "    }}");
}

fn write_params_struct(
    out: &mut String,
    interface: &str,
    method: &MethodDefinition,
    params_ident: &str,
) {
    let mut fields = Idents::default();
    let parameters: Vec<(String, &ParameterDefinition)> = method
        .parameters
        .iter()
        .filter(|p| p.name != KEY_PARAM)
        .map(|p| (fields.unique(&sanitize(&snake_case(&p.name))), p))
        .collect();

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "/// Parameters of `{interface}.{}`.",
        method.identifier()
    );
    let _ = writeln!(out, "#[derive(Debug, Clone, Default, PartialEq)]");
    let _ = writeln!(out, "#[allow(non_camel_case_types, non_snake_case)]");
    let _ = writeln!(out, "pub struct {params_ident} {{");
    for (field, param) in &parameters {
        for line in param.description.lines().filter(|l| !l.trim().is_empty()) {
            let _ = writeln!(out, "    /// {}", line.trim());
        }
        let ty = rust_type(&param.kind);
        if param.optional {
            let _ = writeln!(out, "    pub {field}: Option<{ty}>,");
        } else {
            let _ = writeln!(out, "    pub {field}: {ty},");
        }
    }
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "impl From<{params_ident}> for vapor_core::client::Params {{"
    );

    if parameters.is_empty() {
        let _ = writeln!(out, "    fn from(_: {params_ident}) -> Self {{");
        let _ = writeln!(out, "        vapor_core::client::Params::new()");
    } else {
        let _ = writeln!(out, "    fn from(p: {params_ident}) -> Self {{");
        let _ = writeln!(out, "        let mut params = vapor_core::client::Params::new();");
        for (field, param) in &parameters {
            let insert = if param.optional { "insert_opt" } else { "insert" };
            let _ = writeln!(out, "        params.{insert}({:?}, p.{field});", param.name);
        }
        let _ = writeln!(out, "        params");
    }

    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
}

/// Maps a descriptive schema type onto the Rust type of a generated field.
fn rust_type(kind: &str) -> &'static str {
    match kind.trim().to_ascii_lowercase().as_str() {
        "uint32" => "u32",
        "int32" => "i32",
        "uint64" | "fixed64" => "u64",
        "int64" => "i64",
        "bool" => "bool",
        "float" | "double" => "f64",
        _ => "String",
    }
}

fn snake_case(name: &str) -> String {
    use cruet::*;
    name.to_snake_case()
}

fn pascal_case(name: &str) -> String {
    use cruet::*;
    name.to_pascal_case()
}

/// Turns an arbitrary schema name into a valid Rust identifier.
fn sanitize(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident == "_" || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if NON_RAW.contains(&ident.as_str()) {
        ident.push('_');
    } else if RESERVED.contains(&ident.as_str()) {
        ident.insert_str(0, "r#");
    }

    ident
}

/// Hands out identifiers, suffixing repeated ones with `_2`, `_3`, ...
#[derive(Default)]
struct Idents(HashSet<String>);

impl Idents {
    fn unique(&mut self, candidate: &str) -> String {
        let mut ident = candidate.to_string();
        let mut n = 2;
        while !self.0.insert(ident.clone()) {
            ident = format!("{candidate}_{n}");
            n += 1;
        }
        ident
    }
}
