//! Look up a single node by path.

use std::path::PathBuf;

use hit_lib::{NodeRef, Renderer, TypeError, ValueType};

use super::source_loader::load_document;

pub struct GetArgs {
    pub file: PathBuf,
    pub path: String,
    pub value_type: Option<ValueType>,
    pub color: bool,
}

pub fn run(args: GetArgs) {
    let doc = load_document(&args.file).unwrap_or_else(|err| err.exit(args.color));

    let Some(node) = doc.find(&args.path) else {
        eprintln!(
            "error: no node at '{}' in '{}'",
            args.path,
            doc.source_name()
        );
        std::process::exit(1);
    };

    match format_value(node, args.value_type) {
        Ok(text) if node.is_section() => print!("{}", text),
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Text printed for `node`. Sections render as a subtree unless a type is requested.
pub fn format_value(node: NodeRef<'_>, value_type: Option<ValueType>) -> Result<String, TypeError> {
    match value_type {
        None if node.is_section() => Ok(Renderer::new(node.document()).render_node(node.id())),
        None | Some(ValueType::String) => node.as_str().map(str::to_owned),
        Some(ValueType::Bool) => node.as_bool().map(|v| v.to_string()),
        Some(ValueType::Int) => node.as_int().map(|v| v.to_string()),
        Some(ValueType::Float) => node.as_float().map(|v| v.to_string()),
    }
}
