//! Field value kinds and on-demand coercion.
//!
//! Values are stored as raw text. Typed views are computed on every access.

use serde::Serialize;

use crate::literal::is_number;

/// How a field's value was written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// A bare word with number syntax.
    Number,
    /// A quoted string.
    Quoted,
    /// Any other bare word.
    Bare,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Quoted => "quoted",
            ValueKind::Bare => "bare",
        }
    }

    /// Kind for a value that has no source text of its own.
    pub fn infer(raw: &str) -> Self {
        if is_number(raw) {
            ValueKind::Number
        } else {
            ValueKind::Bare
        }
    }
}

/// Target type of a coercion, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Bool => write!(f, "bool"),
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::String => write!(f, "string"),
        }
    }
}

/// A field value that cannot be read as the requested type. The tree is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot read `{path}` as {expected}: {reason}")]
pub struct TypeError {
    pub path: String,
    pub expected: ValueType,
    pub reason: String,
}

/// Types a raw field value can be coerced into.
pub trait FromValue: Sized {
    /// Element type reported in errors.
    const TYPE: ValueType;

    /// Parse raw text, or explain why it does not fit.
    fn from_value(raw: &str) -> Result<Self, String>;
}

impl FromValue for String {
    const TYPE: ValueType = ValueType::String;

    fn from_value(raw: &str) -> Result<Self, String> {
        Ok(raw.to_owned())
    }
}

impl FromValue for bool {
    const TYPE: ValueType = ValueType::Bool;

    /// Case-insensitive `true`/`false`, `on`/`off`, `1`/`0`.
    fn from_value(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => Ok(true),
            "false" | "off" | "0" => Ok(false),
            _ => Err(format!("`{raw}` is not a boolean")),
        }
    }
}

impl FromValue for i64 {
    const TYPE: ValueType = ValueType::Int;

    fn from_value(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|e| format!("`{raw}` is not an integer ({e})"))
    }
}

impl FromValue for f64 {
    const TYPE: ValueType = ValueType::Float;

    fn from_value(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|e| format!("`{raw}` is not a number ({e})"))
    }
}

/// Whitespace-separated list, each element coerced on its own.
impl<T: FromValue> FromValue for Vec<T> {
    const TYPE: ValueType = T::TYPE;

    fn from_value(raw: &str) -> Result<Self, String> {
        raw.split_whitespace()
            .enumerate()
            .map(|(i, item)| T::from_value(item).map_err(|reason| format!("element {i}: {reason}")))
            .collect()
    }
}
