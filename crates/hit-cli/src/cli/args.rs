//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input deck (positional). `-` reads stdin.
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Input file (`-` for stdin)")
}

/// One or more input decks (positional).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .required(true)
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .help("Input files (`-` for stdin)")
}

/// Base deck for merge (positional).
pub fn base_arg() -> Arg {
    Arg::new("base")
        .value_name("BASE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Document the patches are merged into")
}

/// Patch decks for merge, applied left to right (positional).
pub fn patches_arg() -> Arg {
    Arg::new("patches")
        .value_name("PATCH")
        .required(true)
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .help("Patches, applied left to right")
}

/// Node path (positional).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .required(true)
        .help("Slash-separated node path, e.g. Mesh/nx")
}

/// Value type to coerce to (-t/--type).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .value_parser(["str", "bool", "int", "float"])
        .help("Coerce the value before printing")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(usize))
        .help("Spaces per nesting level")
}

/// Drop comments from the output (--no-comments).
pub fn no_comments_arg() -> Arg {
    Arg::new("no_comments")
        .long("no-comments")
        .action(ArgAction::SetTrue)
        .help("Omit comments")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions and merge origins")
}

/// Show comments in the tree dump (--comments).
pub fn comments_arg() -> Arg {
    Arg::new("comments")
        .long("comments")
        .action(ArgAction::SetTrue)
        .help("Show comments")
}

/// Emit JSON instead of the tree dump (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with_all(["spans", "comments"])
        .help("Print the tree as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log to stderr (-v for debug, -vv for trace); overrides HIT_LOG")
}
