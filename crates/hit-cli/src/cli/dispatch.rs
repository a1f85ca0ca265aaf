//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use hit_lib::ValueType;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;
use crate::commands::get::GetArgs;
use crate::commands::merge::MergeArgs;

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub file: PathBuf,
    pub indent: usize,
    pub no_comments: bool,
    pub color: ColorChoice,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            indent: parse_indent(m),
            no_comments: m.get_flag("no_comments"),
            color: parse_color(m),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            file: p.file,
            indent: p.indent,
            comments: !p.no_comments,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GetParams {
    pub file: PathBuf,
    pub path: String,
    pub value_type: Option<ValueType>,
    pub color: ColorChoice,
}

impl GetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let value_type = match m.get_one::<String>("type").map(|s| s.as_str()) {
            Some("str") => Some(ValueType::String),
            Some("bool") => Some(ValueType::Bool),
            Some("int") => Some(ValueType::Int),
            Some("float") => Some(ValueType::Float),
            _ => None,
        };

        Self {
            file: required_path(m, "file"),
            path: m.get_one::<String>("path").cloned().unwrap_or_default(),
            value_type,
            color: parse_color(m),
        }
    }
}

impl From<GetParams> for GetArgs {
    fn from(p: GetParams) -> Self {
        Self {
            file: p.file,
            path: p.path,
            value_type: p.value_type,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MergeParams {
    pub base: PathBuf,
    pub patches: Vec<PathBuf>,
    pub indent: usize,
    pub no_comments: bool,
    pub color: ColorChoice,
}

impl MergeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            base: required_path(m, "base"),
            patches: m
                .get_many::<PathBuf>("patches")
                .map(|patches| patches.cloned().collect())
                .unwrap_or_default(),
            indent: parse_indent(m),
            no_comments: m.get_flag("no_comments"),
            color: parse_color(m),
        }
    }
}

impl From<MergeParams> for MergeArgs {
    fn from(p: MergeParams) -> Self {
        Self {
            base: p.base,
            patches: p.patches,
            indent: p.indent,
            comments: !p.no_comments,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub file: PathBuf,
    pub spans: bool,
    pub comments: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            spans: m.get_flag("spans"),
            comments: m.get_flag("comments"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            file: p.file,
            spans: p.spans,
            comments: p.comments,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// `-v` count. Global args are absent when a subcommand is built on its own.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.try_get_one::<u8>("verbose")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(0)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m
        .try_get_one::<String>("color")
        .ok()
        .flatten()
        .map(|s| s.as_str())
    {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_indent(m: &ArgMatches) -> usize {
    m.get_one::<usize>("indent").copied().unwrap_or(2)
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}
