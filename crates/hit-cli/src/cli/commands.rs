//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("hit")
        .about("Check, format, query and merge HIT input decks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(color_arg())
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(fmt_command())
        .subcommand(get_command())
        .subcommand(merge_command())
        .subcommand(ast_command())
}

/// Validate one or more decks.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate input decks")
        .override_usage("  hit check <FILE>...")
        .after_help(
            r#"EXAMPLES:
  hit check input.i                 # silent when valid
  hit check base.i patch.i          # several files, exit 1 if any fails
  cat input.i | hit check -         # from stdin"#,
        )
        .arg(files_arg())
}

/// Print the canonical rendering of a deck.
pub fn fmt_command() -> Command {
    Command::new("fmt")
        .about("Print a deck in canonical layout")
        .override_usage("  hit fmt <FILE> [--indent <N>] [--no-comments]")
        .after_help(
            r#"EXAMPLES:
  hit fmt input.i                   # two-space indentation
  hit fmt input.i --indent 4        # wider indentation
  hit fmt input.i --no-comments     # strip comments"#,
        )
        .arg(file_arg())
        .arg(indent_arg())
        .arg(no_comments_arg())
}

/// Look up a single node.
pub fn get_command() -> Command {
    Command::new("get")
        .about("Print the value at a path")
        .override_usage("  hit get <FILE> <PATH> [--type <TYPE>]")
        .after_help(
            r#"EXAMPLES:
  hit get input.i Mesh/nx           # raw value
  hit get input.i Mesh/nx -t int    # fail unless it is an integer
  hit get input.i Mesh              # a section prints its subtree"#,
        )
        .arg(file_arg())
        .arg(path_arg())
        .arg(type_arg())
}

/// Merge patches into a base deck.
pub fn merge_command() -> Command {
    Command::new("merge")
        .about("Merge patches into a base deck and print the result")
        .override_usage("  hit merge <BASE> <PATCH>... [--indent <N>] [--no-comments]")
        .after_help(
            r#"EXAMPLES:
  hit merge base.i refine.i         # refine.i wins on conflicts
  hit merge base.i a.i b.i          # a.i first, then b.i"#,
        )
        .arg(base_arg())
        .arg(patches_arg())
        .arg(indent_arg())
        .arg(no_comments_arg())
}

/// Show the parsed tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the parsed tree of a deck")
        .override_usage("  hit ast <FILE> [--spans] [--comments]\n  hit ast <FILE> --json")
        .after_help(
            r#"EXAMPLES:
  hit ast input.i                   # tree outline
  hit ast input.i --spans           # with line:column positions
  hit ast input.i --json | jq .     # machine-readable"#,
        )
        .arg(file_arg())
        .arg(spans_arg())
        .arg(comments_arg())
        .arg(json_arg())
}
