use indoc::indoc;

use super::error;
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Stage};

#[test]
fn unmatched_close() {
    let input = indoc! {"
        [a]
        []
        []
    "};

    let err = error(input);
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::UnmatchedClose);
    insta::assert_snapshot!(err, @"test.i:3:1: error: `[]` does not close any section");
}

#[test]
fn unclosed_section_names_the_path() {
    let input = indoc! {"
        [a]
          [b]
            x = 1
          []
    "};

    let err = error(input);
    insta::assert_snapshot!(err, @"test.i:1:1: error: section `a` is never closed");
    let related = err.diagnostic().related();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].message, "input ends here");
    assert_eq!(related[0].position.line, 5);
}

#[test]
fn unclosed_nested_section_uses_full_path() {
    let err = error("[a]\n[b/c]\n");
    insta::assert_snapshot!(err, @"test.i:2:1: error: section `a/b/c` is never closed");
}

#[test]
fn unclosed_header() {
    let err = error("[a\nx = 1\n");
    insta::assert_snapshot!(err, @"test.i:2:1: error: missing closing `]` after `a`");
    assert_eq!(err.diagnostic().related()[0].position.line, 1);
}

#[test]
fn expected_equals() {
    insta::assert_snapshot!(error("x 1"), @"test.i:1:3: error: expected `=` after `x`");
}

#[test]
fn expected_value() {
    insta::assert_snapshot!(error("x =\n[a]\n[]\n"), @"test.i:2:1: error: expected a value for `x`");
    insta::assert_snapshot!(error("x ="), @"test.i:1:4: error: expected a value for `x`");
}

#[test]
fn expected_statement() {
    insta::assert_snapshot!(
        error("= 1"),
        @"test.i:1:1: error: expected a field assignment or section header, found `=`"
    );
    insta::assert_snapshot!(
        error("x = 1\n'loose'"),
        @"test.i:2:1: error: expected a field assignment or section header, found a string `'loose'`"
    );
}

#[test]
fn expected_section_path() {
    insta::assert_snapshot!(
        error("['a']\n[]"),
        @"test.i:1:2: error: expected a section path or `]`, found a string `'a'`"
    );
}

#[test]
fn invalid_paths() {
    insta::assert_snapshot!(
        error("a//b = 1"),
        @"test.i:1:1: error: invalid path: empty segment in `a//b`"
    );
    insta::assert_snapshot!(
        error("a/ = 1"),
        @"test.i:1:1: error: invalid path: empty segment in `a/`"
    );
    insta::assert_snapshot!(
        error("[a/../b]\n[]"),
        @"test.i:1:2: error: invalid path: `..` is only allowed as the whole header `[../]`, found `a/../b`"
    );
    insta::assert_snapshot!(
        error("[.]\n[]"),
        @"test.i:1:2: error: invalid path: `.` does not name a node"
    );
}

#[test]
fn duplicate_field() {
    let input = indoc! {"
        [a]
          x = 1
          x = 2
        []
    "};

    let err = error(input);
    insta::assert_snapshot!(err, @"test.i:3:3: error: field `x` is already defined in this section");
    let related = &err.diagnostic().related()[0];
    assert_eq!(related.message, "first defined here");
    assert_eq!((related.position.line, related.position.column), (2, 3));
}

#[test]
fn duplicate_field_across_reopened_blocks() {
    let err = error("[a]\nx = 1\n[]\n[a]\nx = 2\n[]\n");
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::DuplicateField);
    assert_eq!(err.diagnostic().line(), 5);
}

#[test]
fn field_over_section_conflicts() {
    let err = error("[a]\n[]\na = 1\n");
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::NameConflict);
    insta::assert_snapshot!(err, @"test.i:3:1: error: `a` is already defined as a section");
}

#[test]
fn section_over_field_conflicts() {
    let err = error("a = 1\n[a]\n[]\n");
    insta::assert_snapshot!(err, @"test.i:2:1: error: `a` is already defined as a field");

    let err = error("a = 1\na/b = 2\n");
    insta::assert_snapshot!(err, @"test.i:2:1: error: `a` is already defined as a field");
}

#[test]
fn lex_errors_abort_the_parse() {
    let err = error("[a]\nx = 'open\n[]\n");
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.diagnostic().stage(), Stage::Lex);
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::UnterminatedString);
}

#[test]
fn parse_errors_report_parse_stage() {
    let err = error("[]");
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.diagnostic().stage(), Stage::Parse);
}

#[test]
fn rendered_diagnostic_points_into_source() {
    let input = "x = 1\nx = 2\n";
    let err = error(input);

    let rendered = err.diagnostic().printer().source(input).render();
    assert!(rendered.contains("field `x` is already defined in this section"));
    assert!(rendered.contains("test.i"));
    assert!(rendered.contains("first defined here"));
    assert!(rendered.contains("x = 2"));
}
