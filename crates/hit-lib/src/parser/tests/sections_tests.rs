use indoc::indoc;

use super::{dump, dump_positions, error};
use crate::diagnostics::DiagnosticKind;
use crate::parser::{ParseOptions, Parser};

#[test]
fn nested_sections() {
    let input = indoc! {"
        [Mesh]
          dim = 2
          [gen]
            nx = 10
          []
        []
        [Variables]
          [u]
          []
        []
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Section Mesh
        Field dim = "2" (number)
        Section gen
          Field nx = "10" (number)
      Section Variables
        Section u
    "#);
}

#[test]
fn reopening_extends_the_same_section() {
    let input = indoc! {"
        [a]
          x = 1
        []
        [a]
          y = 2
        []
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Section a
        Field x = "1" (number)
        Field y = "2" (number)
    "#);
}

#[test]
fn multi_segment_header_opens_each_level() {
    let input = indoc! {"
        [a/b]
          x = 1
        []
        [a]
          y = 2
        []
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Section a
        Section b
          Field x = "1" (number)
        Field y = "2" (number)
    "#);
}

#[test]
fn headers_are_relative_to_the_current_section() {
    let input = indoc! {"
        [a]
          [b/c]
          []
        []
    "};

    let doc = crate::parse("test.i", input).expect("input should parse");
    let c = doc.find("a/b/c").expect("a/b/c exists");
    assert!(c.is_section());
    assert_eq!(c.full_path(), "a/b/c");
    assert_eq!(c.depth(), 3);
}

#[test]
fn legacy_relative_headers() {
    let input = indoc! {"
        [Kernels]
          [./diff]
            type = Diffusion
          [../]
        []
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Section Kernels
        Section diff
          Field type = "Diffusion" (bare)
    "#);
}

#[test]
fn fields_and_sections_interleave_in_source_order() {
    let input = indoc! {"
        x = 1
        [s]
        []
        y = 2
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Field x = "1" (number)
      Section s
      Field y = "2" (number)
    "#);
}

#[test]
fn positions_point_at_the_statement() {
    let input = indoc! {"
        [a]
          x = 1
        []
    "};

    insta::assert_snapshot!(dump_positions(input), @r#"
    Root
      Section a @1:1
        Field x = "1" (number) @2:3
    "#);
}

#[test]
fn reopened_section_keeps_first_position() {
    let input = indoc! {"
        [a]
        []
        [a]
          x = 1
        []
    "};

    let doc = crate::parse("test.i", input).expect("input should parse");
    let a = doc.find("a").expect("a exists");
    assert_eq!(a.line(), Some(1));
    assert_eq!(a.children().count(), 1);
}

#[test]
fn depth_limit_rejects_deep_nesting() {
    let input = "[a/b/c]\n[]\n";

    let err = Parser::new("test.i", input)
        .with_depth_limit(Some(2))
        .parse()
        .expect_err("too deep");
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::NestingTooDeep);
    insta::assert_snapshot!(err, @"test.i:1:1: error: sections are nested deeper than 2 levels");

    let doc = Parser::new("test.i", input)
        .with_depth_limit(Some(3))
        .parse()
        .expect("exactly at the limit");
    assert!(doc.find("a/b/c").is_some());

    let options = ParseOptions { depth_limit: None };
    assert!(crate::parse_with_options("test.i", input, options).is_ok());
}

#[test]
fn default_depth_limit_applies() {
    let mut input = String::new();
    for _ in 0..=crate::parser::DEFAULT_DEPTH_LIMIT {
        input.push_str("[s]\n");
    }
    for _ in 0..=crate::parser::DEFAULT_DEPTH_LIMIT {
        input.push_str("[]\n");
    }

    let err = error(&input);
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::NestingTooDeep);
    assert_eq!(err.diagnostic().line(), crate::parser::DEFAULT_DEPTH_LIMIT + 1);
}
