//! End-to-end behavior of parse, find, merge and render together.

use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::{Document, Error, find, merge, parse, render};

const DECKS: &[&str] = &[
    "",
    "x = 1\n",
    indoc! {"
        # Simple diffusion
        [Mesh]
          type = GeneratedMesh
          dim = 2
          nx = 10
        []
        [Variables]
          [u]
          []
        []
        [Kernels]
          [./diff]
            type = Diffusion
            variable = u
          [../]
        []
        [Outputs]
          exodus = true # write results
          file_base = 'out dir/result'
        []
    "},
    indoc! {r#"
        a/b/c = 'nested path'
        [a]
          d = "say \"hi\""
          e = 'multi
        line'
          f = -1.5e-3
          g = C:\dir\file
          h = ''
          i = "it's"
        []
        # trailing root comment
    "#},
];

fn parse_ok(name: &str, input: &str) -> Document {
    parse(name, input).expect("input should parse")
}

#[test]
fn render_then_parse_round_trips() {
    for deck in DECKS {
        let doc = parse_ok("deck.i", deck);
        let rendered = render(&doc);
        let reparsed = parse("rendered.i", &rendered)
            .unwrap_or_else(|err| panic!("rendered output failed to parse: {err}\n{rendered}"));
        assert!(doc.same_structure(&reparsed), "round trip changed:\n{rendered}");
        assert_eq!(render(&reparsed), rendered, "rendering is not stable");
    }
}

#[test]
fn merging_a_structural_copy_changes_nothing() {
    for deck in DECKS {
        let mut doc = parse_ok("deck.i", deck);
        let copy = parse_ok("copy.i", deck);

        merge(&mut doc, &copy);
        assert!(doc.same_structure(&copy));
    }
}

#[test]
fn merge_overwrites_field() {
    let mut base = parse_ok("base.i", "[a]\nx=1\n[]");
    let patch = parse_ok("patch.i", "[a]\nx=2\n[]");

    merge(&mut base, &patch);
    let x = find(&base, "a/x").expect("a/x exists");
    assert_eq!(x.as_int(), Ok(2));
}

#[test]
fn merge_appends_in_insertion_order() {
    let mut base = parse_ok("base.i", "[a]\nx=1\n[]");
    let patch = parse_ok("patch.i", "[a]\ny=2\n[]");

    merge(&mut base, &patch);
    let a = find(&base, "a").expect("a exists");
    let names: Vec<_> = a.children().map(|n| n.name()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn reopened_section_is_a_single_node() {
    let doc = parse_ok("deck.i", "[a]\nx=1\n[]\n[a]\ny=2\n[]");

    let top: Vec<_> = doc.root_node().children().collect();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name(), "a");
    let names: Vec<_> = top[0].children().map(|n| n.name()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn extra_close_fails_at_the_extra_close() {
    let err = parse("deck.i", "[a]\n[]\n[]").expect_err("extra close");
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::UnmatchedClose);
    assert_eq!(err.diagnostic().line(), 3);
}

#[test]
fn coercion_of_bool_and_int() {
    let doc = parse_ok("deck.i", "t = true\ns = abc\n");
    assert_eq!(find(&doc, "t").map(|n| n.as_bool()), Some(Ok(true)));
    assert!(find(&doc, "s").expect("s exists").as_int().is_err());
}

#[test]
fn absent_path_is_not_an_error() {
    let doc = parse_ok("deck.i", DECKS[2]);
    assert!(find(&doc, "nonexistent/path").is_none());
    assert_eq!(doc.get::<i64>("nonexistent/path"), Ok(None));
}

#[test]
fn independent_parses_on_threads() {
    let handles: Vec<_> = DECKS
        .iter()
        .map(|deck| std::thread::spawn(move || parse("deck.i", deck).map(|doc| doc.node_count())))
        .collect();

    for (handle, deck) in handles.into_iter().zip(DECKS) {
        let count = handle.join().expect("thread completes");
        assert_eq!(count, Ok(parse_ok("deck.i", deck).node_count()));
    }
}
