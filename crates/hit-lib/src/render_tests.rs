use indoc::indoc;

use crate::render::Renderer;
use crate::tree::Document;

fn parse(input: &str) -> Document {
    crate::parse("deck.i", input).expect("input should parse")
}

#[test]
fn canonical_layout() {
    let doc = parse(indoc! {"
        title=demo
        [Mesh/gen]
        nx=10
        []
        [Mesh]
        dim = 2
        []
    "});

    insta::assert_snapshot!(crate::render(&doc), @r"
    title = demo
    [Mesh]
      [gen]
        nx = 10
      []
      dim = 2
    []
    ");
}

#[test]
fn values_are_quoted_only_when_needed() {
    let doc = parse(indoc! {r#"
        bare = word
        path = ../a/b.e
        spaced = 'two words'
        quoted_word = 'one'
        apostrophe = "it's"
        empty = ''
    "#});

    insta::assert_snapshot!(crate::render(&doc), @r#"
    bare = word
    path = ../a/b.e
    spaced = 'two words'
    quoted_word = one
    apostrophe = "it's"
    empty = ''
    "#);
}

#[test]
fn quoting_style_does_not_change_output() {
    let quoted = parse("x = 'abc'\ny = \"10\"\n");
    let bare = parse("x = abc\ny = 10\n");

    assert_eq!(crate::render(&quoted), crate::render(&bare));
    insta::assert_snapshot!(crate::render(&quoted), @r"
    x = abc
    y = 10
    ");
}

#[test]
fn comments_are_kept() {
    let input = indoc! {"
        # top
        [a] # inline a
          x = 1 # inline x
          # trailing a
        []
        # end
    "};

    insta::assert_snapshot!(crate::render(&parse(input)), @r"
    # top
    [a] # inline a
      x = 1 # inline x
      # trailing a
    []
    # end
    ");
}

#[test]
fn comments_can_be_dropped() {
    let doc = parse("# top\nx = 1 # one\n");
    insta::assert_snapshot!(Renderer::new(&doc).comments(false).render(), @"x = 1");
}

#[test]
fn custom_indent() {
    let doc = parse("[a]\n[b]\nx = 1\n[]\n[]\n");
    insta::assert_snapshot!(Renderer::new(&doc).indent(4).render(), @r"
    [a]
        [b]
            x = 1
        []
    []
    ");
}

#[test]
fn render_single_node() {
    let doc = parse("[a]\n  x = 1\n  [b]\n    y = 'p q'\n  []\n[]\n");
    let renderer = Renderer::new(&doc);

    let b = doc.find("a/b").map(|n| n.id()).expect("b exists");
    insta::assert_snapshot!(renderer.render_node(b), @r"
    [b]
      y = 'p q'
    []
    ");

    let x = doc.find("a/x").map(|n| n.id()).expect("x exists");
    insta::assert_snapshot!(renderer.render_node(x), @"x = 1");
}

#[test]
fn empty_document_renders_empty() {
    assert_eq!(crate::render(&Document::new("empty")), "");
}

#[test]
fn synthetic_values_are_quoted_when_needed() {
    let mut doc = Document::new("built");
    let root = doc.root();
    doc.add_field(root, "a", "has space").expect("new");
    doc.add_field(root, "b", r"back\slash").expect("new");
    doc.add_field(root, "c", "x]y").expect("new");

    insta::assert_snapshot!(crate::render(&doc), @r"
    a = 'has space'
    b = back\slash
    c = 'x]y'
    ");
}
