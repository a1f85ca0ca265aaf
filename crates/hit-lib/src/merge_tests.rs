use indoc::indoc;

use crate::merge::{MergeStats, merge};
use crate::tree::{Document, Origin, TreePrinter};

fn parse(name: &str, input: &str) -> Document {
    crate::parse(name, input).expect("input should parse")
}

fn dump(doc: &Document) -> String {
    TreePrinter::new(doc).dump()
}

#[test]
fn overwrites_in_place_and_appends_new() {
    let mut base = parse(
        "base.i",
        indoc! {"
            [Mesh]
              dim = 2
              nx = 10
            []
            [Outputs]
              exodus = true
            []
        "},
    );
    let patch = parse(
        "patch.i",
        indoc! {"
            [Outputs]
              csv = true
            []
            [Mesh]
              nx = 40
              ny = 40
            []
            [Executioner]
              type = Steady
            []
        "},
    );

    let stats = merge(&mut base, &patch);
    assert_eq!(
        stats,
        MergeStats {
            inserted: 3,
            overwritten: 1,
            replaced: 0
        }
    );

    insta::assert_snapshot!(dump(&base), @r#"
    Root
      Section Mesh
        Field dim = "2" (number)
        Field nx = "40" (number)
        Field ny = "40" (number)
      Section Outputs
        Field exodus = "true" (bare)
        Field csv = "true" (bare)
      Section Executioner
        Field type = "Steady" (bare)
    "#);
}

#[test]
fn patch_is_left_untouched() {
    let mut base = parse("base.i", "[a]\nx = 1\n[]\n");
    let patch = parse("patch.i", "[a]\nx = 2\ny = 3\n[]\n");
    let before = dump(&patch);

    merge(&mut base, &patch);
    assert_eq!(dump(&patch), before);
    assert!(!patch.find("a/x").expect("x exists").is_synthetic());
}

#[test]
fn overwritten_fields_record_patch_origin() {
    let mut base = parse("base.i", "[a]\n  x = 1\n[]\n");
    let patch = parse("patch.i", "[a]\n  x = 2\n[]\n");

    merge(&mut base, &patch);
    let x = base.find("a/x").expect("x exists");
    assert!(x.is_synthetic());
    assert_eq!(x.position(), None);
    let Origin::Merged(Some(from)) = x.origin() else {
        panic!("expected merged origin, got {:?}", x.origin());
    };
    assert_eq!(from.source_name, "patch.i");
    assert_eq!((from.position.line, from.position.column), (2, 3));

    let a = base.find("a").expect("a exists");
    assert!(!a.is_synthetic(), "sections are merged, not replaced");
}

#[test]
fn synthetic_patch_nodes_have_no_location() {
    let mut base = parse("base.i", "x = 1\n");
    let mut patch = Document::new("built");
    let root = patch.root();
    patch.add_field(root, "x", "5").expect("x is new");

    merge(&mut base, &patch);
    assert_eq!(base.find("x").map(|n| n.origin().clone()), Some(Origin::Merged(None)));
    assert_eq!(base.get::<i64>("x"), Ok(Some(5)));
}

#[test]
fn inserted_subtrees_keep_patch_order_and_comments() {
    let mut base = parse("base.i", "x = 1\n");
    let patch = parse(
        "patch.i",
        indoc! {"
            # new block
            [b]
              z = 3 # zed
              [c]
                w = 4
              []
            []
        "},
    );

    merge(&mut base, &patch);
    let b = base.find("b").expect("b inserted");
    assert_eq!(b.comments(), ["# new block"]);
    assert_eq!(base.find("b/z").and_then(|n| n.inline_comment()), Some("# zed"));
    assert_eq!(base.get::<i64>("b/c/w"), Ok(Some(4)));
    assert_eq!(b.parent().map(|p| p.is_root()), Some(true));
}

#[test]
fn field_replaces_section_of_same_name() {
    let mut base = parse("base.i", "before = 0\n[a]\n  x = 1\n[]\nafter = 2\n");
    let patch = parse("patch.i", "a = flat\n");

    let stats = merge(&mut base, &patch);
    assert_eq!(stats.replaced, 1);
    insta::assert_snapshot!(dump(&base), @r#"
    Root
      Field before = "0" (number)
      Field a = "flat" (bare)
      Field after = "2" (number)
    "#);
    assert!(base.find("a/x").is_none());
}

#[test]
fn section_replaces_field_of_same_name() {
    let mut base = parse("base.i", "a = 1\nb = 2\n");
    let patch = parse("patch.i", "[a]\n  x = 3\n[]\n");

    merge(&mut base, &patch);
    insta::assert_snapshot!(dump(&base), @r#"
    Root
      Section a
        Field x = "3" (number)
      Field b = "2" (number)
    "#);
}

#[test]
fn merging_an_empty_patch_changes_nothing() {
    let mut base = parse("base.i", "[a]\n  x = 1\n[]\n");
    let before = dump(&base);

    let stats = merge(&mut base, &Document::new("empty"));
    assert_eq!(stats, MergeStats::default());
    assert_eq!(dump(&base), before);
}

#[test]
fn merging_into_an_empty_base_copies_the_patch() {
    let mut base = Document::new("empty");
    let patch = parse("patch.i", "[a]\n  x = 1\n[]\ny = 2\n");

    merge(&mut base, &patch);
    assert!(base.same_structure(&patch));
}

#[test]
fn successive_patches_apply_left_to_right() {
    let mut base = parse("base.i", "x = 1\n");
    merge(&mut base, &parse("one.i", "x = 2\n"));
    merge(&mut base, &parse("two.i", "x = 3\n"));
    assert_eq!(base.get::<i64>("x"), Ok(Some(3)));
}
