mod errors_tests;
mod sections_tests;

use crate::tree::TreePrinter;

fn dump(input: &str) -> String {
    let doc = crate::parse("test.i", input).expect("input should parse");
    TreePrinter::new(&doc).dump()
}

fn dump_positions(input: &str) -> String {
    let doc = crate::parse("test.i", input).expect("input should parse");
    TreePrinter::new(&doc).with_positions(true).dump()
}

fn dump_comments(input: &str) -> String {
    let doc = crate::parse("test.i", input).expect("input should parse");
    TreePrinter::new(&doc).with_comments(true).dump()
}

fn error(input: &str) -> crate::Error {
    crate::parse("test.i", input).expect_err("input should fail to parse")
}
