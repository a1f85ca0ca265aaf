//! Print a deck in canonical layout.

use std::path::PathBuf;

use hit_lib::Renderer;

use super::source_loader::load_document;

pub struct FmtArgs {
    pub file: PathBuf,
    pub indent: usize,
    pub comments: bool,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let doc = load_document(&args.file).unwrap_or_else(|err| err.exit(args.color));

    let output = Renderer::new(&doc)
        .indent(args.indent)
        .comments(args.comments)
        .render();
    print!("{}", output);
}
