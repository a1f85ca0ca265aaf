//! Show the parsed tree of a deck.

use std::path::PathBuf;

use hit_lib::TreePrinter;
use hit_lib::tree::export;

use super::source_loader::load_document;

pub struct AstArgs {
    pub file: PathBuf,
    pub spans: bool,
    pub comments: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let doc = load_document(&args.file).unwrap_or_else(|err| err.exit(args.color));

    if args.json {
        match serde_json::to_string_pretty(&export(&doc)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tree: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let output = TreePrinter::new(&doc)
        .with_positions(args.spans)
        .with_comments(args.comments)
        .dump();
    print!("{}", output);
}
