//! Merge patch decks into a base deck.

use std::path::PathBuf;

use hit_lib::Renderer;
use tracing::debug;

use super::source_loader::load_document;

pub struct MergeArgs {
    pub base: PathBuf,
    pub patches: Vec<PathBuf>,
    pub indent: usize,
    pub comments: bool,
    pub color: bool,
}

pub fn run(args: MergeArgs) {
    if args.patches.iter().filter(|p| p.as_os_str() == "-").count()
        + usize::from(args.base.as_os_str() == "-")
        > 1
    {
        eprintln!("error: stdin can only be read once");
        std::process::exit(1);
    }

    let mut doc = load_document(&args.base).unwrap_or_else(|err| err.exit(args.color));

    for path in &args.patches {
        let patch = load_document(path).unwrap_or_else(|err| err.exit(args.color));
        let stats = hit_lib::merge(&mut doc, &patch);
        debug!(
            patch = %path.display(),
            inserted = stats.inserted,
            overwritten = stats.overwritten,
            replaced = stats.replaced,
            "applied patch"
        );
    }

    let output = Renderer::new(&doc)
        .indent(args.indent)
        .comments(args.comments)
        .render();
    print!("{}", output);
}
