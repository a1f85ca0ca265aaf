use std::path::PathBuf;

use tracing::debug;

use super::source_loader::load_document;

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let mut failed = 0usize;

    // Every file is checked, even after a failure.
    for file in &args.files {
        match load_document(file) {
            Ok(doc) => debug!(file = %file.display(), nodes = doc.node_count(), "valid"),
            Err(err) => {
                eprintln!("{}", err.report(args.color));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
