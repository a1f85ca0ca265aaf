use std::fs;
use std::io::{self, Read};
use std::path::Path;

use hit_lib::Document;

/// Source name used for decks read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{name}': {source}")]
    Read { name: String, source: io::Error },

    #[error("{error}")]
    Parse { error: hit_lib::Error, text: String },
}

impl LoadError {
    /// Message for stderr. Parse errors are drawn against their source text.
    pub fn report(&self, color: bool) -> String {
        match self {
            LoadError::Read { .. } => format!("error: {}", self),
            LoadError::Parse { error, text } => {
                error.diagnostic().printer().source(text).colored(color).render()
            }
        }
    }

    /// Print the report and exit with status 1.
    pub fn exit(&self, color: bool) -> ! {
        eprintln!("{}", self.report(color));
        std::process::exit(1)
    }
}

/// Read a deck from a file, or from stdin when `path` is `-`.
pub fn load_source(path: &Path) -> Result<(String, String), LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Read {
                name: STDIN_NAME.to_string(),
                source,
            })?;
        return Ok((STDIN_NAME.to_string(), buf));
    }

    let name = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(text) => Ok((name, text)),
        Err(source) => Err(LoadError::Read { name, source }),
    }
}

/// Read and parse a deck.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let (name, text) = load_source(path)?;
    parse_source(&name, text)
}

pub fn parse_source(name: &str, text: String) -> Result<Document, LoadError> {
    hit_lib::parse(name, &text).map_err(|error| LoadError::Parse { error, text })
}
