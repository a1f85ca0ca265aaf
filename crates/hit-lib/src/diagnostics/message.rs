/// Everything that can make a parse fail.
///
/// Lexer kinds come first. A document either parses completely or fails with
/// exactly one of these, so there is no priority or suppression between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Malformed tokens
    UnterminatedString,
    InvalidCharacter,

    // Scope structure
    UnclosedSection,
    UnmatchedClose,
    UnclosedHeader,
    NestingTooDeep,

    // Statement shape
    ExpectedStatement,
    ExpectedEquals,
    ExpectedValue,
    ExpectedSectionPath,
    InvalidPath,

    // Names within one section
    DuplicateField,
    NameConflict,
}

/// Which phase of parsing produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Lex,
    Parse,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex"),
            Stage::Parse => write!(f, "parse"),
        }
    }
}

impl DiagnosticKind {
    pub fn stage(&self) -> Stage {
        match self {
            Self::UnterminatedString | Self::InvalidCharacter => Stage::Lex,
            _ => Stage::Parse,
        }
    }

    /// Hint shown under the rendered snippet.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedString => Some("strings must be closed with the quote they open with"),
            Self::UnclosedSection => Some("close the section with `[]`"),
            Self::UnmatchedClose => Some("remove the extra `[]`"),
            Self::ExpectedEquals => Some("fields are written as `name = value`"),
            Self::ExpectedValue => Some("quote values that contain spaces, e.g. `name = 'a b'`"),
            Self::InvalidPath => Some("paths are names separated by single `/`"),
            _ => None,
        }
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string",
            Self::InvalidCharacter => "invalid character",

            Self::UnclosedSection => "section is never closed",
            Self::UnmatchedClose => "`[]` does not close any section",
            Self::UnclosedHeader => "missing closing `]`",
            Self::NestingTooDeep => "sections are nested too deeply",

            Self::ExpectedStatement => "expected a field assignment or section header",
            Self::ExpectedEquals => "expected `=`",
            Self::ExpectedValue => "expected a value",
            Self::ExpectedSectionPath => "expected a section path or `]`",
            Self::InvalidPath => "invalid path",

            Self::DuplicateField => "duplicate field",
            Self::NameConflict => "name is already in use",
        }
    }

    /// Template for detailed messages. Contains `{}` for the caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedSection => "section `{}` is never closed".to_string(),
            Self::UnclosedHeader => "missing closing `]` after `{}`".to_string(),
            Self::NestingTooDeep => "sections are nested deeper than {} levels".to_string(),
            Self::ExpectedStatement => {
                "expected a field assignment or section header, found {}".to_string()
            }
            Self::ExpectedEquals => "expected `=` after `{}`".to_string(),
            Self::ExpectedValue => "expected a value for `{}`".to_string(),
            Self::ExpectedSectionPath => "expected a section path or `]`, found {}".to_string(),
            Self::DuplicateField => "field `{}` is already defined in this section".to_string(),
            Self::NameConflict => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}
