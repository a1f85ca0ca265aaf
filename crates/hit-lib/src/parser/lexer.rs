//! Lexer for HIT text.
//!
//! Logos recognizes the raw lexemes; [`Lexer`] wraps it to drop whitespace, track
//! line/column, split bare words into identifiers, paths and numbers, and turn
//! malformed input into a lex error.
//!
//! ## Error handling
//!
//! The lexer does not recover. The first unterminated string or invalid character
//! ends the token stream with an error.

use logos::Logos;
use text_size::{TextRange, TextSize};

use crate::Error;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Position};
use crate::literal::is_number;

/// Token kinds. Variants with regex/token attributes are produced by logos;
/// `Identifier`, `Path`, `Number` and `Eof` are assigned by [`Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("=")]
    Equals,

    /// Quoted string, quotes included. May span lines.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, allow_greedy = true)]
    #[regex(r#"'([^'\\]|\\(.|\n))*'"#, allow_greedy = true)]
    String,

    #[regex(r#""([^"\\]|\\(.|\n))*"#, allow_greedy = true)]
    #[regex(r#"'([^'\\]|\\(.|\n))*"#, allow_greedy = true)]
    #[doc(hidden)]
    UnterminatedString, // Lexer-internal only

    /// `#` to end of line.
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Bare word: anything up to whitespace or a structural character.
    #[regex(r#"[^\x00-\x20\x7f\[\]=#'"]+"#, allow_greedy = true)]
    #[doc(hidden)]
    Word, // Lexer-internal only

    #[regex(r"[ \t\r]+")]
    #[doc(hidden)]
    Whitespace,

    #[token("\n")]
    #[doc(hidden)]
    Newline,

    /// Bare word without `/`.
    Identifier,

    /// Bare word containing `/`.
    Path,

    /// Bare word with number syntax.
    Number,

    Eof,
}

impl TokenKind {
    /// Bare words of any classification.
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(self, Self::Identifier | Self::Path | Self::Number)
    }

    /// Human-readable description for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::BracketOpen => "`[`",
            Self::BracketClose => "`]`",
            Self::Equals => "`=`",
            Self::String | Self::UnterminatedString => "a string",
            Self::Comment => "a comment",
            Self::Identifier | Self::Word => "a name",
            Self::Path => "a path",
            Self::Number => "a number",
            Self::Whitespace | Self::Newline => "whitespace",
            Self::Eof => "end of input",
        }
    }
}

/// A classified lexeme borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: TextRange,
    pub line: u32,
    pub column: u32,
}

impl Token<'_> {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.span)
    }

    /// Line of the token's last character (differs from `line` for multi-line strings).
    pub fn end_line(&self) -> u32 {
        self.line + self.text.matches('\n').count() as u32
    }

    /// Short quoted form for messages, e.g. ``a number `1` ``.
    pub(crate) fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof | TokenKind::BracketOpen | TokenKind::BracketClose | TokenKind::Equals => {
                self.kind.describe().to_string()
            }
            _ => format!("{} `{}`", self.kind.describe(), self.text),
        }
    }
}

fn text_range(range: std::ops::Range<usize>) -> TextRange {
    TextRange::new(
        TextSize::from(range.start as u32),
        TextSize::from(range.end as u32),
    )
}

/// Lazy, single-pass token stream over one source.
///
/// Yields every significant token followed by one `Eof` token, then `None`.
/// After an error the stream is finished.
pub struct Lexer<'src> {
    source_name: &'src str,
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    line: u32,
    line_start: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source_name: &'src str, source: &'src str) -> Self {
        Self {
            source_name,
            source,
            inner: TokenKind::lexer(source),
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn source_name(&self) -> &'src str {
        self.source_name
    }

    /// The token that ends the stream.
    pub fn eof(&self) -> Token<'src> {
        let end = self.source.len();
        self.token(TokenKind::Eof, end..end)
    }

    fn token(&self, kind: TokenKind, range: std::ops::Range<usize>) -> Token<'src> {
        let column = self.source[self.line_start..range.start].chars().count() as u32 + 1;
        Token {
            kind,
            text: &self.source[range.clone()],
            span: text_range(range),
            line: self.line,
            column,
        }
    }

    /// Advance line bookkeeping past every newline inside `token`.
    fn track_newlines(&mut self, token: &Token<'src>) {
        if let Some(last) = token.text.rfind('\n') {
            self.line = token.end_line();
            self.line_start = usize::from(token.span.start()) + last + 1;
        }
    }

    fn fail(&mut self, kind: DiagnosticKind, token: Token<'src>, detail: Option<String>) -> Error {
        self.finished = true;
        let diagnostic = Diagnostic::new(kind, self.source_name, token.position());
        Error::Lex(match detail {
            Some(detail) => diagnostic.with_detail(detail),
            None => diagnostic,
        })
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(result) = self.inner.next() else {
                self.finished = true;
                return Some(Ok(self.eof()));
            };
            let range = self.inner.span();

            let kind = match result {
                Ok(kind) => kind,
                Err(()) => {
                    let token = self.token(TokenKind::Word, range);
                    let shown = token.text.chars().next().unwrap_or_default();
                    let detail = format!("`{}`", shown.escape_default());
                    return Some(Err(self.fail(
                        DiagnosticKind::InvalidCharacter,
                        token,
                        Some(detail),
                    )));
                }
            };

            let token = match kind {
                TokenKind::Whitespace => continue,
                TokenKind::Newline => {
                    self.line += 1;
                    self.line_start = range.end;
                    continue;
                }
                TokenKind::UnterminatedString => {
                    // Point at the opening quote only; the lexeme runs to end of input.
                    let token = self.token(kind, range.start..range.start + 1);
                    return Some(Err(self.fail(DiagnosticKind::UnterminatedString, token, None)));
                }
                TokenKind::Word => {
                    let text = &self.source[range.clone()];
                    self.token(classify_word(text), range)
                }
                kind => self.token(kind, range),
            };

            self.track_newlines(&token);
            return Some(Ok(token));
        }
    }
}

fn classify_word(text: &str) -> TokenKind {
    if is_number(text) {
        TokenKind::Number
    } else if text.contains('/') {
        TokenKind::Path
    } else {
        TokenKind::Identifier
    }
}

/// Tokenizes a whole source, `Eof` included.
pub fn lex<'src>(source_name: &'src str, source: &'src str) -> Result<Vec<Token<'src>>, Error> {
    Lexer::new(source_name, source).collect()
}
