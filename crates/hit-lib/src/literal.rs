//! Value literal helpers shared by the lexer, the tree and the renderer.

use std::borrow::Cow;

/// Whether `text` is a number literal: optional sign, digits with an optional
/// fractional part (either side of the dot may be empty, not both), optional exponent.
pub fn is_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Characters that end a bare word.
pub(crate) fn is_structural(c: char) -> bool {
    matches!(c, '[' | ']' | '=' | '#' | '\'' | '"')
}

/// Strips the surrounding quotes of a string lexeme and resolves `\\`, `\'` and `\"`.
///
/// Any other backslash sequence is kept as written.
pub(crate) fn unquote(lexeme: &str) -> String {
    let mut chars = lexeme.chars();
    let (Some(open), Some(_close)) = (chars.next(), chars.next_back()) else {
        return String::new();
    };
    debug_assert!(open == '\'' || open == '"');

    let mut out = String::with_capacity(lexeme.len());
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.clone().next() {
            Some(next @ ('\\' | '\'' | '"')) => {
                out.push(next);
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

/// Whether a raw value has to be quoted to survive a re-parse.
pub(crate) fn needs_quotes(raw: &str) -> bool {
    raw.is_empty()
        || raw
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || is_structural(c))
}

/// Raw value as it should appear in HIT text: verbatim when it is a single bare
/// word, otherwise quoted.
pub(crate) fn quote(raw: &str) -> Cow<'_, str> {
    if needs_quotes(raw) {
        Cow::Owned(quoted(raw))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Raw value as a string literal, quoted with `'` (or `"` when that avoids escaping).
fn quoted(raw: &str) -> String {
    let quote = if raw.contains('\'') && !raw.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(raw.len() + 2);
    out.push(quote);
    for c in raw.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}
