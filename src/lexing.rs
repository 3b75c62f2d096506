//! Lexer for the long TextGrid format
//!
//! This module turns the full decoded text of a document into an ordered
//! sequence of typed tokens.
//!
//! The pipeline consists of:
//! 1. Per-line preprocessing:
//!    - Strip end-of-line comments (everything from the first `!`)
//!    - Strip bracketed integer indices such as `[12]`
//!    - Collapse whitespace runs and trim the ends
//! 2. Joining the lines into one logical stream with single-space
//!    separators, plus one trailing space as an end-of-stream sentinel so
//!    the scanner always closes its final token.
//! 3. A quote-aware character scan over the logical stream.
//!
//! Quote handling
//!
//!     The format has no field names: `xmin = 0.5` and `text = "cat"` are
//!     distinguished only by quoting. Outside quotes the scanner keeps
//!     digits and dots and drops every other character (so field labels
//!     like `xmin` and `=` simply vanish); inside quotes every character is
//!     kept. A token that began with a quote becomes text; anything else is
//!     parsed as a number.
//!
//!     Two quirks are deliberate, carried over from the format's
//!     established behavior: the comment strip is position-based and does
//!     not track quote state, so a literal `!` inside a quoted label also
//!     truncates the line; and quoted text has no escape mechanism for
//!     embedded quote characters. Likewise an empty quoted string (`""`)
//!     accumulates nothing and therefore produces no token at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::token::Token;

/// Bracketed integer indices like `intervals [3]:` carry no information
/// beyond ordering, which the stream itself already encodes.
static BRACKETED_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Tokenize a full document, preprocessing included.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    scan(&preprocess(source))
}

/// Normalize the document into one logical stream: each physical line is
/// cleaned in isolation, then the lines are joined with single spaces and
/// one trailing sentinel space is appended.
pub fn preprocess(source: &str) -> String {
    let mut stream = source
        .lines()
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join(" ");
    stream.push(' ');
    stream
}

/// Clean one physical line: comment strip, index strip, whitespace collapse.
fn normalize_line(line: &str) -> String {
    let line = strip_comment(line);
    let line = BRACKETED_INDEX.replace_all(line, "");
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Discard everything from the first `!` to the end of the line. This runs
/// before the quote-aware scan and does not itself track quote state.
fn strip_comment(line: &str) -> &str {
    match line.find('!') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// The quote-aware scan over the logical character stream.
///
/// State is purely local: an `in_quotes` flag, the accumulator for the
/// current token, and a flag recording whether the current token began
/// with a quote (which decides string vs. number at close time).
fn scan(stream: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in stream.chars() {
        if ch == '"' {
            if !in_quotes && current.is_empty() {
                quoted = true;
            }
            in_quotes = !in_quotes;
        } else if in_quotes {
            current.push(ch);
        } else if ch == ' ' {
            if !current.is_empty() {
                tokens.push(close_token(&current, quoted)?);
                current.clear();
            }
            quoted = false;
        } else if ch.is_ascii_digit() || ch == '.' {
            current.push(ch);
        }
        // Any other character outside quotes is dropped.
    }

    Ok(tokens)
}

/// Convert a closed raw token into its typed form.
fn close_token(raw: &str, quoted: bool) -> Result<Token> {
    if quoted {
        Ok(Token::Text(raw.to_string()))
    } else {
        raw.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| Error::InvalidNumber(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_header_tokenization() {
        let input = "File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\nxmin = 0\nxmax = 2.5\ntiers? <exists>\nsize = 1";
        let tokens = lex(input).unwrap();

        // Exact token sequence validation: field labels, `=`, `?` and
        // `<exists>` all vanish; only the five header scalars remain.
        assert_eq!(
            tokens,
            vec![
                Token::Text("ooTextFile".to_string()),
                Token::Text("TextGrid".to_string()),
                Token::Number(0.0),
                Token::Number(2.5),
                Token::Number(1.0),
            ]
        );
    }

    #[test]
    fn test_quoted_text_keeps_spaces_and_punctuation() {
        let tokens = lex("text = \"two words, punctuated.\"").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Text("two words, punctuated.".to_string())]
        );
    }

    #[test]
    fn test_comment_is_discarded() {
        let tokens = lex("\"cat\" ! this is a comment").unwrap();
        assert_eq!(tokens, vec![Token::Text("cat".to_string())]);
    }

    #[test]
    fn test_comment_strip_ignores_quote_state() {
        // The `!` sits inside quoted text but still truncates the line,
        // taking the closing quote with it. The scanner is then left in
        // quote state and the token is never closed, so it is lost.
        let tokens = lex("\"wait! stop\"").unwrap();
        assert_eq!(tokens, vec![]);
    }

    #[test]
    fn test_bracketed_index_is_stripped() {
        let tokens = lex("intervals [12]:\n    xmin = 0.25").unwrap();
        assert_eq!(tokens, vec![Token::Number(0.25)]);
    }

    #[test]
    fn test_empty_quoted_string_produces_no_token() {
        let tokens = lex("text = \"\"\nxmin = 0.5").unwrap();
        assert_eq!(tokens, vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_final_token_closed_by_sentinel() {
        // No trailing newline or space in the input; the appended sentinel
        // closes the last token.
        let tokens = lex("xmax = 1.75").unwrap();
        assert_eq!(tokens, vec![Token::Number(1.75)]);
    }

    #[test]
    fn test_blank_lines_do_not_emit_tokens() {
        let tokens = lex("xmin = 0\n\n\nxmax = 1").unwrap();
        assert_eq!(tokens, vec![Token::Number(0.0), Token::Number(1.0)]);
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let result = lex("xmin = 1.2.3");
        assert_eq!(result, Err(Error::InvalidNumber("1.2.3".to_string())));
    }

    #[test]
    fn test_preprocess_appends_sentinel() {
        assert_eq!(preprocess("xmin = 0"), "xmin = 0 ");
        assert_eq!(preprocess("a\nb"), "a b ");
    }
}
