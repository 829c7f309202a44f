//! CSS value tokenizing and single-token classification.
//!
//! Values are split with cssparser's tokenizer rather than a plain whitespace
//! split so that `rgb(0, 0, 0)` or `url("a b.png")` stay one token.

use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};

use crate::keywords::{BorderWidthKeyword, LENGTH_UNITS, NAMED_COLORS, SPECIAL_COLORS};

/// Split a value into its whitespace-separated component tokens.
///
/// Leading, trailing and repeated whitespace never produce empty tokens.
/// Whitespace nested inside a function, a bracketed block or a string does
/// not split. The returned tokens are slices of `value`.
pub fn tokenize(value: &str) -> Vec<&str> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut tokens = Vec::new();
    let mut start: Option<SourcePosition> = None;

    loop {
        let before = parser.position();
        let (is_whitespace, opens_block) = match parser.next_including_whitespace() {
            Ok(token) => (
                matches!(token, Token::WhiteSpace(_)),
                matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
            ),
            Err(_) => break,
        };

        if is_whitespace {
            if let Some(s) = start.take() {
                tokens.push(parser.slice(s..before));
            }
            continue;
        }

        start.get_or_insert(before);

        // Consume the block now so the position lands after its closing token
        if opens_block {
            let _ = parser.parse_nested_block(
                |nested: &mut Parser<'_, '_>| -> Result<(), ParseError<'_, ()>> {
                    while nested.next_including_whitespace_and_comments().is_ok() {}
                    Ok(())
                },
            );
        }
    }

    if let Some(s) = start {
        tokens.push(parser.slice_from(s));
    }

    tokens
}

/// Run `check` against the only CSS token in `text`.
///
/// Returns false when `text` is empty or holds more than one token.
fn single_token<F>(text: &str, check: F) -> bool
where
    F: FnOnce(&Token<'_>) -> bool,
{
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let matched = match parser.next() {
        Ok(token) => check(token),
        Err(_) => return false,
    };
    matched && parser.is_exhausted()
}

fn is_length_unit(unit: &str) -> bool {
    LENGTH_UNITS.iter().any(|u| unit.eq_ignore_ascii_case(u))
}

/// `0` or a number with a length unit (`1px`, `-2.5em`).
pub fn is_length(token: &str) -> bool {
    single_token(token, |t| match t {
        Token::Dimension { unit, .. } => is_length_unit(unit),
        Token::Number { value, .. } => *value == 0.0,
        _ => false,
    })
}

/// A length or a percentage.
pub fn is_length_percentage(token: &str) -> bool {
    is_length(token) || single_token(token, |t| matches!(t, Token::Percentage { .. }))
}

/// Any number, percentage or dimension, whatever its unit.
pub fn is_numeric(token: &str) -> bool {
    single_token(token, |t| {
        matches!(
            t,
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. }
        )
    })
}

/// A length or one of `thin`, `medium`, `thick`.
pub fn is_border_width(token: &str) -> bool {
    is_length(token) || BorderWidthKeyword::from_css(token).is_some()
}

fn is_hex_color(hash: &str) -> bool {
    matches!(hash.len(), 3 | 4 | 6 | 8) && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A named color, hex color, `rgb()`/`rgba()`/`hsl()`/`hsla()` function,
/// or one of `inherit`, `transparent`, `currentColor`.
pub fn is_color(token: &str) -> bool {
    single_token(token, |t| match t {
        Token::Ident(name) => NAMED_COLORS
            .iter()
            .chain(SPECIAL_COLORS)
            .any(|c| name.eq_ignore_ascii_case(c)),
        // cssparser yields IDHash for #abc and Hash for digit-leading #222299
        Token::IDHash(hash) | Token::Hash(hash) => is_hex_color(hash),
        Token::Function(name) => ["rgb", "rgba", "hsl", "hsla"]
            .iter()
            .any(|f| name.eq_ignore_ascii_case(f)),
        _ => false,
    })
}
