//! Artifact-marker decoding for raw model token strings.

/// Space-prefix marker some byte-level tokenizers embed in token text.
pub const SPACE_MARKER: char = '\u{0120}';

/// Embedded-newline marker.
pub const NEWLINE_MARKER: char = '\u{010A}';

/// Replace every artifact marker with the whitespace it encodes.
#[must_use]
pub fn clean_token(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            SPACE_MARKER => ' ',
            NEWLINE_MARKER => '\n',
            other => other,
        })
        .collect()
}

/// One renderable piece of a decoded token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPiece {
    Text(String),
    Newline,
}

/// Decode a raw token into text pieces and line breaks.
///
/// Parts that decode to nothing are dropped, but every embedded newline is
/// kept: a marker-only token still breaks the line.
#[must_use]
pub fn token_pieces(raw: &str) -> Vec<TokenPiece> {
    let cleaned = clean_token(raw);
    let parts: Vec<&str> = cleaned.split('\n').collect();
    let mut pieces = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if !part.is_empty() {
            pieces.push(TokenPiece::Text((*part).to_string()));
        }
        if i + 1 < parts.len() {
            pieces.push(TokenPiece::Newline);
        }
    }
    pieces
}

/// Split one leading literal space off a text piece.
///
/// The space renders as plain whitespace so the highlight box hugs the
/// token's visible characters.
#[must_use]
pub fn split_leading_space(text: &str) -> (Option<&'static str>, &str) {
    match text.strip_prefix(' ') {
        Some(rest) => (Some(" "), rest),
        None => (None, text),
    }
}
