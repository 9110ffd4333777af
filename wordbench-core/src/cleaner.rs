//! Text cleaning: raw file bytes to normalized word tokens

use crate::types::Token;

/// Decode raw file bytes and extract normalized tokens.
///
/// Decoding is tolerant: undecodable byte runs become replacement
/// characters instead of failing the file, and a replacement character
/// is not alphabetic, so it disappears at the filter step below. The
/// file still counts as processed.
pub fn clean_bytes(raw: &[u8]) -> Vec<Token> {
    clean_text(&String::from_utf8_lossy(raw))
}

/// Extract normalized tokens from text.
///
/// Lowercases the whole text, treats every non-letter character as a
/// separator, and discards empty fragments. Free of shared state and
/// deterministic, so any number of workers may run it concurrently over
/// the same input and produce the same sequence.
pub fn clean_text(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(Token::from)
        .collect()
}
