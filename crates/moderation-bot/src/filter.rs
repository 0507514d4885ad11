//! Forbidden word detection.

/// Words that get a sender banned.
pub const FORBIDDEN_WORDS: &[&str] = &["aww"];

/// Whether `text` contains any of [`FORBIDDEN_WORDS`].
///
/// Matching is case-insensitive substring containment, not whole-word:
/// "awwful" matches too.
pub fn contains_forbidden_word(text: &str) -> bool {
    contains_any(text, FORBIDDEN_WORDS)
}

/// Case-insensitive substring check of `text` against `words`.
/// `words` are expected in lowercase.
fn contains_any(text: &str, words: &[&str]) -> bool {
    let text = text.to_lowercase();
    words.iter().any(|word| text.contains(word))
}
