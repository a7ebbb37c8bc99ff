//! Sentence segmentation
//!
//! Splits on the terminal marks `.`, `!` and `?`. Pieces are trimmed and empty pieces dropped, so
//! runs like `...` or `?!` never produce blank sentences. Terminal punctuation is not kept:
//! every consumer re-punctuates on its own terms.

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` into ordered, trimmed, non-empty sentences.
pub fn segment(text: &str) -> Vec<String> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
