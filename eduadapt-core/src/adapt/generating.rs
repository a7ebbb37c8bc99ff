//! Text variant generators
//!
//! Every generator is a pure, total function over `&str`: empty input yields empty output and
//! nothing here panics or allocates beyond its result. The knobs live in [GenerationOptions] so
//! the configuration layer can tune them without touching the algorithms.

pub mod easy_read;
pub mod simplifying;
pub mod summary;
pub mod transcript;

pub use easy_read::easy_read_text;
pub use simplifying::{simplified_text, substitute_lexicon};
pub use summary::summary;
pub use transcript::transcript;

use serde::{Deserialize, Serialize};

/// Default number of sentences kept by the summary.
pub const SUMMARY_MAX_SENTENCES: usize = 5;
/// Sentences longer than this many words are truncated by the simplifier.
pub const SIMPLIFY_MAX_WORDS: usize = 20;
/// Words kept from a truncated sentence.
pub const SIMPLIFY_KEEP_WORDS: usize = 18;
/// Words per easy-read block.
pub const EASY_READ_BLOCK_WORDS: usize = 12;
/// Allowed easy-read block sizes.
pub const EASY_READ_BLOCK_RANGE: std::ops::RangeInclusive<usize> = 8..=12;
/// Marker appended to truncated sentences.
pub const ELLIPSIS: &str = "...";
/// Marker prefixed to each summary item.
pub const BULLET: &str = "•";

/// Tunables shared by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub summary_max_sentences: usize,
    pub simplify_max_words: usize,
    pub simplify_keep_words: usize,
    pub easy_read_block_words: usize,
}

impl GenerationOptions {
    /// Easy-read block size, clamped into [EASY_READ_BLOCK_RANGE].
    pub fn block_words(&self) -> usize {
        self.easy_read_block_words.clamp(
            *EASY_READ_BLOCK_RANGE.start(),
            *EASY_READ_BLOCK_RANGE.end(),
        )
    }

    /// Words kept from a long sentence; never more than the truncation threshold.
    pub fn keep_words(&self) -> usize {
        self.simplify_keep_words.min(self.simplify_max_words).max(1)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            summary_max_sentences: SUMMARY_MAX_SENTENCES,
            simplify_max_words: SIMPLIFY_MAX_WORDS,
            simplify_keep_words: SIMPLIFY_KEEP_WORDS,
            easy_read_block_words: EASY_READ_BLOCK_WORDS,
        }
    }
}
