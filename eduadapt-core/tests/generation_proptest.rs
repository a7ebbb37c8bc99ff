//! Property-based tests for the text variant generators
//!
//! Inputs are built from plain words and sentence separators so the word stream is easy to
//! reason about:
//! - segmentation never yields blank sentences
//! - the summary is capped and empty only for empty input
//! - simplified sentences stay within the truncation limits
//! - easy-read blocks preserve the exact word sequence

use eduadapt_core::adapt::generating::easy_read::{easy_read_blocks, BLOCK_SEPARATOR};
use eduadapt_core::adapt::generating::{
    easy_read_text, simplified_text, summary, GenerationOptions, BULLET, ELLIPSIS,
    SIMPLIFY_KEEP_WORDS, SIMPLIFY_MAX_WORDS, SUMMARY_MAX_SENTENCES,
};
use eduadapt_core::adapt::segmenting::{segment, word_count};
use proptest::prelude::*;

/// Generate a single word, sometimes one of the lexicon entries
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Záéíóúñ]{1,9}",
        Just("utilizar".to_string()),
        Just("Realizar".to_string()),
        Just("OBTENER".to_string()),
    ]
}

/// Generate a separator between words
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just(" ".to_string()),
        1 => Just(". ".to_string()),
        1 => Just("! ".to_string()),
        1 => Just("? ".to_string()),
        1 => Just("\n".to_string()),
        1 => Just("  ".to_string()),
    ]
}

/// Generate text of 0..80 words
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((word_strategy(), separator_strategy()), 0..80).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

/// Generate arbitrary text including punctuation runs and blanks
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    "[a-z .!?\\n\\t]{0,120}"
}

proptest! {
    #[test]
    fn segment_never_yields_blank_sentences(text in noisy_text_strategy()) {
        for sentence in segment(&text) {
            prop_assert!(!sentence.trim().is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }

    #[test]
    fn summary_is_capped_and_empty_only_for_empty_input(text in text_strategy()) {
        let out = summary(&text, &GenerationOptions::default());
        let items = out.matches(BULLET).count();
        prop_assert!(items <= SUMMARY_MAX_SENTENCES);
        prop_assert_eq!(items == 0, segment(&text).is_empty());
        prop_assert_eq!(out.is_empty(), items == 0);
        prop_assert_eq!(out.lines().count(), items);
    }

    #[test]
    fn simplified_sentences_respect_limits(text in text_strategy()) {
        let out = simplified_text(&text, &GenerationOptions::default());
        if segment(&text).is_empty() {
            prop_assert_eq!(out, "");
        } else {
            prop_assert!(!out.contains("...."));
            // every chunk but the last ends with a truncated sentence
            let chunks: Vec<&str> = out.split("... ").collect();
            for (i, chunk) in chunks.iter().enumerate() {
                let pieces: Vec<&str> = chunk.split(". ").collect();
                for (j, piece) in pieces.iter().enumerate() {
                    let cut_before_next = j + 1 == pieces.len() && i + 1 < chunks.len();
                    let truncated = if cut_before_next {
                        Some(*piece)
                    } else {
                        piece.strip_suffix(ELLIPSIS)
                    };
                    match truncated {
                        Some(kept) => prop_assert!(word_count(kept) <= SIMPLIFY_KEEP_WORDS),
                        None => prop_assert!(word_count(piece) <= SIMPLIFY_MAX_WORDS),
                    }
                }
            }
        }
    }

    #[test]
    fn simplified_text_drops_every_lexicon_word(text in text_strategy()) {
        let out = simplified_text(&text, &GenerationOptions::default()).to_lowercase();
        for formal in ["utilizar", "realizar", "obtener"] {
            prop_assert!(!out.split_whitespace().any(|w| w.trim_end_matches('.') == formal));
        }
    }

    #[test]
    fn easy_read_preserves_word_sequence(text in text_strategy(), block in 1usize..20) {
        let options = GenerationOptions {
            easy_read_block_words: block,
            ..GenerationOptions::default()
        };
        let blocks = easy_read_blocks(&text, &options);
        for b in &blocks {
            let words = word_count(b);
            prop_assert!(words >= 1 && words <= options.block_words());
        }

        let joined = easy_read_text(&text, &options);
        let reassembled: Vec<&str> = joined
            .split(BLOCK_SEPARATOR)
            .flat_map(str::split_whitespace)
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(reassembled, original);
    }

    #[test]
    fn generators_are_deterministic(text in text_strategy()) {
        let options = GenerationOptions::default();
        prop_assert_eq!(summary(&text, &options), summary(&text, &options));
        prop_assert_eq!(simplified_text(&text, &options), simplified_text(&text, &options));
        prop_assert_eq!(easy_read_text(&text, &options), easy_read_text(&text, &options));
    }
}
