//! Bulleted summary: the opening sentences of the text, one per line.

use super::{GenerationOptions, BULLET};
use crate::adapt::segmenting::segment;

/// First `summary_max_sentences` sentences, each as `• sentence.` on its own line.
///
/// Line breaks inside a sentence are folded into single spaces so every bullet stays one line.
pub fn summary(text: &str, options: &GenerationOptions) -> String {
    segment(text)
        .iter()
        .take(options.summary_max_sentences)
        .map(|sentence| {
            let flat = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
            format!("{BULLET} {flat}.")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
