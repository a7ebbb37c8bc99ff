//! Easy-read text
//!
//! The whole word stream is re-chunked into fixed-size blocks, ignoring the original
//! punctuation. Blocks are separated by a blank line so each one reads as a short, visually
//! isolated line.

use super::GenerationOptions;

/// Separator placed between easy-read blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Re-chunk `text` into blocks of [GenerationOptions::block_words] words.
pub fn easy_read_text(text: &str, options: &GenerationOptions) -> String {
    easy_read_blocks(text, options).join(BLOCK_SEPARATOR)
}

/// The individual easy-read blocks, in order.
pub fn easy_read_blocks(text: &str, options: &GenerationOptions) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(options.block_words())
        .map(|block| block.join(" "))
        .collect()
}
