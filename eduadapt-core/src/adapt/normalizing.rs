//! Base text normalization
//!
//! Text pasted from word processors drags along carriage returns, byte order marks and zero-width
//! characters. Only those are touched: the result is still the author's text, character for
//! character, so the plain text export can carry it verbatim.

/// Normalize line endings and strip invisible characters.
pub fn normalize_base_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    unified
        .chars()
        .filter_map(|c| match c {
            '\r' => Some('\n'),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => None,
            '\n' | '\t' => Some(c),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
