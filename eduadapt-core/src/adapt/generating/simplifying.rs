//! Simplified version
//!
//! Two passes. First a fixed lexicon swaps formal verbs for shorter everyday ones (whole words
//! only, case-insensitive, keeping the original capitalization). Then every sentence longer than
//! the threshold is cut down and marked with an ellipsis.

use super::{GenerationOptions, ELLIPSIS};
use crate::adapt::segmenting::{segment, word_count};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Formal words and their plain replacements.
pub const LEXICON: &[(&[&str], &str)] = &[
    (&["utilizar", "emplear"], "usar"),
    (&["adquirir", "obtener"], "conseguir"),
    (&["realizar", "efectuar"], "hacer"),
    (&["finalizar", "concluir"], "terminar"),
    (&["iniciar", "comenzar"], "empezar"),
];

static SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    LEXICON
        .iter()
        .map(|(words, replacement)| {
            let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
            let regex = Regex::new(&pattern).expect("lexicon patterns are valid");
            (regex, *replacement)
        })
        .collect()
});

/// Apply the lexicon to `text`.
pub fn substitute_lexicon(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (regex, replacement)| {
            regex
                .replace_all(&acc, |caps: &Captures<'_>| match_case(&caps[0], replacement))
                .into_owned()
        })
}

/// Shape `replacement` after the capitalization of `original`.
fn match_case(original: &str, replacement: &str) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic());
    let first_upper = letters.next().is_some_and(char::is_uppercase);
    let rest: Vec<char> = letters.collect();

    if first_upper && !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
        replacement.to_uppercase()
    } else if first_upper {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

/// Lexically simplified, length-capped version of `text`.
pub fn simplified_text(text: &str, options: &GenerationOptions) -> String {
    let substituted = substitute_lexicon(text);
    let sentences: Vec<String> = segment(&substituted)
        .into_iter()
        .map(|sentence| shorten(&sentence, options))
        .collect();

    if sentences.is_empty() {
        return String::new();
    }

    // a truncated sentence already ends in its ellipsis
    let mut out = String::new();
    for sentence in &sentences {
        if !out.is_empty() {
            out.push_str(if out.ends_with(ELLIPSIS) { " " } else { ". " });
        }
        out.push_str(sentence);
    }
    if !out.ends_with(ELLIPSIS) {
        out.push('.');
    }
    out
}

fn shorten(sentence: &str, options: &GenerationOptions) -> String {
    if word_count(sentence) <= options.simplify_max_words {
        return sentence.to_string();
    }
    let kept: Vec<&str> = sentence
        .split_whitespace()
        .take(options.keep_words())
        .collect();
    format!("{}{ELLIPSIS}", kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_example() {
        let text = "Utilizar el cuaderno. Vamos a comenzar ahora. Realizar todos los ejercicios. Finalizar antes de las 10.";
        assert_eq!(
            simplified_text(text, &GenerationOptions::default()),
            "Usar el cuaderno. Vamos a empezar ahora. Hacer todos los ejercicios. Terminar antes de las 10."
        );
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(substitute_lexicon("reutilizar utilizarlo"), "reutilizar utilizarlo");
        assert_eq!(substitute_lexicon("emplear, obtener"), "usar, conseguir");
    }

    #[test]
    fn test_case_is_followed() {
        assert_eq!(substitute_lexicon("REALIZAR"), "HACER");
        assert_eq!(substitute_lexicon("Concluir"), "Terminar");
        assert_eq!(substitute_lexicon("iniciar"), "empezar");
        assert_eq!(substitute_lexicon("eMPLEAR"), "usar");
    }

    #[test]
    fn test_long_sentence_is_truncated() {
        let long: Vec<String> = (1..=25).map(|n| format!("w{n}")).collect();
        let out = simplified_text(&long.join(" "), &GenerationOptions::default());
        let expected: Vec<String> = (1..=18).map(|n| format!("w{n}")).collect();
        assert_eq!(out, format!("{}...", expected.join(" ")));
    }

    #[test]
    fn test_truncated_sentence_is_followed_by_a_space() {
        let long: Vec<String> = (1..=25).map(|n| format!("w{n}")).collect();
        let text = format!("{}. Corta frase. Otra.", long.join(" "));
        let out = simplified_text(&text, &GenerationOptions::default());
        let kept: Vec<String> = (1..=18).map(|n| format!("w{n}")).collect();
        assert_eq!(out, format!("{}... Corta frase. Otra.", kept.join(" ")));
        assert!(!out.contains("...."));
    }

    #[test]
    fn test_twenty_words_are_kept() {
        let words: Vec<String> = (1..=20).map(|n| format!("w{n}")).collect();
        let out = simplified_text(&words.join(" "), &GenerationOptions::default());
        assert_eq!(out, format!("{}.", words.join(" ")));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simplified_text("", &GenerationOptions::default()), "");
        assert_eq!(simplified_text("  ?! ", &GenerationOptions::default()), "");
    }
}
