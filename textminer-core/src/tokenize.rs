//! Word tokenization.
//!
//! Splits on Unicode word boundaries (UAX #29), drops whitespace, keeps each
//! punctuation mark as its own token, and separates English contraction
//! suffixes from their stem: `don't` becomes `do` + `n't`, `it's` becomes
//! `it` + `'s`. Hyphenated compounds (`well-known`, `e-mail`) stay whole.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static CONTRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|re|ve|ll|d|m))$").expect("contraction pattern compiles")
});

/// Tokenize `text` into words and punctuation.
pub fn word_tokenize(text: &str) -> Vec<String> {
    join_hyphenated(text)
        .into_iter()
        .flat_map(split_contraction)
        .collect()
}

/// Word-boundary segments without whitespace, with `word-word` runs glued
/// back together.
fn join_hyphenated(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut segments = text.split_word_bounds().peekable();
    // The last pushed word ends in a letter or digit and touches what follows.
    let mut open = false;

    while let Some(segment) = segments.next() {
        if segment.chars().all(char::is_whitespace) {
            open = false;
            continue;
        }
        if open && segment == "-" {
            let next = segments.peek().copied().filter(|next| starts_alphanumeric(next));
            if let (Some(next), Some(last)) = (next, words.last_mut()) {
                last.push('-');
                last.push_str(next);
                open = ends_alphanumeric(next);
                segments.next();
                continue;
            }
        }
        open = ends_alphanumeric(segment);
        words.push(segment.to_string());
    }
    words
}

fn split_contraction(word: String) -> Vec<String> {
    let parts = CONTRACTION
        .captures(&word)
        .map(|caps| vec![caps[1].to_string(), caps[2].to_string()]);
    parts.unwrap_or_else(|| vec![word])
}

fn starts_alphanumeric(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

fn ends_alphanumeric(segment: &str) -> bool {
    segment.chars().next_back().is_some_and(char::is_alphanumeric)
}
