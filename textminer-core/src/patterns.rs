//! Regular expressions used by the cleaning passes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of word characters. Used to flatten token lists and to split
/// stringified abbreviation expansions.
pub static ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("alphanumeric pattern compiles"));

/// Any character repeated three or more times in a row.
///
/// Needs a backreference, which `regex` does not support.
pub static REPEATED_CHARACTER: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(r"(.)\1{2,}").expect("repeated character pattern compiles")
});

/// `http` followed by everything up to the next whitespace.
pub static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("url pattern compiles"));

/// Everything outside ASCII letters and digits.
pub static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("non-alphanumeric pattern compiles"));

/// Runs of ASCII letters, the unit the spelling engines correct.
pub static ALPHABETIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("alphabetic pattern compiles"));

/// The two patterns a pipeline owns for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub pattern_flatten: Regex,
    pub pattern_identical_letters: fancy_regex::Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            pattern_flatten: ALPHANUMERIC_RUN.clone(),
            pattern_identical_letters: REPEATED_CHARACTER.clone(),
        }
    }

    /// Reduce every run of 3+ identical characters to exactly two.
    pub fn collapse_repeats(&self, word: &str) -> String {
        self.pattern_identical_letters
            .replace_all(word, "${1}${1}")
            .into_owned()
    }

    /// Extract every alphanumeric run from `text`, in order.
    pub fn flatten(&self, text: &str) -> Vec<String> {
        self.pattern_flatten
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove `http...` substrings.
pub fn strip_urls(text: &str) -> std::borrow::Cow<'_, str> {
    URL.replace_all(text, "")
}

/// Drop every character that is not an ASCII letter or digit.
pub fn strip_non_alphanumeric(word: &str) -> std::borrow::Cow<'_, str> {
    NON_ALPHANUMERIC.replace_all(word, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collapse_to_two() {
        let patterns = Patterns::new();
        assert_eq!(patterns.collapse_repeats("faaaassst"), "faasst");
        assert_eq!(patterns.collapse_repeats("toooooo"), "too");
        assert_eq!(patterns.collapse_repeats("cool"), "cool");
        assert_eq!(patterns.collapse_repeats(""), "");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(
            strip_urls("news at http://python.org. today"),
            "news at  today"
        );
        assert_eq!(strip_urls("see https://x.y/z?q=1"), "see ");
    }

    #[test]
    fn test_strip_non_alphanumeric() {
        assert_eq!(strip_non_alphanumeric("#Summer"), "Summer");
        assert_eq!(strip_non_alphanumeric("Python3!"), "Python3");
        assert_eq!(strip_non_alphanumeric("café"), "caf");
        assert_eq!(strip_non_alphanumeric("🥵"), "");
    }

    #[test]
    fn test_flatten_runs() {
        let patterns = Patterns::new();
        let runs = patterns.flatten("['new', 'york'], 'car'");
        assert_eq!(runs, vec!["new", "york", "car"]);
    }

    fn longest_run(word: &str) -> usize {
        let chars: Vec<char> = word.chars().collect();
        let mut longest = 0;
        let mut i = 0;
        while i < chars.len() {
            let mut j = i;
            while j < chars.len() && chars[j] == chars[i] {
                j += 1;
            }
            longest = longest.max(j - i);
            i = j;
        }
        longest
    }

    proptest! {
        #[test]
        fn collapsed_runs_never_exceed_two(word in "[a-c]{0,24}") {
            let collapsed = Patterns::new().collapse_repeats(&word);
            prop_assert!(longest_run(&collapsed) <= 2);
        }

        #[test]
        fn collapsing_is_idempotent(word in "[a-z]{0,24}") {
            let patterns = Patterns::new();
            let once = patterns.collapse_repeats(&word);
            prop_assert_eq!(patterns.collapse_repeats(&once), once.clone());
        }

        #[test]
        fn short_runs_are_untouched(word in "[a-d]{0,16}") {
            prop_assume!(longest_run(&word) <= 2);
            prop_assert_eq!(Patterns::new().collapse_repeats(&word), word);
        }
    }
}
