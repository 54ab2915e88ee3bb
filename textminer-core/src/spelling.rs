//! Spelling correction engines.
//!
//! Engines only rewrite runs of ASCII letters, so digits and anything else
//! embedded in a word survive untouched (`python3` keeps its `3`).

use crate::error::{MinerError, Result};
use crate::patterns::ALPHABETIC_RUN;
use regex::Captures;
use spellbook::Dictionary;
use std::collections::HashMap;
use std::path::Path;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Longer unknown words are only searched at edit distance one.
const MAX_TWO_EDIT_LEN: usize = 12;

/// Word-frequency dictionary shipped with the crate, `word count` per line.
const BUNDLED_FREQUENCIES: &str = include_str!("../data/en_frequency.txt");

/// Returns the most likely intended spelling of a word.
pub trait SpellingCorrector {
    /// Correct a single alphabetic word. The input is never empty.
    fn correct_word(&self, word: &str) -> String;

    /// Correct every alphabetic run of `text`, leaving other characters alone.
    fn correct(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        ALPHABETIC_RUN
            .replace_all(text, |caps: &Captures| self.correct_word(&caps[0]))
            .into_owned()
    }
}

/// Leaves every word as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl SpellingCorrector for NoCorrection {
    fn correct_word(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Frequency-ranked corrector over edit distance one and two.
///
/// A known word is returned unchanged. Otherwise the known words one edit
/// away are considered, then two edits away (for words of at most twelve
/// letters), and the most frequent wins; ties go to the
/// lexicographically greater word. Words with no known neighbour are returned
/// unchanged. Capitalization of the first letter is kept.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorrector {
    counts: HashMap<String, u64>,
}

impl FrequencyCorrector {
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut corrector = Self::default();
        for (word, count) in counts {
            *corrector.counts.entry(word.into().to_lowercase()).or_insert(0) += count;
        }
        corrector
    }

    /// Parse `word count` lines. A bare word counts once; `#` starts a comment.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default();
            let count = match fields.next() {
                Some(raw) => raw.parse::<u64>().map_err(|err| {
                    MinerError::Dictionary(format!("line {}: bad count '{}': {}", line_no + 1, raw, err))
                })?,
                None => 1,
            };
            pairs.push((word.to_string(), count));
        }
        Ok(Self::from_counts(pairs))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    /// The English dictionary compiled into the crate: about 29,500 words,
    /// stopwords included.
    pub fn bundled() -> Self {
        // The bundled file is checked by the tests below.
        Self::parse(BUNDLED_FREQUENCIES).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    fn best<I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = String>,
    {
        candidates
            .into_iter()
            .filter_map(|word| self.counts.get(&word).map(|&count| (count, word)))
            .max()
            .map(|(_, word)| word)
    }
}

impl SpellingCorrector for FrequencyCorrector {
    fn correct_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let corrected = if self.is_known(&lower) {
            lower
        } else {
            let near = edits1(&lower);
            self.best(near.iter().cloned())
                .or_else(|| {
                    if lower.len() > MAX_TWO_EDIT_LEN {
                        return None;
                    }
                    self.best(near.iter().flat_map(|edit| edits1(edit)))
                })
                .unwrap_or(lower)
        };

        if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            capitalize(&corrected)
        } else {
            corrected
        }
    }
}

/// All strings one deletion, transposition, replacement or insertion away.
fn edits1(word: &str) -> Vec<String> {
    let bytes = word.as_bytes();
    let len = bytes.len();
    let mut edits = Vec::with_capacity(54 * len + 25);

    for i in 0..len {
        let mut deleted = bytes.to_vec();
        deleted.remove(i);
        edits.push(deleted);
    }
    for i in 0..len.saturating_sub(1) {
        let mut swapped = bytes.to_vec();
        swapped.swap(i, i + 1);
        edits.push(swapped);
    }
    for i in 0..len {
        for &c in ALPHABET {
            if bytes[i] != c {
                let mut replaced = bytes.to_vec();
                replaced[i] = c;
                edits.push(replaced);
            }
        }
    }
    for i in 0..=len {
        for &c in ALPHABET {
            let mut inserted = bytes.to_vec();
            inserted.insert(i, c);
            edits.push(inserted);
        }
    }

    edits
        .into_iter()
        .filter_map(|edit| String::from_utf8(edit).ok())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hunspell-backed corrector: known words pass, others take the first suggestion.
pub struct HunspellCorrector {
    dictionary: Dictionary,
}

impl HunspellCorrector {
    pub fn new(aff: &str, dic: &str) -> Result<Self> {
        let dictionary =
            Dictionary::new(aff, dic).map_err(|err| MinerError::Dictionary(err.to_string()))?;
        Ok(Self { dictionary })
    }

    pub fn from_paths(aff: impl AsRef<Path>, dic: impl AsRef<Path>) -> Result<Self> {
        let aff = std::fs::read_to_string(aff.as_ref())?;
        let dic = std::fs::read_to_string(dic.as_ref())?;
        Self::new(&aff, &dic)
    }
}

impl SpellingCorrector for HunspellCorrector {
    fn correct_word(&self, word: &str) -> String {
        if self.dictionary.check(word) {
            return word.to_string();
        }
        let mut suggestions = Vec::new();
        self.dictionary.suggest(word, &mut suggestions);
        suggestions
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string())
    }
}

impl std::fmt::Debug for HunspellCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellCorrector").finish_non_exhaustive()
    }
}
