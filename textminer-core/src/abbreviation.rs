//! Abbreviation lookup used by the cleaner.
//!
//! Entries map a short form to the tokens that replace it. Expansions are
//! stored already tokenized and are never stemmed again.
//!
//! The on-disk layout is a delimiter-separated file with an `abbreviation`
//! and a `word` column, where `word` holds a stringified list such as
//! `['new', 'york']`. The expansion is the sequence of alphanumeric runs of
//! that cell.

use crate::error::{MinerError, Result};
use crate::patterns::ALPHANUMERIC_RUN;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const ABBREVIATION_HEADER: &str = "abbreviation";
const WORD_HEADER: &str = "word";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: HashMap<String, Vec<String>>,
}

impl AbbreviationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(abbreviation, expansion)` pairs.
    ///
    /// Expansions are split on alphanumeric runs. A repeated abbreviation
    /// appends its tokens to the earlier expansion.
    pub fn from_pairs<I, A, W>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, W)>,
        A: Into<String>,
        W: AsRef<str>,
    {
        let mut table = Self::new();
        for (abbreviation, word) in pairs {
            table.insert(abbreviation, word.as_ref());
        }
        table
    }

    /// Read a table from a delimited source with a header row.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| MinerError::Abbreviations(format!("missing '{}' column", name)))
        };
        let abbreviation_idx = position(ABBREVIATION_HEADER)?;
        let word_idx = position(WORD_HEADER)?;

        let mut table = Self::new();
        for record in csv_reader.records() {
            let record = record?;
            let (Some(abbreviation), Some(word)) = (record.get(abbreviation_idx), record.get(word_idx))
            else {
                return Err(MinerError::Abbreviations(format!(
                    "short record at line {}",
                    record.position().map_or(0, |pos| pos.line())
                )));
            };
            table.insert(abbreviation, word);
        }

        tracing::debug!(entries = table.len(), "loaded abbreviation table");
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file, delimiter)
    }

    pub fn insert(&mut self, abbreviation: impl Into<String>, word: &str) {
        let tokens = ALPHANUMERIC_RUN
            .find_iter(word)
            .map(|m| m.as_str().to_string());
        self.entries
            .entry(abbreviation.into())
            .or_default()
            .extend(tokens);
    }

    /// Exact-match lookup.
    pub fn expand(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
