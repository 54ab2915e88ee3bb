//! The cleaning pipeline.
//!
//! A [`TextMiner`] owns every engine the passes need (stopwords, spelling,
//! stemming, compiled patterns). They are built once and shared by `&self`
//! across all rows. The dataset is only ever read: each pass returns a new
//! column that the caller stores back.
//!
//! ```rust,ignore
//! let mut miner = TextMiner::new(Some(dataset), Some(abbreviations))?;
//! let cleaned = miner.cleaner("Tweets")?;
//! miner.dataset_mut()?.insert_column("Tweets", cleaned);
//! let unique = miner.revome_duplicate_tokens("Tweets")?;
//! ```

use crate::abbreviation::AbbreviationTable;
use crate::dataset::{Cell, Dataset};
use crate::error::{MinerError, Result};
use crate::patterns::{strip_non_alphanumeric, strip_urls, Patterns};
use crate::progress::{NoProgress, Progress};
use crate::spelling::{FrequencyCorrector, SpellingCorrector};
use crate::stemming::EnglishStemmer;
use crate::stopwords::{BundledCorpus, CorpusFetcher, CorpusLoader, StopwordSet, ENGLISH};
use crate::tokenize::word_tokenize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Corpus directory used when none is configured, relative to the working
/// directory.
pub const DEFAULT_DATA_DIR: &str = "textminer_data";

const CLEANING_LABEL: &str = "Text Cleaning";
const DEDUP_LABEL: &str = "Removal of duplicate tokens";

pub struct TextMiner {
    dataset: Option<Dataset>,
    abbreviations: Option<AbbreviationTable>,
    stop_words: StopwordSet,
    spell_checker: Box<dyn SpellingCorrector>,
    stemmer: EnglishStemmer,
    patterns: Patterns,
    progress: Box<dyn Progress>,
}

impl TextMiner {
    /// Build a pipeline with the default engines.
    ///
    /// Loads the English stopwords from [`DEFAULT_DATA_DIR`], installing the
    /// bundled list there on first use.
    pub fn new(dataset: Option<Dataset>, abbreviations: Option<AbbreviationTable>) -> Result<Self> {
        let mut builder = TextMinerBuilder::new();
        if let Some(dataset) = dataset {
            builder = builder.dataset(dataset);
        }
        if let Some(abbreviations) = abbreviations {
            builder = builder.abbreviations(abbreviations);
        }
        builder.build()
    }

    pub fn builder() -> TextMinerBuilder {
        TextMinerBuilder::new()
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(MinerError::MissingDataset)
    }

    pub fn dataset_mut(&mut self) -> Result<&mut Dataset> {
        self.dataset.as_mut().ok_or(MinerError::MissingDataset)
    }

    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    pub fn set_abbreviations(&mut self, abbreviations: AbbreviationTable) {
        self.abbreviations = Some(abbreviations);
    }

    pub fn stop_words(&self) -> &StopwordSet {
        &self.stop_words
    }

    /// Lower-case, shrink runs of 3+ identical characters to two, then
    /// spell-correct.
    pub fn remove_sequences(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let word = self.patterns.collapse_repeats(&word);
        self.spell_checker.correct(&word)
    }

    /// Clean every row of a text column.
    ///
    /// Rows that keep no token come back as the empty-string cell rather than
    /// an empty token list.
    pub fn cleaner(&self, column: &str) -> Result<Vec<Cell>> {
        let cells = self.dataset()?.column(column)?;
        tracing::info!(column, rows = cells.len(), "cleaning column");

        self.progress.start(CLEANING_LABEL, cells.len());
        let mut filtered_sentences = Vec::with_capacity(cells.len());
        for (row, cell) in cells.iter().enumerate() {
            let sentence = cell.as_text().ok_or_else(|| MinerError::TypeMismatch {
                column: column.to_string(),
                row,
                expected: "text",
                found: cell.kind(),
            })?;
            filtered_sentences.push(self.clean_sentence(sentence)?);
            self.progress.advance();
        }
        self.progress.finish();

        let emptied = filtered_sentences
            .iter()
            .filter(|cell| **cell == Cell::empty())
            .count();
        tracing::debug!(column, emptied, "column cleaned");
        Ok(filtered_sentences)
    }

    /// Clean a single sentence.
    pub fn clean_sentence(&self, sentence: &str) -> Result<Cell> {
        let sentence = strip_urls(sentence);
        let mut token_sentence: Vec<String> = Vec::new();

        for word in word_tokenize(&sentence) {
            let word = strip_non_alphanumeric(&word);
            let word = self.remove_sequences(&word);

            if self.stop_words.contains(&word) {
                continue;
            }

            let abbreviations = self
                .abbreviations
                .as_ref()
                .ok_or(MinerError::MissingAbbreviations)?;
            match abbreviations.expand(&word) {
                // Expansions are stored already stemmed.
                Some(expansion) => token_sentence.extend(expansion.iter().cloned()),
                None => {
                    let word = self.stemmer.stem(&word);
                    if !word.is_empty() {
                        token_sentence.push(word);
                    }
                }
            }
        }

        if token_sentence.is_empty() {
            return Ok(Cell::empty());
        }
        Ok(Cell::Tokens(self.patterns.flatten(&token_sentence.join(" "))))
    }

    /// De-duplicate every row of a token column, keeping first occurrences.
    ///
    /// A text cell is treated as a sequence of characters, so the cleaner's
    /// empty-string cell comes back as an empty token list.
    pub fn revome_duplicate_tokens(&self, column: &str) -> Result<Vec<Cell>> {
        let cells = self.dataset()?.column(column)?;
        tracing::info!(column, rows = cells.len(), "removing duplicate tokens");

        self.progress.start(DEDUP_LABEL, cells.len());
        let mut filtered_tokens = Vec::with_capacity(cells.len());
        for (row, cell) in cells.iter().enumerate() {
            let unique = match cell {
                Cell::Tokens(tokens) => remove_duplicate_tokens(tokens),
                Cell::Text(text) => {
                    let chars: Vec<String> = text.chars().map(String::from).collect();
                    remove_duplicate_tokens(&chars)
                }
                Cell::Null => {
                    return Err(MinerError::TypeMismatch {
                        column: column.to_string(),
                        row,
                        expected: "tokens",
                        found: cell.kind(),
                    })
                }
            };
            filtered_tokens.push(Cell::Tokens(unique));
            self.progress.advance();
        }
        self.progress.finish();

        Ok(filtered_tokens)
    }
}

impl std::fmt::Debug for TextMiner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMiner")
            .field("dataset", &self.dataset)
            .field("abbreviations", &self.abbreviations.as_ref().map(AbbreviationTable::len))
            .field("stop_words", &self.stop_words.len())
            .field("stemmer", &self.stemmer)
            .finish_non_exhaustive()
    }
}

/// Keep the first occurrence of every token, in order.
pub fn remove_duplicate_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// Configures the engines of a [`TextMiner`].
pub struct TextMinerBuilder {
    dataset: Option<Dataset>,
    abbreviations: Option<AbbreviationTable>,
    data_dir: PathBuf,
    language: String,
    fetcher: Box<dyn CorpusFetcher>,
    stop_words: Option<StopwordSet>,
    spell_checker: Option<Box<dyn SpellingCorrector>>,
    progress: Box<dyn Progress>,
}

impl TextMinerBuilder {
    pub fn new() -> Self {
        Self {
            dataset: None,
            abbreviations: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            language: ENGLISH.to_string(),
            fetcher: Box::new(BundledCorpus),
            stop_words: None,
            spell_checker: None,
            progress: Box::new(NoProgress),
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn abbreviations(mut self, abbreviations: AbbreviationTable) -> Self {
        self.abbreviations = Some(abbreviations);
        self
    }

    /// Directory holding `corpora/stopwords/<language>`.
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn fetcher(mut self, fetcher: impl CorpusFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    /// Use this set instead of loading a corpus from disk.
    pub fn stop_words(mut self, stop_words: StopwordSet) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    pub fn spell_checker(mut self, spell_checker: impl SpellingCorrector + 'static) -> Self {
        self.spell_checker = Some(Box::new(spell_checker));
        self
    }

    pub fn boxed_spell_checker(mut self, spell_checker: Box<dyn SpellingCorrector>) -> Self {
        self.spell_checker = Some(spell_checker);
        self
    }

    pub fn progress(mut self, progress: impl Progress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn build(self) -> Result<TextMiner> {
        let stop_words = match self.stop_words {
            Some(stop_words) => stop_words,
            None => {
                let loader = CorpusLoader::with_boxed_fetcher(self.data_dir, self.fetcher);
                loader.load(&self.language)?
            }
        };
        let spell_checker = self
            .spell_checker
            .unwrap_or_else(|| Box::new(FrequencyCorrector::bundled()));

        Ok(TextMiner {
            dataset: self.dataset,
            abbreviations: self.abbreviations,
            stop_words,
            spell_checker,
            stemmer: EnglishStemmer::new(),
            patterns: Patterns::new(),
            progress: self.progress,
        })
    }
}

impl Default for TextMinerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::NoCorrection;
    use rstest::rstest;

    fn miner(dataset: Dataset) -> TextMiner {
        TextMiner::builder()
            .dataset(dataset)
            .abbreviations(AbbreviationTable::from_pairs([("ca", "['californ']")]))
            .stop_words(StopwordSet::english())
            .spell_checker(NoCorrection)
            .build()
            .unwrap()
    }

    #[test]
    fn test_remove_sequences_lowercases_and_collapses() {
        let miner = miner(Dataset::new());
        assert_eq!(miner.remove_sequences("FAAAASSST"), "faasst");
        assert_eq!(miner.remove_sequences(""), "");
    }

    #[rstest]
    #[case("fire")]
    #[case("flood")]
    #[case("police")]
    #[case("help")]
    #[case("Forest")]
    #[case("residents")]
    fn test_remove_sequences_keeps_dictionary_words(#[case] word: &str) {
        let miner = TextMiner::builder()
            .stop_words(StopwordSet::english())
            .build()
            .unwrap();
        assert_eq!(miner.remove_sequences(word), word.to_lowercase());
    }

    #[test]
    fn test_remove_sequences_corrects_elongated_words() {
        let miner = TextMiner::builder()
            .stop_words(StopwordSet::english())
            .build()
            .unwrap();
        assert_eq!(miner.remove_sequences("faaaassst"), "fast");
        assert_eq!(miner.remove_sequences("Floooood"), "flood");
    }

    #[test]
    fn test_abbreviations_supplied_after_build() {
        let mut miner = TextMiner::builder()
            .stop_words(StopwordSet::english())
            .spell_checker(NoCorrection)
            .build()
            .unwrap();
        assert!(miner.clean_sentence("CA").is_err());

        miner.set_abbreviations(AbbreviationTable::from_pairs([("ca", "['californ']")]));
        assert_eq!(
            miner.clean_sentence("CA").unwrap(),
            Cell::from(vec!["californ"])
        );
    }

    #[test]
    fn test_clean_sentence_without_table_fails_on_first_lookup() {
        let miner = TextMiner::builder()
            .stop_words(StopwordSet::english())
            .spell_checker(NoCorrection)
            .build()
            .unwrap();

        // Only stopwords: the lookup is never reached.
        assert_eq!(miner.clean_sentence("it is the").unwrap(), Cell::empty());
        assert!(matches!(
            miner.clean_sentence("hot summer"),
            Err(MinerError::MissingAbbreviations)
        ));
    }

    #[test]
    fn test_cleaner_rejects_non_text() {
        let dataset = Dataset::from_columns([(
            "Tweets",
            vec![Cell::from("hot"), Cell::Null],
        )]);
        let err = miner(dataset).cleaner("Tweets").unwrap_err();
        assert!(matches!(err, MinerError::TypeMismatch { row: 1, .. }));
    }

    #[test]
    fn test_pass_without_dataset() {
        let miner = TextMiner::builder()
            .stop_words(StopwordSet::english())
            .build()
            .unwrap();
        assert!(matches!(
            miner.cleaner("Tweets"),
            Err(MinerError::MissingDataset)
        ));
    }

    #[test]
    fn test_dedup_text_cell_iterates_characters() {
        let dataset = Dataset::from_columns([(
            "Token",
            vec![Cell::empty(), Cell::from("abca"), Cell::from(vec!["a", "a"])],
        )]);
        let unique = miner(dataset).revome_duplicate_tokens("Token").unwrap();
        assert_eq!(
            unique,
            vec![
                Cell::Tokens(vec![]),
                Cell::from(vec!["a", "b", "c"]),
                Cell::from(vec!["a"]),
            ]
        );
    }

    #[test]
    fn test_dedup_rejects_null() {
        let dataset = Dataset::from_columns([("Token", vec![Cell::Null])]);
        let err = miner(dataset).revome_duplicate_tokens("Token").unwrap_err();
        assert!(matches!(err, MinerError::TypeMismatch { row: 0, .. }));
    }

    #[test]
    fn test_remove_duplicate_tokens() {
        assert_eq!(
            remove_duplicate_tokens(&["fast", "car", "fast"]),
            vec!["fast", "car"]
        );
        assert!(remove_duplicate_tokens::<&str>(&[]).is_empty());
    }
}
