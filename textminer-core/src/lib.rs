//! # textminer-core
//!
//! Normalizes free-form text into cleaned token sequences, one row at a time.
//!
//! Two passes run over a [`Dataset`]:
//!
//! - [`TextMiner::cleaner`] turns a column of raw strings into token lists:
//!   URLs are stripped, the text is tokenized, every token is reduced to ASCII
//!   letters and digits, lower-cased, its long letter runs collapsed, then
//!   spell-corrected. Stopwords are dropped, abbreviations expanded, and
//!   everything else stemmed.
//! - [`TextMiner::revome_duplicate_tokens`] keeps the first occurrence of
//!   every token in each row.
//!
//! Rows keep their order: row `i` of a pass's output comes from row `i` of
//! its input.

pub mod abbreviation;
pub mod dataset;
pub mod error;
pub mod miner;
pub mod patterns;
pub mod progress;
pub mod spelling;
pub mod stemming;
pub mod stopwords;
pub mod tokenize;

pub use abbreviation::AbbreviationTable;
pub use dataset::{Cell, Dataset};
pub use error::{MinerError, Result};
pub use miner::{remove_duplicate_tokens, TextMiner, TextMinerBuilder};
pub use progress::{NoProgress, Progress};
pub use spelling::{FrequencyCorrector, HunspellCorrector, NoCorrection, SpellingCorrector};
pub use stopwords::{BundledCorpus, CorpusFetcher, CorpusLoader, StopwordSet};
