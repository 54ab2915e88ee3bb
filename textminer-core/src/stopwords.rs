//! Stopword corpus loading.
//!
//! Corpora live on disk under `<data_dir>/corpora/stopwords/<language>`, one
//! word per line. [`CorpusLoader::load`] reads that file and, when it is
//! missing, asks its [`CorpusFetcher`] to provide it once before retrying.

use crate::error::{MinerError, Result};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const ENGLISH: &str = "english";

/// The NLTK English stopword list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Read-only set of stopwords for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The bundled English list, without touching the filesystem.
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Parse a corpus file: one word per line, blank lines ignored.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Something that can place a corpus file on disk.
pub trait CorpusFetcher {
    /// Make `language`'s corpus available at `destination`.
    ///
    /// Must be safe to call when the file already exists.
    fn fetch(&self, language: &str, destination: &Path) -> io::Result<()>;
}

/// Installs the stopword lists compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCorpus;

impl CorpusFetcher for BundledCorpus {
    fn fetch(&self, language: &str, destination: &Path) -> io::Result<()> {
        if destination.exists() {
            return Ok(());
        }
        let words = match language {
            ENGLISH => ENGLISH_STOP_WORDS,
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no bundled stopword list for '{}'", other),
                ))
            }
        };
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write beside the target then rename so a reader never sees half a file.
        let staging = destination.with_extension("partial");
        let mut contents = words.join("\n");
        contents.push('\n');
        fs::write(&staging, contents)?;
        fs::rename(&staging, destination)
    }
}

/// Loads stopword corpora from a data directory, fetching on a miss.
pub struct CorpusLoader {
    data_dir: PathBuf,
    fetcher: Box<dyn CorpusFetcher>,
}

impl CorpusLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_fetcher(data_dir, BundledCorpus)
    }

    pub fn with_fetcher(data_dir: impl Into<PathBuf>, fetcher: impl CorpusFetcher + 'static) -> Self {
        Self::with_boxed_fetcher(data_dir, Box::new(fetcher))
    }

    pub fn with_boxed_fetcher(data_dir: impl Into<PathBuf>, fetcher: Box<dyn CorpusFetcher>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fetcher,
        }
    }

    pub fn corpus_path(&self, language: &str) -> PathBuf {
        self.data_dir
            .join("corpora")
            .join("stopwords")
            .join(language)
    }

    /// Load a corpus, fetching it once if it is not on disk yet.
    pub fn load(&self, language: &str) -> Result<StopwordSet> {
        let path = self.corpus_path(language);
        match Self::read(&path) {
            Ok(set) => return Ok(set),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        tracing::warn!(language, path = %path.display(), "stopword corpus missing, fetching");
        self.fetcher
            .fetch(language, &path)
            .map_err(|source| MinerError::CorpusFetch {
                name: language.to_string(),
                source,
            })?;

        match Self::read(&path) {
            Ok(set) => {
                tracing::debug!(language, words = set.len(), "stopword corpus installed");
                Ok(set)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(MinerError::CorpusUnavailable {
                name: language.to_string(),
                path,
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn read(path: &Path) -> io::Result<StopwordSet> {
        fs::read_to_string(path).map(|contents| StopwordSet::parse(&contents))
    }
}

impl std::fmt::Debug for CorpusLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusLoader")
            .field("data_dir", &self.data_dir)
            .finish_non_exhaustive()
    }
}
