//! English stemming.

use rust_stemmers::{Algorithm, Stemmer};

/// Rule-based English stemmer (Snowball's Porter2).
///
/// Porter2 stems adverbs in `-ly` to their adjective (`fairly` to `fair`)
/// where the 1980 Porter rules leave `fairli`. Abbreviation tables whose
/// expansions were pre-stemmed with the older rules will not always line up
/// with the stems produced here.
pub struct EnglishStemmer {
    stemmer: Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", "run")]
    #[case("cars", "car")]
    #[case("studies", "studi")]
    #[case("happy", "happi")]
    #[case("news", "news")]
    #[case("latest", "latest")]
    #[case("python3", "python3")]
    #[case("fast", "fast")]
    #[case("", "")]
    fn test_english_stems(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(EnglishStemmer::new().stem(word), expected);
    }

    #[rstest]
    #[case("fairly", "fair")]
    #[case("generously", "generous")]
    #[case("flooding", "flood")]
    #[case("residents", "resid")]
    fn test_porter2_rules(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(EnglishStemmer::new().stem(word), expected);
    }
}
