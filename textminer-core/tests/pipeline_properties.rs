//! Invariants of the cleaning passes over generated input.

use proptest::prelude::*;
use textminer_core::stemming::EnglishStemmer;
use textminer_core::stopwords::ENGLISH_STOP_WORDS;
use textminer_core::{
    remove_duplicate_tokens, AbbreviationTable, Cell, Dataset, NoCorrection, StopwordSet,
    TextMiner,
};

/// Words that are neither stopwords nor stem to one.
const CONTENT_WORDS: &[&str] = &[
    "car", "fast", "summer", "flood", "police", "storm", "forest", "news", "python3", "london",
    "fire", "crash",
];

/// Words the stemmer would rewrite.
const STEMMABLE_WORDS: &[&str] = &[
    "running", "studies", "cars", "happily", "generously", "flooding", "residents",
];

fn miner(dataset: Dataset) -> TextMiner {
    miner_with(dataset, AbbreviationTable::from_pairs([("ny", "['new', 'york']")]))
}

fn miner_with(dataset: Dataset, abbreviations: AbbreviationTable) -> TextMiner {
    TextMiner::builder()
        .dataset(dataset)
        .abbreviations(abbreviations)
        .stop_words(StopwordSet::english())
        .spell_checker(NoCorrection)
        .build()
        .expect("pipeline to build")
}

fn plain_stop_words() -> Vec<&'static str> {
    ENGLISH_STOP_WORDS
        .iter()
        .copied()
        .filter(|word| !word.contains('\''))
        .collect()
}

fn has_triple_run(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{1,8}|the|is|ny|[0-9]{1,3}|!|http://x\\.io/[a-z]{1,4}", 0..8)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn cleaner_preserves_row_order(rows in prop::collection::vec(sentence(), 0..12)) {
        let dataset = Dataset::from_columns([("Text", rows.iter().map(String::as_str).collect::<Vec<_>>())]);
        let miner = miner(dataset);

        let cleaned = miner.cleaner("Text").unwrap();
        prop_assert_eq!(cleaned.len(), rows.len());
        for (row, cell) in rows.iter().zip(&cleaned) {
            prop_assert_eq!(cell, &miner.clean_sentence(row).unwrap());
        }
    }

    #[test]
    fn cleaned_rows_hold_no_empty_tokens(text in sentence()) {
        let miner = miner(Dataset::new());
        match miner.clean_sentence(&text).unwrap() {
            Cell::Tokens(tokens) => {
                prop_assert!(!tokens.is_empty());
                for token in &tokens {
                    prop_assert!(!token.is_empty());
                    prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
                }
            }
            Cell::Text(sentinel) => prop_assert_eq!(sentinel, ""),
            Cell::Null => prop_assert!(false, "cleaner never yields null"),
        }
    }

    #[test]
    fn stopword_only_rows_become_empty_string(
        words in prop::collection::vec(
            prop::sample::select(plain_stop_words()),
            0..10,
        )
    ) {
        let miner = miner(Dataset::new());
        prop_assert_eq!(miner.clean_sentence(&words.join(" ")).unwrap(), Cell::empty());
    }

    #[test]
    fn stop_words_never_survive_mixed_rows(
        words in prop::collection::vec(
            prop_oneof![
                prop::sample::select(plain_stop_words()),
                prop::sample::select(CONTENT_WORDS.to_vec()),
            ],
            0..12,
        )
    ) {
        let miner = miner(Dataset::new());
        let stemmer = EnglishStemmer::new();
        let expected: Vec<String> = words
            .iter()
            .filter(|word| !miner.stop_words().contains(word))
            .map(|word| stemmer.stem(word))
            .collect();

        match miner.clean_sentence(&words.join(" ")).unwrap() {
            Cell::Tokens(tokens) => {
                for token in &tokens {
                    prop_assert!(!miner.stop_words().contains(token), "stopword '{}' kept", token);
                }
                prop_assert_eq!(tokens, expected);
            }
            Cell::Text(sentinel) => {
                prop_assert_eq!(sentinel, "");
                prop_assert!(expected.is_empty());
            }
            Cell::Null => prop_assert!(false, "cleaner never yields null"),
        }
    }

    #[test]
    fn expansions_are_kept_verbatim(
        key in "[b-df-hj-np-tv-z]{3,6}",
        expansion in prop::sample::subsequence(STEMMABLE_WORDS.to_vec(), 1..=4),
        before in prop::sample::select(CONTENT_WORDS.to_vec()),
        after in prop::sample::select(CONTENT_WORDS.to_vec()),
    ) {
        prop_assume!(!has_triple_run(&key));
        let stemmer = EnglishStemmer::new();
        for word in &expansion {
            prop_assert_ne!(stemmer.stem(word), *word);
        }

        let mut table = AbbreviationTable::new();
        table.insert(key.clone(), &format!("{:?}", expansion));
        let miner = miner_with(Dataset::new(), table);

        let mut expected = vec![stemmer.stem(before)];
        expected.extend(expansion.iter().map(|word| word.to_string()));
        expected.push(stemmer.stem(after));

        let cleaned = miner.clean_sentence(&format!("{before} {key} {after}")).unwrap();
        prop_assert_eq!(cleaned, Cell::Tokens(expected));
    }

    #[test]
    fn dedup_keeps_first_occurrences(tokens in prop::collection::vec("[a-e]{1,2}", 0..24)) {
        let unique = remove_duplicate_tokens(&tokens);

        let mut expected: Vec<String> = Vec::new();
        for token in &tokens {
            if !expected.contains(token) {
                expected.push(token.clone());
            }
        }
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn dedup_preserves_row_order(rows in prop::collection::vec(prop::collection::vec("[a-c]", 0..6), 0..10)) {
        let cells: Vec<Cell> = rows.iter().cloned().map(Cell::Tokens).collect();
        let miner = miner(Dataset::from_columns([("Token", cells)]));

        let unique = miner.revome_duplicate_tokens("Token").unwrap();
        prop_assert_eq!(unique.len(), rows.len());
        for (row, cell) in rows.iter().zip(&unique) {
            prop_assert_eq!(cell, &Cell::Tokens(remove_duplicate_tokens(row)));
        }
    }
}
