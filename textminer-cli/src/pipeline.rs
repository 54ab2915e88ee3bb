//! Assembles a [`TextMiner`] from the loaded configuration.

use textminer_config::{MinerConfig, SpellingEngine};
use textminer_core::{
    FrequencyCorrector, HunspellCorrector, NoCorrection, SpellingCorrector, TextMiner,
};
use tracing::debug;

use crate::error::CliError;
use crate::progress::BarProgress;

/// Stopwords and spelling come from `config`; the dataset and abbreviation
/// table are handed over once they have been read.
pub fn build_miner(config: &MinerConfig) -> Result<TextMiner, CliError> {
    let miner = TextMiner::builder()
        .data_dir(&config.corpus.data_dir)
        .language(config.corpus.language.clone())
        .boxed_spell_checker(spell_checker(config)?)
        .progress(BarProgress::new(config.progress.enabled))
        .build()?;
    Ok(miner)
}

fn spell_checker(config: &MinerConfig) -> Result<Box<dyn SpellingCorrector>, CliError> {
    let spelling = &config.spelling;
    debug!(engine = ?spelling.engine, "building spelling corrector");
    let checker: Box<dyn SpellingCorrector> = match spelling.engine {
        SpellingEngine::Frequency => match spelling.frequency_dictionary() {
            Some(path) => Box::new(FrequencyCorrector::from_path(path)?),
            None => Box::new(FrequencyCorrector::bundled()),
        },
        SpellingEngine::Hunspell => {
            let (aff, dic) = spelling
                .hunspell_files()
                .ok_or(CliError::MissingHunspellFiles)?;
            Box::new(HunspellCorrector::from_paths(aff, dic)?)
        }
        SpellingEngine::None => Box::new(NoCorrection),
    };
    Ok(checker)
}
