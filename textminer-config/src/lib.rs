//! Shared configuration loader for textminer.
//!
//! Every key has a value in `defaults/textminer.default.toml`, which is
//! compiled in. A [`Loader`] stacks user files, environment variables and
//! command-line overrides on top and deserializes the result into
//! [`MinerConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/textminer.default.toml");

/// Top-level configuration consumed by textminer applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MinerConfig {
    pub corpus: CorpusConfig,
    pub spelling: SpellingConfig,
    pub abbreviations: AbbreviationsConfig,
    pub progress: ProgressConfig,
    pub output: OutputConfig,
}

/// Where stopword corpora live.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    pub data_dir: PathBuf,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpellingEngine {
    Frequency,
    Hunspell,
    None,
}

/// Spelling engine selection. Empty paths mean "not set".
#[derive(Debug, Clone, Deserialize)]
pub struct SpellingConfig {
    pub engine: SpellingEngine,
    pub frequency_dictionary: String,
    pub hunspell_aff: String,
    pub hunspell_dic: String,
}

impl SpellingConfig {
    pub fn frequency_dictionary(&self) -> Option<&Path> {
        non_empty_path(&self.frequency_dictionary)
    }

    pub fn hunspell_files(&self) -> Option<(&Path, &Path)> {
        Some((
            non_empty_path(&self.hunspell_aff)?,
            non_empty_path(&self.hunspell_dic)?,
        ))
    }
}

fn non_empty_path(raw: &str) -> Option<&Path> {
    (!raw.trim().is_empty()).then(|| Path::new(raw))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbbreviationsConfig {
    pub delimiter: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// Prefix of environment variables read by [`Loader::with_env`].
pub const ENV_PREFIX: &str = "TEXTMINER";

/// Stacks configuration layers; later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with the embedded defaults only.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            layers: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Add a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Add `TEXTMINER_<SECTION>__<KEY>` variables, e.g.
    /// `TEXTMINER_SPELLING__ENGINE=none`.
    pub fn with_env(mut self) -> Self {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");
        self.layers = self.layers.add_source(env);
        self
    }

    /// Set one dotted key, above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MinerConfig, ConfigError> {
        let merged = self.layers.build()?;
        merged.try_deserialize()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.layers = self.layers.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults, with no user layers.
pub fn load_defaults() -> Result<MinerConfig, ConfigError> {
    Loader::new().build()
}
