//! Errors surfaced by the command-line front end.

use std::fmt;
use std::io;

use config::ConfigError;
use textminer_core::MinerError;

#[derive(Debug)]
pub enum CliError {
    Usage(&'static str),
    /// Delimiters must be a single ASCII character.
    Delimiter(String),
    /// The hunspell engine was selected without both dictionary files.
    MissingHunspellFiles,
    Config(ConfigError),
    Miner(MinerError),
    Csv(csv::Error),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Delimiter(raw) => {
                write!(f, "Delimiter '{}' must be a single ASCII character", raw)
            }
            CliError::MissingHunspellFiles => write!(
                f,
                "The hunspell engine needs both spelling.hunspell_aff and spelling.hunspell_dic"
            ),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Miner(err) => write!(f, "{}", err),
            CliError::Csv(err) => write!(f, "Failed to read input: {}", err),
            CliError::Json(err) => write!(f, "JSON error: {}", err),
            CliError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(err) => Some(err),
            CliError::Miner(err) => Some(err),
            CliError::Csv(err) => Some(err),
            CliError::Json(err) => Some(err),
            CliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<MinerError> for CliError {
    fn from(err: MinerError) -> Self {
        CliError::Miner(err)
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Csv(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}
