//! Command-line interface for textminer
//! Cleans text columns of a delimited file and writes the tokenized rows as JSON.
//!
//! Usage:
//!   textminer clean `<input>` --column `<name>` [--abbreviations `<file>`] [--dedup]
//!   textminer dedup `<input.json>` --column `<name>`

mod error;
mod io;
mod logging;
mod pipeline;
mod progress;

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use textminer_config::{Loader, MinerConfig};

use crate::error::CliError;

fn main() {
    let matches = Command::new("textminer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalizes free-text columns into token lists")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding the stopword corpora"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Verbosity of diagnostics written to stderr"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Hide the progress bar"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the result here instead of stdout"),
        )
        .subcommand(
            Command::new("clean")
                .about("Clean and tokenize text columns of a delimited file")
                .arg(
                    Arg::new("input")
                        .help("Delimited file with a header row")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(column_arg())
                .arg(
                    Arg::new("abbreviations")
                        .long("abbreviations")
                        .short('a')
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Abbreviation table with `abbreviation` and `word` columns"),
                )
                .arg(
                    Arg::new("delimiter")
                        .long("delimiter")
                        .short('d')
                        .default_value(",")
                        .help("Field delimiter of the input file"),
                )
                .arg(
                    Arg::new("dedup")
                        .long("dedup")
                        .action(ArgAction::SetTrue)
                        .help("Drop repeated tokens after cleaning"),
                ),
        )
        .subcommand(
            Command::new("dedup")
                .about("Drop repeated tokens from columns of a JSON dataset")
                .arg(
                    Arg::new("input")
                        .help("JSON array of records, as written by `clean`")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(column_arg()),
        )
        .get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    if let Err(err) = logging::init(level) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let result = match matches.subcommand() {
        Some(("clean", sub)) => handle_clean_command(sub),
        Some(("dedup", sub)) => handle_dedup_command(sub),
        _ => unreachable!("clap enforces a subcommand"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn column_arg() -> Arg {
    Arg::new("column")
        .long("column")
        .short('C')
        .required(true)
        .action(ArgAction::Append)
        .help("Column to process (repeatable)")
}

fn columns(sub: &ArgMatches) -> Vec<String> {
    sub.get_many::<String>("column")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn load_config(sub: &ArgMatches) -> Result<MinerConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = sub.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(dir) = sub.get_one::<PathBuf>("data-dir") {
        loader = loader.set_override("corpus.data_dir", dir.to_string_lossy().into_owned())?;
    }
    if sub.get_flag("no-progress") {
        loader = loader.set_override("progress.enabled", false)?;
    }
    if sub.get_flag("pretty") {
        loader = loader.set_override("output.pretty", true)?;
    }
    Ok(loader.build()?)
}

/// Handle the clean command
fn handle_clean_command(sub: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(sub)?;
    let input = sub
        .get_one::<PathBuf>("input")
        .ok_or(CliError::Usage("missing input file"))?;
    let delimiter = sub
        .get_one::<String>("delimiter")
        .map(String::as_str)
        .unwrap_or(",");
    let delimiter = io::delimiter_byte(delimiter)?;

    let dataset = io::read_delimited(input, delimiter)?;
    let abbreviations = match sub.get_one::<PathBuf>("abbreviations") {
        Some(path) => Some(io::read_abbreviations(
            path,
            config.abbreviations.delimiter,
        )?),
        None => None,
    };

    let mut miner = pipeline::build_miner(&config)?;
    miner.set_dataset(dataset);
    if let Some(abbreviations) = abbreviations {
        miner.set_abbreviations(abbreviations);
    }
    for column in columns(sub) {
        let cleaned = miner.cleaner(&column)?;
        miner.dataset_mut()?.insert_column(column.clone(), cleaned);
        if sub.get_flag("dedup") {
            let unique = miner.revome_duplicate_tokens(&column)?;
            miner.dataset_mut()?.insert_column(column, unique);
        }
    }

    let output = sub.get_one::<PathBuf>("output");
    io::write_records(miner.dataset()?, output, config.output.pretty)
}

/// Handle the dedup command
fn handle_dedup_command(sub: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(sub)?;
    let input = sub
        .get_one::<PathBuf>("input")
        .ok_or(CliError::Usage("missing input file"))?;

    let dataset = io::read_records(input)?;
    let mut miner = pipeline::build_miner(&config)?;
    miner.set_dataset(dataset);
    for column in columns(sub) {
        let unique = miner.revome_duplicate_tokens(&column)?;
        miner.dataset_mut()?.insert_column(column, unique);
    }

    let output = sub.get_one::<PathBuf>("output");
    io::write_records(miner.dataset()?, output, config.output.pretty)
}
