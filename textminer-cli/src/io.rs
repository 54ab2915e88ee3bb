//! Reading datasets and abbreviation tables, writing JSON records.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use textminer_core::{AbbreviationTable, Cell, Dataset};
use tracing::info;

use crate::error::CliError;

pub fn delimiter_byte(raw: &str) -> Result<u8, CliError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(CliError::Delimiter(raw.to_string())),
    }
}

/// Load a delimited file with a header row. Every field becomes a text
/// cell, except empty fields, which are read as missing values.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Dataset, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];

    for record in reader.records() {
        let record = record?;
        for (index, cells) in columns.iter_mut().enumerate() {
            let cell = match record.get(index) {
                Some(field) if !field.is_empty() => Cell::from(field),
                _ => Cell::Null,
            };
            cells.push(cell);
        }
    }

    info!(path = %path.display(), columns = names.len(), "loaded dataset");
    Ok(Dataset::from_columns(names.into_iter().zip(columns)))
}

pub fn read_abbreviations(path: &Path, delimiter: char) -> Result<AbbreviationTable, CliError> {
    let delimiter = delimiter_byte(delimiter.encode_utf8(&mut [0; 4]))?;
    let table = AbbreviationTable::from_path(path, delimiter)?;
    info!(path = %path.display(), entries = table.len(), "loaded abbreviations");
    Ok(table)
}

/// Load a JSON array of records. Columns keep the order in which they first
/// appear; records lacking a column get a missing value.
pub fn read_records(path: &Path) -> Result<Dataset, CliError> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    let mut names: Vec<String> = Vec::new();
    for record in &records {
        for name in record.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }

    let mut dataset = Dataset::new();
    for name in names {
        let cells = records
            .iter()
            .map(|record| match record.get(&name) {
                Some(value) => serde_json::from_value(value.clone()),
                None => Ok(Cell::Null),
            })
            .collect::<Result<Vec<Cell>, _>>()?;
        dataset.insert_column(name, cells);
    }
    Ok(dataset)
}

pub fn write_records(
    dataset: &Dataset,
    output: Option<&PathBuf>,
    pretty: bool,
) -> Result<(), CliError> {
    let records = dataset
        .records()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, cell)| Ok((name.to_string(), serde_json::to_value(cell)?)))
                .collect::<Result<Map<String, Value>, serde_json::Error>>()
                .map(Value::Object)
        })
        .collect::<Result<Vec<Value>, _>>()?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &records)?;
    } else {
        serde_json::to_writer(&mut writer, &records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
