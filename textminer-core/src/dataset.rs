//! Minimal column store the passes read from.
//!
//! A [`Dataset`] is a set of named columns that all share the same number of
//! rows. Passes never mutate it: they read one column and hand back a new
//! `Vec<Cell>` that the caller stores with [`Dataset::insert_column`].

use crate::error::{MinerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Tokens(Vec<String>),
    Null,
}

impl Cell {
    /// The empty-string cell the cleaner emits for rows with no tokens.
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Text(_) => "text",
            Cell::Tokens(_) => "tokens",
            Cell::Null => "null",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<Vec<String>> for Cell {
    fn from(tokens: Vec<String>) -> Self {
        Cell::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Cell {
    fn from(tokens: Vec<&str>) -> Self {
        Cell::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Named columns of equal length, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    names: Vec<String>,
    columns: BTreeMap<String, Vec<Cell>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, cells)` pairs.
    pub fn from_columns<N, C, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<C>)>,
        N: Into<String>,
        C: Into<Cell>,
    {
        let mut dataset = Self::new();
        for (name, cells) in columns {
            dataset.insert_column(name, cells.into_iter().map(Into::into).collect());
        }
        dataset
    }

    /// Insert or replace a column, keeping its original position on replace.
    pub fn insert_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) {
        let name = name.into();
        if !self.columns.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.columns.insert(name, cells);
    }

    pub fn column(&self, name: &str) -> Result<&[Cell]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| MinerError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows, taken from the first column.
    pub fn len(&self) -> usize {
        self.names
            .first()
            .and_then(|name| self.columns.get(name))
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as ordered `(column, cell)` pairs, for record-oriented output.
    pub fn records(&self) -> Vec<Vec<(&str, &Cell)>> {
        (0..self.len())
            .map(|row| {
                self.names
                    .iter()
                    .filter_map(|name| {
                        self.columns
                            .get(name)
                            .and_then(|cells| cells.get(row))
                            .map(|cell| (name.as_str(), cell))
                    })
                    .collect()
            })
            .collect()
    }
}
