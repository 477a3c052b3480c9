//! Name list model
//!
//! A [`NameList`] is the flat, ordered sequence of names both engines read.
//! It is rebuilt wholesale whenever the input changes.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// Ordered list of trimmed, non-empty names. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses free-form text, one name per line
    ///
    /// Each line is trimmed; blank lines and a leading byte order mark are
    /// dropped.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::from_cells(text.lines())
    }

    /// Flattens tabular rows into a single list, row by row
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        for row in rows {
            names.extend(row.into_iter().filter_map(|cell| normalize(cell.as_ref())));
        }
        Self(names)
    }

    /// Reads delimited text (CSV by default) and flattens every cell
    ///
    /// Rows may have differing lengths and no header row is assumed.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        Ok(Self::from_rows(rows))
    }

    fn from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        Self(cells.into_iter().filter_map(normalize).collect())
    }

    /// Renders the list back to text, one name per line
    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns how many times each name occurs
    pub fn counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for name in &self.0 {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self::from_rows([names])
    }
}

impl<'a> From<&[&'a str]> for NameList {
    fn from(names: &[&'a str]) -> Self {
        Self::from_cells(names.iter().copied())
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn normalize(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
