//! Name source: reads name lists from files or stdin
//!
//! Plain text is read one name per line. CSV/TSV files are flattened cell by
//! cell. Both end up as the same [`NameList`].

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::NameList;

#[derive(Debug, Error)]
pub enum NameSourceError {
    #[error("Failed to read names from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// How input text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormat {
    /// One name per line
    Text,
    /// Delimited cells, every cell is a name
    Csv { delimiter: u8 },
}

impl NameFormat {
    pub const CSV: NameFormat = NameFormat::Csv { delimiter: b',' };
    pub const TSV: NameFormat = NameFormat::Csv { delimiter: b'\t' };

    /// Guesses the format from a file extension
    pub fn detect(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Self::CSV,
            Some("tsv") => Self::TSV,
            _ => Self::Text,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NameFormat::Text => "text",
            NameFormat::Csv { delimiter: b'\t' } => "tsv",
            NameFormat::Csv { .. } => "csv",
        }
    }
}

/// Where names are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Stdin,
    File(PathBuf),
}

impl NameSource {
    /// `None` and `-` both mean stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => NameSource::Stdin,
            Some(path) if path.as_os_str() == "-" => NameSource::Stdin,
            Some(path) => NameSource::File(path.to_path_buf()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            NameSource::Stdin => "<stdin>".to_string(),
            NameSource::File(path) => path.display().to_string(),
        }
    }

    /// The format to use, honoring an explicit override
    pub fn format(&self, forced: Option<NameFormat>) -> NameFormat {
        match (forced, self) {
            (Some(format), _) => format,
            (None, NameSource::File(path)) => NameFormat::detect(path),
            (None, NameSource::Stdin) => NameFormat::Text,
        }
    }

    /// Reads and normalizes the names
    pub fn load(&self, forced: Option<NameFormat>) -> Result<NameList, NameSourceError> {
        let format = self.format(forced);
        let content = self.read_to_string()?;
        parse(&content, format).map_err(|source| NameSourceError::Csv {
            path: self.describe(),
            source,
        })
    }

    fn read_to_string(&self) -> Result<String, NameSourceError> {
        let result = match self {
            NameSource::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            NameSource::File(path) => fs::read_to_string(path),
        };

        result.map_err(|source| NameSourceError::Read {
            path: self.describe(),
            source,
        })
    }
}

/// Parses already-read content
pub fn parse(content: &str, format: NameFormat) -> Result<NameList, csv::Error> {
    match format {
        NameFormat::Text => Ok(NameList::from_text(content)),
        NameFormat::Csv { delimiter } => NameList::from_csv_reader(content.as_bytes(), delimiter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn detect_format_from_extension() {
        assert_eq!(NameFormat::detect(Path::new("team.csv")), NameFormat::CSV);
        assert_eq!(NameFormat::detect(Path::new("TEAM.CSV")), NameFormat::CSV);
        assert_eq!(NameFormat::detect(Path::new("team.tsv")), NameFormat::TSV);
        assert_eq!(NameFormat::detect(Path::new("team.txt")), NameFormat::Text);
        assert_eq!(NameFormat::detect(Path::new("team")), NameFormat::Text);
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(NameSource::from_arg(None), NameSource::Stdin);
        assert_eq!(NameSource::from_arg(Some(Path::new("-"))), NameSource::Stdin);
        assert_eq!(
            NameSource::from_arg(Some(Path::new("a.txt"))),
            NameSource::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn load_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "Alice\n\n  Bob  \n").unwrap();

        let names = NameSource::File(path).load(None).unwrap();
        assert_eq!(names.as_slice(), ["Alice", "Bob"]);
    }

    #[test]
    fn load_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.csv");
        fs::write(&path, "Alice,Bob\nCarol\n").unwrap();

        let names = NameSource::File(path).load(None).unwrap();
        assert_eq!(names.as_slice(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_name() {
        let names = parse("\u{feff}Alice\nBob\n", NameFormat::Text).unwrap();
        assert_eq!(names.as_slice(), ["Alice", "Bob"]);
    }

    #[test]
    fn forced_text_ignores_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.csv");
        fs::write(&path, "Alice,Bob\n").unwrap();

        let names = NameSource::File(path).load(Some(NameFormat::Text)).unwrap();
        assert_eq!(names.as_slice(), ["Alice,Bob"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = NameSource::File(PathBuf::from("/definitely/not/here.txt")).load(None);
        assert!(matches!(result, Err(NameSourceError::Read { .. })));
    }

    #[test]
    fn format_labels() {
        assert_eq!(NameFormat::Text.label(), "text");
        assert_eq!(NameFormat::CSV.label(), "csv");
        assert_eq!(NameFormat::TSV.label(), "tsv");
    }
}
