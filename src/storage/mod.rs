//! # Storage Layer
//!
//! Everything that touches the filesystem: reading name lists and loading
//! configuration. Nothing about a draw or a grouping is ever persisted.
//!
//! ## Inputs
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Names | One per line | any file, or stdin |
//! | Names | CSV / TSV cells | `*.csv`, `*.tsv` |
//! | Config | TOML | `.lucky.toml` (local) or the platform config dir |
//!
//! ## Key Types
//!
//! - [`NameSource`] - Stdin or a file, read into a [`crate::domain::NameList`]
//! - [`Config`] - Layered settings for draws, groups and output

mod config;
mod source;

pub use config::{Config, ConfigError, DrawConfig, GroupConfig, OutputFormat, Settings, LOCAL_CONFIG_FILE};
pub use source::{parse, NameFormat, NameSource, NameSourceError};
