//! # Command-Line Interface
//!
//! The presentation layer: reads names, drives the engines, prints results.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Write a default `.lucky.toml` |
//! | `names` | Show the normalized name list |
//! | `draw` | Draw one or more winners, optionally with a spin animation |
//! | `group` | Split the names into random groups |
//! | `tui` | Interactive session with draw and grouping tabs |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! lucky --verbose draw names.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod spin;
mod names_cmd;
mod draw_cmd;
mod group_cmd;
mod tui;

pub use app::{Cli, Commands, InputArgs, run};
pub use output::{Output, OutputFormat};
