//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{draw_cmd, group_cmd, names_cmd, tui};
use crate::domain::NameList;
use crate::storage::{Config, NameFormat, NameSource, Settings};

#[derive(Parser)]
#[command(name = "lucky")]
#[command(author, version, about = "Lucky draws and random groups from a list of names")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Use this config file instead of .lucky.toml / the global config
    #[arg(long, global = true, env = "LUCKY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed the random generator for a reproducible run
    #[arg(long, global = true, env = "LUCKY_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read names from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Name list file; `-` or omitted reads stdin
    pub file: Option<PathBuf>,

    /// Treat the input as CSV regardless of extension
    #[arg(long, conflicts_with = "text")]
    pub csv: bool,

    /// Treat the input as plain text, one name per line
    #[arg(long)]
    pub text: bool,
}

impl InputArgs {
    pub fn source(&self) -> NameSource {
        NameSource::from_arg(self.file.as_deref())
    }

    pub fn forced_format(&self) -> Option<NameFormat> {
        if self.csv {
            Some(NameFormat::CSV)
        } else if self.text {
            Some(NameFormat::Text)
        } else {
            None
        }
    }

    /// Reads the names, logging what was read
    pub fn load(&self, output: &Output) -> Result<NameList> {
        let source = self.source();
        let format = source.format(self.forced_format());
        output.verbose_ctx(
            "names",
            &format!("Reading {} as {}", source.describe(), format.label()),
        );

        let names = source.load(Some(format))?;
        output.verbose_ctx("names", &format!("Loaded {} names", names.len()));
        Ok(names)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .lucky.toml
    Init {
        /// Directory to write into (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the normalized name list
    Names {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Draw winners
    Draw {
        #[command(flatten)]
        input: InputArgs,

        /// Number of winners to draw in this session
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        /// Let a name win more than once
        #[arg(long, conflicts_with = "no_repeat")]
        allow_repeat: bool,

        /// Never let a name win twice (overrides config)
        #[arg(long)]
        no_repeat: bool,

        /// Show the spinning animation before each winner
        #[arg(long)]
        spin: bool,
    },

    /// Split the names into random groups
    Group {
        #[command(flatten)]
        input: InputArgs,

        /// Names per group; anything below 1 counts as 1
        #[arg(long, short = 's', allow_hyphen_values = true)]
        size: Option<String>,
    },

    /// Interactive draw and grouping session
    Tui {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Main entry point for the CLI
///
/// Failures are reported through [`Output::error`] in the resolved format
/// before being returned.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration");
    let format = cli
        .format
        .or_else(|| config.as_ref().ok().map(|c| c.settings.default_format.into()))
        .unwrap_or_default();
    let output = Output::new(format, cli.verbose);

    let result = config.and_then(|config| execute(cli, &config, &output));
    if let Err(e) = &result {
        output.error(&format!("{:#}", e));
    }
    result
}

fn execute(cli: Cli, config: &Config, output: &Output) -> Result<()> {
    output.verbose("Lucky Draw starting");
    match &config.path {
        Some(path) => output.verbose_ctx("config", &format!("Using {}", path.display())),
        None => output.verbose_ctx("config", "No config file found, using defaults"),
    }

    let settings: &Settings = &config.settings;

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Writing config into: {}", path.display()));
            let (config_path, created) = Config::init_local(&path)?;
            if created {
                output.success(&format!("Created {}", config_path.display()));
            } else {
                output.success(&format!("Config already exists at {}", config_path.display()));
            }
        }

        Commands::Names { input } => {
            let names = input.load(output)?;
            names_cmd::show(output, &names)?
        }

        Commands::Draw {
            input,
            count,
            allow_repeat,
            no_repeat,
            spin,
        } => {
            let names = input.load(output)?;
            let allow_repeat = match (allow_repeat, no_repeat) {
                (true, _) => true,
                (_, true) => false,
                _ => settings.draw.allow_repeat,
            };
            let options = draw_cmd::DrawOptions {
                count,
                allow_repeat,
                spin,
                seed: cli.seed,
            };
            draw_cmd::run(output, &settings.draw, names, &options)?
        }

        Commands::Group { input, size } => {
            let names = input.load(output)?;
            group_cmd::run(output, &settings.group, &names, size.as_deref(), cli.seed)?
        }

        Commands::Tui { input } => {
            output.verbose_ctx("tui", "Launching interactive session");
            tui::run(output, settings, &input, cli.seed)?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn csv_and_text_conflict() {
        let result = Cli::try_parse_from(["lucky", "names", "--csv", "--text"]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_group_size_is_accepted_by_parser() {
        let cli = Cli::try_parse_from(["lucky", "group", "--size", "-2"]).unwrap();
        match cli.command {
            Commands::Group { size, .. } => assert_eq!(size.as_deref(), Some("-2")),
            _ => panic!("expected group command"),
        }
    }

    #[test]
    fn forced_format_from_flags() {
        let input = InputArgs {
            file: None,
            csv: true,
            text: false,
        };
        assert_eq!(input.forced_format(), Some(NameFormat::CSV));
        assert_eq!(input.source(), NameSource::Stdin);
    }
}
