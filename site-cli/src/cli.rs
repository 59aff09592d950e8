//! Command-line arguments for the `site` binary.
//!
//! Developed by The Site Authors (c)2026

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "site")]
#[command(about = "Build and inspect the static home page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the rendered page to <OUT>/index.html
    Build {
        /// Path to site.toml (defaults to ./site.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the rendered page to stdout
    Render {
        /// Path to site.toml (defaults to ./site.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print only the home page container, without <html>/<head>
        #[arg(long)]
        fragment: bool,
    },
    /// Print the resolved design tokens
    Tokens {
        /// Path to site.toml (defaults to ./site.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = TokenFormat::Css)]
        format: TokenFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    Css,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_defaults() {
        let cli = Cli::try_parse_from(["site", "build"]).expect("parse");
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Command::Build { config, out } => {
                assert!(config.is_none());
                assert_eq!(out, PathBuf::from("dist"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_tokens_format() {
        let cli = Cli::try_parse_from(["site", "tokens", "--format", "json", "--log-level", "warn"])
            .expect("parse");
        assert_eq!(cli.log_level, "warn");
        assert!(matches!(
            cli.command,
            Command::Tokens {
                format: TokenFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["site", "tokens", "--format", "yaml"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
