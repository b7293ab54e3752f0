//! Command line argument parsing for Shingler CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Shingler - adds shingles of adjacent terms to a query tree
#[derive(Parser, Debug, Clone)]
#[command(name = "shingler")]
#[command(about = "Adds shingles of adjacent terms to a query tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShinglerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShinglerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add shingles to a query
    Rewrite(RewriteArgs),
}

/// Arguments for rewriting a query
#[derive(Parser, Debug, Clone)]
pub struct RewriteArgs {
    /// Query tokens, each `value` or `field:value`; a trailing `*` marks the
    /// term as generated
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Query document file (JSON), `-` reads from stdin
    #[arg(short, long, value_name = "QUERY_FILE", conflicts_with = "tokens")]
    pub input: Option<PathBuf>,

    /// Rewriter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Use generated terms as shingle sources
    #[arg(long)]
    pub accept_generated_terms: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = ShinglerArgs::try_parse_from(["shingler", "rewrite", "a"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = ShinglerArgs::try_parse_from(["shingler", "-vv", "rewrite", "a"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            ShinglerArgs::try_parse_from(["shingler", "--quiet", "-vvv", "rewrite", "a"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ShinglerArgs::try_parse_from(["shingler", "--format", "json", "rewrite", "a"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        let args = ShinglerArgs::try_parse_from(["shingler", "rewrite", "a"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_rewrite_args() {
        let args = ShinglerArgs::try_parse_from([
            "shingler",
            "rewrite",
            "f1:cde",
            "ajk*",
            "--config",
            "shingle.json",
            "--accept-generated-terms",
        ])
        .unwrap();

        let Command::Rewrite(rewrite_args) = args.command;
        assert_eq!(rewrite_args.tokens, vec!["f1:cde", "ajk*"]);
        assert_eq!(rewrite_args.config, Some(PathBuf::from("shingle.json")));
        assert!(rewrite_args.accept_generated_terms);
        assert!(rewrite_args.input.is_none());
    }

    #[test]
    fn test_input_conflicts_with_tokens() {
        let result =
            ShinglerArgs::try_parse_from(["shingler", "rewrite", "a", "--input", "query.json"]);
        assert!(result.is_err());
    }
}
