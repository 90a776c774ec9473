//! Command line argument parsing for the orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Orthos - a dictionary-backed spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "A dictionary-backed spell checker built on a compressed prefix tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

impl OrthosArgs {
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
    /// Check query words against a dictionary
    Check(CheckArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking queries
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Input file (defaults to standard input)
    ///
    /// Without --dictionary the input follows the classic protocol: the
    /// first line is the dictionary size N, the next N non-blank lines
    /// are dictionary words, every following non-blank line is a query.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Load the dictionary from a word list file (one word per line);
    /// every non-blank input line then becomes a query
    #[arg(short, long, value_name = "WORD_FILE")]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input file (defaults to standard input)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Load the dictionary from a word list file instead of the
    /// count-prefixed input protocol
    #[arg(short, long, value_name = "WORD_FILE")]
    pub dictionary: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
