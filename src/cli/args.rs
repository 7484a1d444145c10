//! Command line argument parsing for the bm25 CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::document::LengthMode;
use crate::scoring::Bm25Config;

/// bm25 - rank the lines of a text corpus against a query
#[derive(Parser, Debug, Clone)]
#[command(name = "bm25")]
#[command(about = "Rank the documents of a text corpus against a query with BM25")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Bm25Args {
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

impl Bm25Args {
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
    /// Score every document of a corpus against a query
    Score(ScoreArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Score(_) => "score",
            Command::Stats(_) => "stats",
        }
    }

    /// Corpus file the subcommand reads.
    pub fn corpus(&self) -> &Path {
        match self {
            Command::Score(args) => &args.corpus,
            Command::Stats(args) => &args.corpus,
        }
    }
}

/// Arguments for scoring a corpus
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Term frequency saturation
    #[arg(long, env = "BM25_K1", default_value_t = 1.2)]
    pub k1: f64,

    /// Document length normalization
    #[arg(long, env = "BM25_B", default_value_t = 0.75)]
    pub b: f64,

    /// How document lengths are measured
    #[arg(long, value_enum, default_value = "occurrences")]
    pub length_mode: LengthModeArg,

    /// Maximum number of results to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Score documents on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Also show documents scoring zero
    #[arg(long)]
    pub keep_zero: bool,
}

impl ScoreArgs {
    /// Scorer configuration built from the arguments.
    pub fn config(&self) -> Bm25Config {
        Bm25Config::new(self.k1, self.b).with_length_mode(self.length_mode.into())
    }
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// How document lengths are measured
    #[arg(long, value_enum, default_value = "occurrences")]
    pub length_mode: LengthModeArg,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Document length measures selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthModeArg {
    /// Count every term occurrence
    Occurrences,
    /// Count distinct terms only
    DistinctTerms,
}

impl From<LengthModeArg> for LengthMode {
    fn from(arg: LengthModeArg) -> Self {
        match arg {
            LengthModeArg::Occurrences => LengthMode::Occurrences,
            LengthModeArg::DistinctTerms => LengthMode::DistinctTerms,
        }
    }
}
