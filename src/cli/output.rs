//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{Bm25Args, OutputFormat};
use crate::error::Result;

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    /// 1-based rank.
    pub rank: usize,
    /// 0-based position among the corpus documents.
    pub id: usize,
    /// 1-based line number in the corpus file.
    pub line: usize,
    /// BM25 score.
    pub score: f64,
    /// Original document text.
    pub text: String,
}

/// Result structure for scoring a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub query: String,
    pub query_terms: usize,
    pub unknown_terms: Vec<String>,
    pub k1: f64,
    pub b: f64,
    pub length_mode: String,
    pub total_documents: usize,
    pub matching_documents: usize,
    pub results: Vec<RankedDocument>,
    pub duration_ms: u64,
}

/// Corpus statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    pub path: String,
    pub length_mode: String,
    pub document_count: u64,
    pub total_length: u64,
    pub average_length: Option<f64>,
    pub vocabulary_size: usize,
}

/// Human-readable rendering of a report.
pub trait HumanOutput {
    /// Print the report to stdout.
    fn print_human(&self);
}

impl HumanOutput for ScoreReport {
    fn print_human(&self) {
        println!("Results for {:?}:", self.query);
        println!("═══════════════");

        if !self.unknown_terms.is_empty() {
            println!("Ignored unknown terms: {}", self.unknown_terms.join(", "));
        }

        for doc in &self.results {
            println!();
            println!("Result {}: (Score: {:.3})", doc.rank, doc.score);
            println!("─────────────");
            println!("ID   : {}", doc.id);
            println!("Line : {}", doc.line);
            println!("Doc  : {:?}", doc.text);
        }

        println!();
        println!(
            "Matching documents: {} of {}",
            self.matching_documents, self.total_documents
        );
        println!(
            "Parameters: k1={} b={} length={}",
            self.k1, self.b, self.length_mode
        );
        println!("Scoring time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for CorpusReport {
    fn print_human(&self) {
        println!("Corpus Statistics:");
        println!("═════════════════");
        println!("Path: {}", self.path);
        println!("Length mode: {}", self.length_mode);
        println!("Documents: {}", self.document_count);
        println!("Total length: {}", self.total_length);
        match self.average_length {
            Some(avg) => println!("Average length: {avg:.3}"),
            None => println!("Average length: undefined"),
        }
        println!("Vocabulary size: {}", self.vocabulary_size);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &Bm25Args) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(result, args.pretty)?);
            Ok(())
        }
    }
}

/// Serialize a result as JSON.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
