//! Command implementations for the bm25 CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::analysis::{Tokenizer, Vocabulary, WhitespaceTokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::{Document, LengthMode};
use crate::error::{Bm25Error, Result};
use crate::scoring::Bm25Scorer;
use crate::stats::{CorpusStatistics, TfIdf};

/// A text corpus loaded from a file, one document per non-blank line.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Original text of each document.
    pub texts: Vec<String>,
    /// 1-based line number of each document.
    pub lines: Vec<usize>,
    /// Term identifiers of each document.
    pub documents: Vec<Document>,
    /// Vocabulary shared by documents and queries.
    pub vocabulary: Vocabulary,
}

impl Corpus {
    /// Tokenize every non-blank line of `path`.
    pub fn load<P: AsRef<Path>>(path: P, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut corpus = Corpus {
            texts: Vec::new(),
            lines: Vec::new(),
            documents: Vec::new(),
            vocabulary: Vocabulary::new(),
        };

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let document = corpus.vocabulary.add_text(tokenizer, &line)?;
            corpus.documents.push(document);
            corpus.lines.push(line_num + 1);
            corpus.texts.push(line);
        }

        info!(
            "loaded {} documents with {} distinct terms from {}",
            corpus.documents.len(),
            corpus.vocabulary.len(),
            path.as_ref().display()
        );

        Ok(corpus)
    }

    /// Corpus statistics measured with `length_mode`.
    pub fn statistics(&self, length_mode: LengthMode) -> TfIdf {
        TfIdf::from_documents(length_mode, &self.documents)
    }
}

/// Execute a CLI command.
pub fn execute_command(args: Bm25Args) -> Result<()> {
    match &args.command {
        Command::Score(score_args) => {
            let report = score_corpus(score_args)?;
            output_result("Scoring finished", &report, &args)
        }
        Command::Stats(stats_args) => {
            let report = corpus_stats(stats_args)?;
            output_result("Corpus statistics", &report, &args)
        }
    }
}

/// Score every document of the corpus against the query.
pub fn score_corpus(args: &ScoreArgs) -> Result<ScoreReport> {
    let config = args.config();
    config.validate()?;

    let tokenizer = WhitespaceTokenizer::new();
    let corpus = Corpus::load(&args.corpus, &tokenizer)?;
    let stats = corpus.statistics(config.length_mode);

    let looked_up = corpus.vocabulary.lookup_text(&tokenizer, &args.query)?;
    if looked_up.document.is_empty() && looked_up.unknown.is_empty() {
        return Err(Bm25Error::analysis(format!(
            "query {:?} contains no terms",
            args.query
        )));
    }
    if !looked_up.unknown.is_empty() {
        warn!(
            "query terms not in corpus vocabulary: {}",
            looked_up.unknown.join(", ")
        );
    }

    let start_time = Instant::now();
    let scorer = Bm25Scorer::new(config);
    let mut scores = if args.parallel {
        scorer.score_parallel(&stats, &looked_up.document, &corpus.documents)?
    } else {
        scorer.score(&stats, &looked_up.document, &corpus.documents)?
    };
    let duration = start_time.elapsed();

    let matching_documents = scores.iter().filter(|s| s.score > 0.0).count();
    if !args.keep_zero {
        scores.retain_matches();
    }

    let results = scores
        .top_k(args.limit)
        .into_iter()
        .enumerate()
        .map(|(rank, s)| RankedDocument {
            rank: rank + 1,
            id: s.id,
            line: corpus.lines[s.id],
            score: s.score,
            text: corpus.texts[s.id].clone(),
        })
        .collect();

    Ok(ScoreReport {
        query: args.query.clone(),
        query_terms: looked_up.document.len(),
        unknown_terms: looked_up.unknown,
        k1: config.k1,
        b: config.b,
        length_mode: config.length_mode.name().to_string(),
        total_documents: corpus.documents.len(),
        matching_documents,
        results,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Summarize the corpus statistics.
pub fn corpus_stats(args: &StatsArgs) -> Result<CorpusReport> {
    let length_mode = LengthMode::from(args.length_mode);
    let tokenizer = WhitespaceTokenizer::new();
    let corpus = Corpus::load(&args.corpus, &tokenizer)?;
    let stats = corpus.statistics(length_mode);

    Ok(CorpusReport {
        path: args.corpus.to_string_lossy().to_string(),
        length_mode: length_mode.name().to_string(),
        document_count: stats.document_count(),
        total_length: stats.total_length(),
        average_length: stats.average_document_length().ok(),
        vocabulary_size: stats.vocabulary_size(),
    })
}
