//! # bm25
//!
//! BM25 relevance scoring over precomputed corpus term statistics.
//!
//! Given how often each term occurs across a corpus and how informative it
//! is (its inverse document frequency), the scorer produces one score per
//! candidate document for a query. Documents and queries are bags of term
//! identifiers that share one identifier space with the statistics.
//!
//! ## Features
//!
//! - Stateless scorer, safe to share between threads
//! - Pluggable statistics through the [`stats::CorpusStatistics`] trait
//! - Caller-owned scratch buffers and a rayon-parallel entry point
//! - A small whitespace analysis front end and a command line tool
//!
//! ```
//! use bm25::analysis::{Vocabulary, WhitespaceTokenizer};
//! use bm25::scoring::score;
//! use bm25::stats::TfIdf;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let mut vocab = Vocabulary::new();
//! let docs = vec![
//!     vocab.add_text(&tokenizer, "Call me Ishmael .").unwrap(),
//!     vocab.add_text(&tokenizer, "I thought I would sail about a little .").unwrap(),
//! ];
//! let stats = TfIdf::from_documents(Default::default(), &docs);
//!
//! let query = vocab.lookup_text(&tokenizer, "ishmael").unwrap().document;
//! let scores = score(&stats, &query, &docs, 1.5, 0.75).unwrap();
//! assert!(scores[0].score > 0.0);
//! assert_eq!(scores[1].score, 0.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod scoring;
pub mod stats;

pub mod prelude {
    pub use crate::document::{Document, LengthMode, TermId, TermIds};
    pub use crate::error::{Bm25Error, Result};
    pub use crate::scoring::{Bm25Config, Bm25Scorer, DocScore, DocScores, score};
    pub use crate::stats::{CorpusStatistics, TfIdf};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
