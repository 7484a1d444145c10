//! Text analysis for building documents from raw text.
//!
//! Scoring works on term identifiers only. This module is the small
//! front end that turns text into tokens ([`tokenizer`]) and tokens into
//! identifiers ([`vocabulary`]), enough to drive the command line tool and
//! to reproduce scoring runs from plain text corpora.

pub mod tokenizer;
pub mod vocabulary;

// Re-export commonly used types
pub use tokenizer::*;
pub use vocabulary::*;
