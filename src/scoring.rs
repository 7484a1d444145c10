//! BM25 scoring of candidate documents against a query.

pub mod bm25;
pub mod intersection;
pub mod result;

pub use bm25::{Bm25Config, Bm25Scorer, score};
pub use intersection::{IntersectionBuffer, Overlap};
pub use result::{DocScore, DocScores};
