//! Corpus-wide term statistics consumed by the scorer.
//!
//! The scorer only ever reads statistics through [`CorpusStatistics`], so
//! any index that can answer per-term weight lookups and the two corpus
//! aggregates can be scored against. [`TfIdf`] is the in-memory builder
//! shipped with this crate.

pub mod tfidf;

pub use tfidf::TfIdf;

use crate::document::{LengthMode, TermId};
use crate::error::{Bm25Error, Result};

/// Read-only view of corpus statistics.
///
/// Lookups return `None` for identifiers the corpus never saw.
pub trait CorpusStatistics {
    /// Corpus-scoped frequency weight of a term.
    fn term_frequency(&self, term: TermId) -> Option<f64>;

    /// Precomputed inverse document frequency of a term.
    fn inverse_document_frequency(&self, term: TermId) -> Option<f64>;

    /// Sum of the lengths of every document that contributed.
    fn total_length(&self) -> u64;

    /// Number of documents that contributed.
    fn document_count(&self) -> u64;

    /// How document lengths were measured, when the backend knows.
    ///
    /// Scorers compare it with their own mode and warn on a mismatch.
    fn length_mode(&self) -> Option<LengthMode> {
        None
    }

    /// Average document length, `total_length / document_count`.
    ///
    /// Fails when no document contributed. A corpus of empty documents has
    /// an average length of zero.
    fn average_document_length(&self) -> Result<f64> {
        let docs = self.document_count();
        if docs == 0 {
            return Err(Bm25Error::invalid_statistics(
                "document count is zero, average document length is undefined",
            ));
        }

        Ok(self.total_length() as f64 / docs as f64)
    }
}

impl<S: CorpusStatistics + ?Sized> CorpusStatistics for &S {
    fn term_frequency(&self, term: TermId) -> Option<f64> {
        (**self).term_frequency(term)
    }

    fn inverse_document_frequency(&self, term: TermId) -> Option<f64> {
        (**self).inverse_document_frequency(term)
    }

    fn total_length(&self) -> u64 {
        (**self).total_length()
    }

    fn document_count(&self) -> u64 {
        (**self).document_count()
    }

    fn length_mode(&self) -> Option<LengthMode> {
        (**self).length_mode()
    }
}

impl<S: CorpusStatistics + ?Sized> CorpusStatistics for std::sync::Arc<S> {
    fn term_frequency(&self, term: TermId) -> Option<f64> {
        (**self).term_frequency(term)
    }

    fn inverse_document_frequency(&self, term: TermId) -> Option<f64> {
        (**self).inverse_document_frequency(term)
    }

    fn total_length(&self) -> u64 {
        (**self).total_length()
    }

    fn document_count(&self) -> u64 {
        (**self).document_count()
    }

    fn length_mode(&self) -> Option<LengthMode> {
        (**self).length_mode()
    }
}
