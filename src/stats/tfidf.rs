//! In-memory term statistics builder.

use ahash::AHashMap;
use log::debug;

use crate::document::{LengthMode, TermId, TermIds, bag_of_words_into};
use crate::stats::CorpusStatistics;

/// Accumulates term frequencies, document frequencies and corpus length
/// over added documents, then derives inverse document frequencies.
///
/// IDF is only refreshed by [`TfIdf::calculate_idf`]; documents added
/// afterwards are counted in the aggregates but leave IDF stale until the
/// next call.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    /// Corpus-scoped frequency weight per term.
    term_frequency: AHashMap<TermId, f64>,
    /// Number of documents containing each term.
    document_frequency: AHashMap<TermId, u64>,
    /// Inverse document frequency per term.
    idf: AHashMap<TermId, f64>,
    /// Sum of all added document lengths.
    total_length: u64,
    /// Number of added documents.
    document_count: u64,
    /// How lengths and term frequencies are counted.
    length_mode: LengthMode,
    /// Scratch buffer for per-document bag-of-words.
    scratch: Vec<TermId>,
}

impl TfIdf {
    /// Create an empty builder counting every term occurrence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given length mode.
    ///
    /// With [`LengthMode::DistinctTerms`] each document contributes its
    /// distinct term count to the corpus length and each of its distinct
    /// terms once to the term frequency weight.
    pub fn with_length_mode(length_mode: LengthMode) -> Self {
        TfIdf {
            length_mode,
            ..Default::default()
        }
    }

    /// Build statistics from a whole corpus and compute IDF.
    pub fn from_documents<I, D>(length_mode: LengthMode, documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: TermIds,
    {
        let mut stats = Self::with_length_mode(length_mode);
        for doc in documents {
            stats.add(&doc);
        }
        stats.calculate_idf();
        stats
    }

    /// Add one document to the statistics.
    pub fn add<D: TermIds + ?Sized>(&mut self, doc: &D) {
        let terms = doc.term_ids();
        bag_of_words_into(terms, &mut self.scratch);

        let counted: &[TermId] = match self.length_mode {
            LengthMode::Occurrences => terms,
            LengthMode::DistinctTerms => &self.scratch,
        };
        for &term in counted {
            *self.term_frequency.entry(term).or_insert(0.0) += 1.0;
        }
        for &term in &self.scratch {
            *self.document_frequency.entry(term).or_insert(0) += 1;
        }

        self.total_length += self.length_mode.measure(terms, &self.scratch) as u64;
        self.document_count += 1;
    }

    /// Recompute IDF for every known term.
    ///
    /// `idf(t) = ln(N / df(t))`, so a term present in every document gets
    /// an IDF of zero.
    pub fn calculate_idf(&mut self) {
        let docs = self.document_count as f64;
        self.idf.clear();
        self.idf.reserve(self.document_frequency.len());
        for (&term, &df) in self.document_frequency.iter() {
            self.idf.insert(term, (docs / df as f64).ln());
        }

        debug!(
            "computed idf for {} terms over {} documents",
            self.idf.len(),
            self.document_count
        );
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: TermId) -> Option<u64> {
        self.document_frequency.get(&term).copied()
    }

    /// Number of distinct terms seen so far.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }

    /// The length mode these statistics were built with.
    pub fn length_mode(&self) -> LengthMode {
        self.length_mode
    }
}

impl CorpusStatistics for TfIdf {
    fn term_frequency(&self, term: TermId) -> Option<f64> {
        self.term_frequency.get(&term).copied()
    }

    fn inverse_document_frequency(&self, term: TermId) -> Option<f64> {
        self.idf.get(&term).copied()
    }

    fn total_length(&self) -> u64 {
        self.total_length
    }

    fn document_count(&self) -> u64 {
        self.document_count
    }

    fn length_mode(&self) -> Option<LengthMode> {
        Some(self.length_mode)
    }
}
