//! BM25 scorer.
//!
//! For every candidate document `d` and every distinct term `t` it shares
//! with the query:
//!
//! ```text
//! norm(d)    = 1 - b + b * len(d) / avg_len
//! contrib(t) = idf(t) * tf(t) * (k1 + 1) / (tf(t) + k1 * norm(d))
//! score(d)   = sum of contrib(t)
//! ```
//!
//! `tf` and `idf` are corpus-level weights read from [`CorpusStatistics`];
//! repeated occurrences in the query or the document do not multiply a
//! term's contribution.
//!
//! # Examples
//!
//! ```
//! use bm25::scoring::score;
//! use bm25::stats::TfIdf;
//!
//! let docs: Vec<Vec<usize>> = vec![vec![0, 1, 2], vec![1, 3], vec![4]];
//! let stats = TfIdf::from_documents(Default::default(), &docs);
//!
//! let scores = score(&stats, &vec![0usize], &docs, 1.5, 0.75).unwrap();
//! assert_eq!(scores.len(), 3);
//! assert!(scores[0].score > 0.0);
//! assert_eq!(scores[2].score, 0.0);
//! ```

use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::{LengthMode, TermId, TermIds, bag_of_words};
use crate::error::{Bm25Error, Result};
use crate::scoring::intersection::IntersectionBuffer;
use crate::scoring::result::{DocScore, DocScores};
use crate::stats::CorpusStatistics;

/// Configuration for the BM25 scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Config {
    /// Term frequency saturation, usually between 1.2 and 2.0.
    pub k1: f64,

    /// Document length normalization strength, usually around 0.75.
    pub b: f64,

    /// How document lengths are measured. Must match the statistics.
    #[serde(default)]
    pub length_mode: LengthMode,
}

impl Default for Bm25Config {
    fn default() -> Self {
        Bm25Config {
            k1: 1.2,
            b: 0.75,
            length_mode: LengthMode::Occurrences,
        }
    }
}

impl Bm25Config {
    /// Create a configuration with the given parameters.
    pub fn new(k1: f64, b: f64) -> Self {
        Bm25Config {
            k1,
            b,
            ..Default::default()
        }
    }

    /// Set the k1 parameter.
    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    /// Set the b parameter.
    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    /// Set the length mode.
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Check the parameters against their meaningful ranges.
    ///
    /// The scorer does not call this; out-of-range values still produce a
    /// result. Front ends use it to reject caller mistakes early.
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(Bm25Error::invalid_argument(format!(
                "k1 must be a finite non-negative number, got {}",
                self.k1
            )));
        }
        if !self.b.is_finite() || !(0.0..=1.0).contains(&self.b) {
            return Err(Bm25Error::invalid_argument(format!(
                "b must be within [0, 1], got {}",
                self.b
            )));
        }
        Ok(())
    }
}

/// Stateless BM25 scorer.
///
/// Holds only its configuration, so one scorer can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Bm25Scorer {
    config: Bm25Config,
}

impl Bm25Scorer {
    /// Create a new scorer.
    pub fn new(config: Bm25Config) -> Self {
        Bm25Scorer { config }
    }

    /// The scorer configuration.
    pub fn config(&self) -> &Bm25Config {
        &self.config
    }

    /// Score every document against `query`.
    ///
    /// Returns one result per document, in input order. Fails if the
    /// statistics have no average document length.
    pub fn score<S, Q, D>(&self, stats: &S, query: &Q, documents: &[D]) -> Result<DocScores>
    where
        S: CorpusStatistics + ?Sized,
        Q: TermIds + ?Sized,
        D: TermIds,
    {
        let mut buffer = IntersectionBuffer::new();
        self.score_with_buffer(stats, query, documents, &mut buffer)
    }

    /// Like [`Bm25Scorer::score`], reusing a caller-owned buffer.
    pub fn score_with_buffer<S, Q, D>(
        &self,
        stats: &S,
        query: &Q,
        documents: &[D],
        buffer: &mut IntersectionBuffer,
    ) -> Result<DocScores>
    where
        S: CorpusStatistics + ?Sized,
        Q: TermIds + ?Sized,
        D: TermIds,
    {
        let average_length = stats.average_document_length()?;
        self.check_length_mode(stats);
        let query_bag = bag_of_words(query.term_ids());

        let scores: DocScores = documents
            .iter()
            .enumerate()
            .map(|(id, doc)| {
                let score =
                    self.score_document(stats, &query_bag, doc.term_ids(), average_length, buffer);
                DocScore::new(id, score)
            })
            .collect();

        debug!(
            "scored {} documents against {} distinct query terms (avg length {:.3})",
            scores.len(),
            query_bag.len(),
            average_length
        );

        Ok(scores)
    }

    /// Like [`Bm25Scorer::score`], spreading documents over the rayon pool.
    ///
    /// Each worker owns its intersection buffer. The result is identical to
    /// the sequential one, order included.
    pub fn score_parallel<S, Q, D>(
        &self,
        stats: &S,
        query: &Q,
        documents: &[D],
    ) -> Result<DocScores>
    where
        S: CorpusStatistics + Sync + ?Sized,
        Q: TermIds + ?Sized,
        D: TermIds + Sync,
    {
        let average_length = stats.average_document_length()?;
        self.check_length_mode(stats);
        let query_bag = bag_of_words(query.term_ids());

        let scores: Vec<DocScore> = documents
            .par_iter()
            .enumerate()
            .map_init(IntersectionBuffer::new, |buffer, (id, doc)| {
                let score =
                    self.score_document(stats, &query_bag, doc.term_ids(), average_length, buffer);
                DocScore::new(id, score)
            })
            .collect();

        debug!(
            "scored {} documents in parallel against {} distinct query terms",
            scores.len(),
            query_bag.len()
        );

        Ok(DocScores::new(scores))
    }

    /// Score a single document.
    ///
    /// `query_bag` must be sorted and deduplicated. `average_length` is the
    /// corpus average document length.
    pub fn score_document<S>(
        &self,
        stats: &S,
        query_bag: &[TermId],
        document: &[TermId],
        average_length: f64,
        buffer: &mut IntersectionBuffer,
    ) -> f64
    where
        S: CorpusStatistics + ?Sized,
    {
        if query_bag.is_empty() || document.is_empty() {
            return 0.0;
        }

        let overlap = buffer.intersect(query_bag, document);
        if overlap.common.is_empty() {
            return 0.0;
        }

        let length = self.config.length_mode.measure(document, overlap.distinct) as f64;
        let norm = self.length_norm(length, average_length);

        overlap
            .common
            .iter()
            .map(|&term| self.term_contribution(stats, term, norm))
            .sum()
    }

    /// Length normalization factor of a document.
    fn length_norm(&self, length: f64, average_length: f64) -> f64 {
        let b = self.config.b;
        // b = 0 disables normalization, also over an all-empty corpus
        if b == 0.0 {
            return 1.0;
        }
        1.0 - b + b * length / average_length
    }

    /// Warn when the statistics were measured with another length mode.
    fn check_length_mode<S>(&self, stats: &S)
    where
        S: CorpusStatistics + ?Sized,
    {
        if let Some(mode) = stats.length_mode()
            && mode != self.config.length_mode
        {
            warn!(
                "statistics measure lengths as {} but the scorer uses {}",
                mode.name(),
                self.config.length_mode.name()
            );
        }
    }

    /// Contribution of one shared term given the document's length norm.
    ///
    /// Terms missing from the statistics contribute zero.
    fn term_contribution<S>(&self, stats: &S, term: TermId, norm: f64) -> f64
    where
        S: CorpusStatistics + ?Sized,
    {
        let (Some(tf), Some(idf)) = (
            stats.term_frequency(term),
            stats.inverse_document_frequency(term),
        ) else {
            trace!("term {term} has no corpus statistics, contributing zero");
            return 0.0;
        };

        let k1 = self.config.k1;
        idf * (tf * (k1 + 1.0)) / (tf + k1 * norm)
    }
}

/// Score `documents` against `query` with BM25 parameters `k1` and `b`.
///
/// Document lengths are measured in term occurrences.
pub fn score<S, Q, D>(stats: &S, query: &Q, documents: &[D], k1: f64, b: f64) -> Result<DocScores>
where
    S: CorpusStatistics + ?Sized,
    Q: TermIds + ?Sized,
    D: TermIds,
{
    Bm25Scorer::new(Bm25Config::new(k1, b)).score(stats, query, documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::stats::TfIdf;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(vec![0, 1, 2]),
            Document::new(vec![1, 3, 3, 3]),
            Document::new(vec![4, 5]),
            Document::new(vec![0, 4, 6, 7, 8, 9]),
        ]
    }

    fn query(terms: &[TermId]) -> Document {
        Document::new(terms.to_vec())
    }

    fn stats(docs: &[Document]) -> TfIdf {
        TfIdf::from_documents(LengthMode::Occurrences, docs)
    }

    #[test]
    fn test_config_defaults() {
        let config = Bm25Config::default();
        assert_eq!(config.k1, 1.2);
        assert_eq!(config.b, 0.75);
        assert_eq!(config.length_mode, LengthMode::Occurrences);

        let config = Bm25Config::new(1.5, 0.5).with_length_mode(LengthMode::DistinctTerms);
        assert_eq!(config.k1, 1.5);
        assert_eq!(config.b, 0.5);
        assert_eq!(config.length_mode, LengthMode::DistinctTerms);
    }

    #[test]
    fn test_config_validate() {
        assert!(Bm25Config::default().validate().is_ok());
        assert!(Bm25Config::default().with_k1(-0.1).validate().is_err());
        assert!(Bm25Config::default().with_k1(f64::NAN).validate().is_err());
        assert!(Bm25Config::default().with_b(1.5).validate().is_err());
        assert!(Bm25Config::default().with_b(0.0).validate().is_ok());
    }

    #[test]
    fn test_config_deserializes_without_length_mode() {
        let config: Bm25Config = serde_json::from_str(r#"{"k1":2.0,"b":0.5}"#).unwrap();
        assert_eq!(config, Bm25Config::new(2.0, 0.5));
    }

    #[test]
    fn test_single_term_matches_formula() {
        let docs = corpus();
        let stats = stats(&docs);
        let scores = score(&stats, &query(&[2]), &docs, 1.5, 0.75).unwrap();

        // term 2 occurs once in a corpus of 4 docs with 15 occurrences
        let avg = 15.0 / 4.0;
        let idf = 4.0f64.ln();
        let norm = 1.0 - 0.75 + 0.75 * 3.0 / avg;
        let expected = idf * (1.0 * 2.5) / (1.0 + 1.5 * norm);

        assert!((scores[0].score - expected).abs() < 1e-12);
        assert_eq!(scores[1].score, 0.0);
        assert_eq!(scores[2].score, 0.0);
        assert_eq!(scores[3].score, 0.0);
    }

    #[test]
    fn test_results_follow_input_order() {
        let docs = corpus();
        let stats = stats(&docs);
        let scores = score(&stats, &query(&[0, 4]), &docs, 1.2, 0.75).unwrap();
        assert_eq!(scores.ids(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_repeated_terms_count_once() {
        let docs = corpus();
        let stats = stats(&docs);
        let once = score(&stats, &query(&[3]), &docs, 1.2, 0.75).unwrap();
        let thrice = score(&stats, &query(&[3, 3, 3]), &docs, 1.2, 0.75).unwrap();
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_longer_document_scores_lower() {
        let docs = corpus();
        let stats = stats(&docs);
        // term 0 has the same weights in doc 0 (len 3) and doc 3 (len 6)
        let scores = score(&stats, &query(&[0]), &docs, 1.2, 0.75).unwrap();
        assert!(scores[0].score > scores[3].score);
        assert!(scores[3].score > 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        let docs = corpus();
        let stats = stats(&docs);

        let none: Vec<Document> = Vec::new();
        assert!(score(&stats, &query(&[0]), &none, 1.2, 0.75).unwrap().is_empty());

        let scores = score(&stats, &Document::default(), &docs, 1.2, 0.75).unwrap();
        assert_eq!(scores.len(), docs.len());
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_empty_statistics_fail() {
        let stats = TfIdf::new();
        let docs = corpus();
        let result = score(&stats, &query(&[0]), &docs, 1.2, 0.75);
        assert!(matches!(result, Err(Bm25Error::InvalidStatistics(_))));
    }

    #[test]
    fn test_unknown_terms_contribute_zero() {
        let docs = corpus();
        let stats = stats(&docs);
        let unseen = vec![Document::new(vec![42, 0])];

        let with_unknown = score(&stats, &query(&[0, 42]), &unseen, 1.2, 0.75).unwrap();
        let without = score(&stats, &query(&[0]), &unseen, 1.2, 0.75).unwrap();
        assert_eq!(with_unknown, without);

        let only_unknown = score(&stats, &query(&[42]), &unseen, 1.2, 0.75).unwrap();
        assert_eq!(only_unknown[0].score, 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let docs = corpus();
        let stats = stats(&docs);
        let scorer = Bm25Scorer::new(Bm25Config::new(1.5, 0.75));

        let sequential = scorer.score(&stats, &query(&[0, 1, 4]), &docs).unwrap();
        let parallel = scorer.score_parallel(&stats, &query(&[0, 1, 4]), &docs).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_buffer_reused_across_calls() {
        let docs = corpus();
        let stats = stats(&docs);
        let scorer = Bm25Scorer::default();
        let mut buffer = IntersectionBuffer::new();

        let first = scorer
            .score_with_buffer(&stats, &query(&[1]), &docs, &mut buffer)
            .unwrap();
        let second = scorer
            .score_with_buffer(&stats, &query(&[1]), &docs, &mut buffer)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first, scorer.score(&stats, &query(&[1]), &docs).unwrap());
    }

    /// Single-threaded statistics that count their lookups.
    struct CountingStats {
        inner: TfIdf,
        lookups: std::cell::Cell<usize>,
    }

    impl CorpusStatistics for CountingStats {
        fn term_frequency(&self, term: TermId) -> Option<f64> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.term_frequency(term)
        }

        fn inverse_document_frequency(&self, term: TermId) -> Option<f64> {
            self.inner.inverse_document_frequency(term)
        }

        fn total_length(&self) -> u64 {
            self.inner.total_length()
        }

        fn document_count(&self) -> u64 {
            self.inner.document_count()
        }
    }

    #[test]
    fn test_sequential_scoring_accepts_non_sync_statistics() {
        let docs = corpus();
        let stats = CountingStats {
            inner: stats(&docs),
            lookups: std::cell::Cell::new(0),
        };

        let scores = score(&stats, &query(&[0, 4]), &docs, 1.2, 0.75).unwrap();
        assert_eq!(scores, score(&stats.inner, &query(&[0, 4]), &docs, 1.2, 0.75).unwrap());
        // one lookup per shared term: docs 0, 2 and 3 (twice)
        assert_eq!(stats.lookups.get(), 4);
    }

    #[test]
    fn test_mismatched_length_mode_uses_scorer_lengths() {
        let docs = corpus();
        let stats = TfIdf::from_documents(LengthMode::DistinctTerms, &docs);
        let scorer = Bm25Scorer::default();

        // average over 13 distinct slots, doc 1 measured as 4 occurrences
        let scores = scorer.score(&stats, &query(&[3]), &docs).unwrap();
        let avg = 13.0 / 4.0;
        let norm = 1.0 - 0.75 + 0.75 * 4.0 / avg;
        let expected = 4.0f64.ln() * (1.0 * 2.2) / (1.0 + 1.2 * norm);
        assert!((scores[1].score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_distinct_length_mode() {
        let docs = corpus();
        let stats = TfIdf::from_documents(LengthMode::DistinctTerms, &docs);
        let scorer =
            Bm25Scorer::new(Bm25Config::default().with_length_mode(LengthMode::DistinctTerms));

        // doc 1 has 4 occurrences but 2 distinct terms; corpus has 13 distinct slots
        let scores = scorer.score(&stats, &query(&[3]), &docs).unwrap();
        let avg = 13.0 / 4.0;
        let norm = 1.0 - 0.75 + 0.75 * 2.0 / avg;
        let expected = 4.0f64.ln() * (1.0 * 2.2) / (1.0 + 1.2 * norm);
        assert!((scores[1].score - expected).abs() < 1e-12);
    }
}
