//! Score results.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Score of the document at position `id` of the scored list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocScore {
    /// 0-based position of the document in the input list.
    pub id: usize,
    /// BM25 score.
    pub score: f64,
}

impl DocScore {
    /// Create a new score result.
    pub fn new(id: usize, score: f64) -> Self {
        DocScore { id, score }
    }
}

/// One [`DocScore`] per scored document.
///
/// The scorer emits these in input order. Ranking is up to the caller, see
/// [`DocScores::sort_by_score_desc`] and [`DocScores::top_k`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocScores(Vec<DocScore>);

impl DocScores {
    /// Wrap an existing list of scores.
    pub fn new(scores: Vec<DocScore>) -> Self {
        DocScores(scores)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no results.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Result at position `index`.
    pub fn get(&self, index: usize) -> Option<&DocScore> {
        self.0.get(index)
    }

    /// Iterate over the results in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocScore> {
        self.0.iter()
    }

    /// The results as a slice.
    pub fn as_slice(&self) -> &[DocScore] {
        &self.0
    }

    /// Document positions in current order.
    pub fn ids(&self) -> Vec<usize> {
        self.0.iter().map(|s| s.id).collect()
    }

    /// Scores in current order.
    pub fn scores(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.score).collect()
    }

    /// Sort by descending score.
    ///
    /// The sort is stable: equal scores keep their relative order, so ties
    /// stay in input order when sorting freshly scored results.
    pub fn sort_by_score_desc(&mut self) {
        self.0.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    /// The `k` best results, highest score first.
    pub fn top_k(mut self, k: usize) -> DocScores {
        self.sort_by_score_desc();
        self.0.truncate(k);
        self
    }

    /// Drop results scoring exactly zero.
    pub fn retain_matches(&mut self) {
        self.0.retain(|s| s.score != 0.0);
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<DocScore> {
        self.0
    }
}

impl Index<usize> for DocScores {
    type Output = DocScore;

    fn index(&self, index: usize) -> &DocScore {
        &self.0[index]
    }
}

impl FromIterator<DocScore> for DocScores {
    fn from_iter<I: IntoIterator<Item = DocScore>>(iter: I) -> Self {
        DocScores(iter.into_iter().collect())
    }
}

impl IntoIterator for DocScores {
    type Item = DocScore;
    type IntoIter = std::vec::IntoIter<DocScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocScores {
    type Item = &'a DocScore;
    type IntoIter = std::slice::Iter<'a, DocScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
