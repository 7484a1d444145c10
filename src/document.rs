//! Bag-of-words documents over a shared term identifier space.
//!
//! A [`Document`] is a sequence of term occurrences. Order is kept but
//! carries no meaning for scoring; repeats do, since they count towards
//! the document length. Queries use the same representation.

use serde::{Deserialize, Serialize};

/// Identifier of a vocabulary term.
///
/// The same identifier denotes the same term in the query, every document
/// and the corpus statistics they are scored against.
pub type TermId = usize;

/// Read-only view of a sequence of term occurrences.
///
/// Implemented for [`Document`], slices and vectors so callers can score
/// whatever representation their indexing layer already produces.
pub trait TermIds {
    /// The term occurrences, repeats included.
    fn term_ids(&self) -> &[TermId];
}

impl TermIds for [TermId] {
    fn term_ids(&self) -> &[TermId] {
        self
    }
}

impl TermIds for Vec<TermId> {
    fn term_ids(&self) -> &[TermId] {
        self.as_slice()
    }
}

impl<const N: usize> TermIds for [TermId; N] {
    fn term_ids(&self) -> &[TermId] {
        self.as_slice()
    }
}

impl<T: TermIds + ?Sized> TermIds for &T {
    fn term_ids(&self) -> &[TermId] {
        (**self).term_ids()
    }
}

/// A retrievable unit, or a query, as a bag of term identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    terms: Vec<TermId>,
}

impl Document {
    /// Create a document from its term occurrences.
    pub fn new(terms: Vec<TermId>) -> Self {
        Document { terms }
    }

    /// The term occurrences in input order.
    pub fn terms(&self) -> &[TermId] {
        &self.terms
    }

    /// Number of term occurrences.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the document has no terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms.
    pub fn distinct_len(&self) -> usize {
        bag_of_words(&self.terms).len()
    }

    /// Consume the document, returning its term occurrences.
    pub fn into_terms(self) -> Vec<TermId> {
        self.terms
    }
}

impl TermIds for Document {
    fn term_ids(&self) -> &[TermId] {
        &self.terms
    }
}

impl From<Vec<TermId>> for Document {
    fn from(terms: Vec<TermId>) -> Self {
        Document::new(terms)
    }
}

impl FromIterator<TermId> for Document {
    fn from_iter<I: IntoIterator<Item = TermId>>(iter: I) -> Self {
        Document::new(iter.into_iter().collect())
    }
}

/// How the length of a document is measured.
///
/// The corpus statistics and the scorer must measure lengths the same way,
/// otherwise the average document length is meaningless to the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Every term occurrence counts, repeats included.
    #[default]
    Occurrences,
    /// Only distinct terms count.
    DistinctTerms,
}

impl LengthMode {
    /// Length of a document given its occurrences and its distinct terms.
    pub fn measure(&self, occurrences: &[TermId], distinct: &[TermId]) -> usize {
        match self {
            LengthMode::Occurrences => occurrences.len(),
            LengthMode::DistinctTerms => distinct.len(),
        }
    }

    /// Short lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            LengthMode::Occurrences => "occurrences",
            LengthMode::DistinctTerms => "distinct_terms",
        }
    }
}

/// Sorted, deduplicated term identifiers of `terms`.
pub fn bag_of_words(terms: &[TermId]) -> Vec<TermId> {
    let mut out = Vec::with_capacity(terms.len());
    bag_of_words_into(terms, &mut out);
    out
}

/// Like [`bag_of_words`], writing into a reusable buffer.
///
/// `out` is cleared first.
pub fn bag_of_words_into(terms: &[TermId], out: &mut Vec<TermId>) {
    out.clear();
    out.extend_from_slice(terms);
    out.sort_unstable();
    out.dedup();
}
