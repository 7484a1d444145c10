//! Query/document term overlap.

use crate::document::{TermId, bag_of_words_into};

/// Distinct terms of one document and the subset it shares with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap<'a> {
    /// Distinct terms of the document, sorted.
    pub distinct: &'a [TermId],
    /// Distinct terms present in both the query and the document, sorted.
    pub common: &'a [TermId],
}

/// Scratch space for computing overlaps, owned by the caller.
///
/// Reusing one buffer across documents and calls avoids an allocation per
/// document. Each call to [`IntersectionBuffer::intersect`] starts from a
/// clean state, so nothing leaks from one document to the next.
#[derive(Debug, Clone, Default)]
pub struct IntersectionBuffer {
    distinct: Vec<TermId>,
    common: Vec<TermId>,
}

impl IntersectionBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer sized for documents of about `capacity` terms.
    pub fn with_capacity(capacity: usize) -> Self {
        IntersectionBuffer {
            distinct: Vec::with_capacity(capacity),
            common: Vec::with_capacity(capacity),
        }
    }

    /// Overlap between `query_bag` and `document`.
    ///
    /// `query_bag` must be sorted and free of duplicates, as produced by
    /// [`crate::document::bag_of_words`]. `document` may be in any order
    /// and contain repeats.
    pub fn intersect(&mut self, query_bag: &[TermId], document: &[TermId]) -> Overlap<'_> {
        bag_of_words_into(document, &mut self.distinct);
        intersect_sorted(query_bag, &self.distinct, &mut self.common);

        Overlap {
            distinct: &self.distinct,
            common: &self.common,
        }
    }
}

/// Merge-intersect two sorted, deduplicated slices into `out`.
///
/// `out` is cleared first.
pub fn intersect_sorted(a: &[TermId], b: &[TermId], out: &mut Vec<TermId>) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
}
