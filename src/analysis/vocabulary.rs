//! Term identifier assignment.

use ahash::AHashMap;

use crate::analysis::tokenizer::Tokenizer;
use crate::document::{Document, TermId};
use crate::error::Result;

/// Bidirectional mapping between term text and [`TermId`].
///
/// Identifiers are dense and handed out in first-seen order, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: AHashMap<String, TermId>,
    terms: Vec<String>,
}

/// A document looked up against a fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookedUp {
    /// Terms the vocabulary knows, as identifiers.
    pub document: Document,
    /// Tokens that have no identifier, in input order.
    pub unknown: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of `term`, assigning the next free one if it is new.
    pub fn get_or_insert(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), id);
        id
    }

    /// Identifier of `term`, if known.
    pub fn get(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Text of the term behind `id`, if assigned.
    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// Number of assigned identifiers.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no identifier has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Tokenize `text`, assigning identifiers to new terms.
    pub fn add_text(&mut self, tokenizer: &dyn Tokenizer, text: &str) -> Result<Document> {
        let ids = tokenizer
            .tokenize(text)?
            .map(|token| self.get_or_insert(&token.text))
            .collect();
        Ok(Document::new(ids))
    }

    /// Tokenize `text` without growing the vocabulary.
    pub fn lookup_text(&self, tokenizer: &dyn Tokenizer, text: &str) -> Result<LookedUp> {
        let mut looked_up = LookedUp::default();
        let mut ids = Vec::new();
        for token in tokenizer.tokenize(text)? {
            match self.get(&token.text) {
                Some(id) => ids.push(id),
                None => looked_up.unknown.push(token.text),
            }
        }
        looked_up.document = Document::new(ids);
        Ok(looked_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{TokenStream, WhitespaceTokenizer};
    use crate::error::Bm25Error;

    struct RejectingTokenizer;

    impl Tokenizer for RejectingTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            Err(Bm25Error::analysis(format!("cannot tokenize {text:?}")))
        }

        fn name(&self) -> &'static str {
            "rejecting"
        }
    }

    #[test]
    fn test_ids_in_first_seen_order() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.get_or_insert("call"), 0);
        assert_eq!(vocab.get_or_insert("me"), 1);
        assert_eq!(vocab.get_or_insert("call"), 0);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.term(1), Some("me"));
        assert_eq!(vocab.term(2), None);
    }

    #[test]
    fn test_add_text() {
        let tokenizer = WhitespaceTokenizer::new();
        let mut vocab = Vocabulary::new();
        let doc = vocab.add_text(&tokenizer, "Call me Ishmael . Call").unwrap();
        assert_eq!(doc.terms(), &[0, 1, 2, 3, 0]);
        assert_eq!(vocab.get("ishmael"), Some(2));
    }

    #[test]
    fn test_lookup_text_reports_unknown_tokens() {
        let tokenizer = WhitespaceTokenizer::new();
        let mut vocab = Vocabulary::new();
        vocab.add_text(&tokenizer, "call me ishmael").unwrap();

        let looked_up = vocab.lookup_text(&tokenizer, "Ishmael whale me").unwrap();
        assert_eq!(looked_up.document.terms(), &[2, 1]);
        assert_eq!(looked_up.unknown, vec!["whale".to_string()]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_tokenizer_errors_propagate() {
        let mut vocab = Vocabulary::new();
        assert!(matches!(
            vocab.add_text(&RejectingTokenizer, "call me"),
            Err(Bm25Error::Analysis(_))
        ));
        assert!(vocab.is_empty());
        assert!(vocab.lookup_text(&RejectingTokenizer, "call").is_err());
    }
}
