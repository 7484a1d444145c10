//! Tokenizer implementations for text analysis.
//!
//! # Examples
//!
//! ```
//! use bm25::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Call me Ishmael .").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[2].text, "ishmael");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single unit of text produced by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace, lowercasing by default.
///
/// Punctuation separated by whitespace comes through as its own token.
#[derive(Clone, Debug)]
pub struct WhitespaceTokenizer {
    lowercase: bool,
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        WhitespaceTokenizer { lowercase: true }
    }
}

impl WhitespaceTokenizer {
    /// Create a new lowercasing whitespace tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop the lowercasing step.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowercase = self.lowercase;
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| {
                if lowercase {
                    Token::new(word.to_lowercase(), position)
                } else {
                    Token::new(word, position)
                }
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
