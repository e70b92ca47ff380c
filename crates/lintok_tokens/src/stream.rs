//! The ordered, indexable token arena sniffs scan over.

use crate::kind::TokenKind;
use crate::token::Token;
use lintok_source::FileId;

/// An ordered sequence of tokens for one source file.
///
/// The stream exclusively owns its tokens for the duration of a scan; sniffs
/// hold only indices into it. Indices are stable until a fixer changeset
/// commits, after which the source must be re-tokenized before any further
/// scanning.
pub struct TokenStream {
    file: FileId,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates a stream from already-lexed tokens.
    pub fn new(file: FileId, tokens: Vec<Token>) -> Self {
        Self { file, tokens }
    }

    /// Returns the file this stream was lexed from.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Returns the number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`, or `None` past the end of the stream.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Returns all tokens as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the kind at `index`, or `None` past the end of the stream.
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    /// Finds the next token at or after `start` whose kind is in `kinds`.
    ///
    /// The search stops before `end` when given, otherwise at the end of the
    /// stream.
    pub fn find_next(
        &self,
        kinds: &[TokenKind],
        start: usize,
        end: Option<usize>,
    ) -> Option<usize> {
        let end = end.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (start..end).find(|&i| kinds.contains(&self.tokens[i].kind))
    }

    /// Finds the next token at or after `start` whose kind is NOT in `kinds`.
    ///
    /// This is the scanning primitive for "skip trivia" walks: pass the kinds
    /// to skip and receive the index of the first token of interest.
    pub fn find_next_not(
        &self,
        kinds: &[TokenKind],
        start: usize,
        end: Option<usize>,
    ) -> Option<usize> {
        let end = end.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (start..end).find(|&i| !kinds.contains(&self.tokens[i].kind))
    }

    /// Finds the closest token at or before `start` whose kind is NOT in `kinds`.
    pub fn find_prev_not(&self, kinds: &[TokenKind], start: usize) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let start = start.min(self.tokens.len() - 1);
        (0..=start).rev().find(|&i| !kinds.contains(&self.tokens[i].kind))
    }
}
