//! The token record read by sniffs.

use crate::kind::TokenKind;
use lintok_source::Span;
use serde::{Deserialize, Serialize};

/// A single lexed token with its kind, raw text, and source location.
///
/// Structural tokens additionally carry auxiliary links (positional indices
/// into the owning [`TokenStream`](crate::TokenStream)) filled in by a
/// post-lex pass: brackets know their matching closer, documentation-comment
/// tokens know the bounds of their comment, and each doc-comment opener
/// records the positions of every `@tag` inside it, in document order.
/// Links are plain indices rather than references because the arena outlives
/// any individual scan and is never reordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The raw source text of this token.
    pub text: String,
    /// The 1-indexed line this token starts on.
    pub line: u32,
    /// The byte span covering this token's text.
    pub span: Span,
    /// For `(`/`{`/`[` tokens, the index of the matching closer.
    pub matching_closer: Option<usize>,
    /// For tokens inside a doc comment (and its closer), the opener's index.
    pub comment_opener: Option<usize>,
    /// For doc-comment openers, the index of the closing `*/`.
    pub comment_closer: Option<usize>,
    /// For doc-comment openers, the indices of every `@tag` token inside,
    /// in document order.
    pub comment_tags: Vec<usize>,
}

impl Token {
    /// Creates a new token with no structural links.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            span,
            matching_closer: None,
            comment_opener: None,
            comment_closer: None,
            comment_tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintok_source::FileId;

    #[test]
    fn new_token_has_no_links() {
        let span = Span::new(FileId::from_raw(0), 0, 3);
        let tok = Token::new(TokenKind::New, "new", 1, span);
        assert_eq!(tok.kind, TokenKind::New);
        assert_eq!(tok.text, "new");
        assert_eq!(tok.line, 1);
        assert!(tok.matching_closer.is_none());
        assert!(tok.comment_closer.is_none());
        assert!(tok.comment_tags.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let span = Span::new(FileId::from_raw(0), 4, 5);
        let mut tok = Token::new(TokenKind::OpenParen, "(", 1, span);
        tok.matching_closer = Some(9);
        let json = serde_json::to_string(&tok).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(tok, back);
    }
}
