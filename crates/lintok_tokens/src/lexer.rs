//! Lexical analyzer for PHP-style source text.
//!
//! Converts source text into a [`TokenStream`], keeping whitespace and
//! comments as tokens and splitting documentation comments into their
//! opener/star/tag/string/whitespace/closer pieces. A post-lex pass fills in
//! the structural links: bracket matching and doc-comment spans.
//!
//! The lexer is deliberately lenient: it is a style checker's tokenizer, not
//! a compiler front end. Unterminated strings and comments run to the end of
//! the input, and characters with no dedicated kind become
//! [`TokenKind::Other`] tokens rather than errors.

use crate::kind::{lookup_keyword, TokenKind};
use crate::stream::TokenStream;
use crate::token::Token;
use lintok_source::{FileId, Span};

/// Lexes the given source text into a token stream.
///
/// Text outside `<?php ... ?>` regions is preserved as [`TokenKind::Other`]
/// tokens so that byte offsets always cover the whole input.
pub fn lex(source: &str, file: FileId) -> TokenStream {
    let mut lexer = Lexer {
        src: source,
        source: source.as_bytes(),
        pos: 0,
        line: 1,
        file,
        in_php: false,
        tokens: Vec::new(),
    };
    lexer.lex_all();
    let mut tokens = lexer.tokens;
    link_structure(&mut tokens);
    TokenStream::new(file, tokens)
}

struct Lexer<'a> {
    src: &'a str,
    source: &'a [u8],
    pos: usize,
    line: u32,
    file: FileId,
    in_php: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn lex_all(&mut self) {
        while self.pos < self.source.len() {
            if self.in_php {
                self.lex_php_token();
            } else {
                self.lex_inline_text();
            }
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> u8 {
        if self.pos < self.source.len() {
            self.source[self.pos]
        } else {
            0
        }
    }

    fn peek_at(&self, offset: usize) -> u8 {
        let idx = self.pos + offset;
        if idx < self.source.len() {
            self.source[idx]
        } else {
            0
        }
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.source[self.pos..].starts_with(prefix)
    }

    fn advance(&mut self) {
        if self.source[self.pos] == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, start_line: u32) {
        let span = Span::new(self.file, start as u32, self.pos as u32);
        self.tokens
            .push(Token::new(kind, &self.src[start..self.pos], start_line, span));
    }

    /// Lexes raw text outside PHP tags up to (and including) the next `<?php`.
    fn lex_inline_text(&mut self) {
        let start = self.pos;
        let start_line = self.line;
        while !self.at_end() && !self.starts_with(b"<?php") {
            self.advance();
        }
        if self.pos > start {
            self.push(TokenKind::Other, start, start_line);
        }
        if self.starts_with(b"<?php") {
            let tag_start = self.pos;
            let tag_line = self.line;
            self.advance_by(5);
            self.push(TokenKind::OpenTag, tag_start, tag_line);
            self.in_php = true;
        }
    }

    fn lex_php_token(&mut self) {
        let start = self.pos;
        let start_line = self.line;
        let b = self.peek();

        if b.is_ascii_whitespace() {
            while !self.at_end() && self.peek().is_ascii_whitespace() {
                self.advance();
            }
            self.push(TokenKind::Whitespace, start, start_line);
            return;
        }

        if b == b'?' && self.peek_at(1) == b'>' {
            self.advance_by(2);
            self.push(TokenKind::CloseTag, start, start_line);
            self.in_php = false;
            return;
        }

        if b == b'/' && self.peek_at(1) == b'/' {
            self.lex_line_comment(start, start_line);
            return;
        }

        if b == b'#' {
            self.lex_line_comment(start, start_line);
            return;
        }

        if self.starts_with(b"/**") && !self.starts_with(b"/**/") {
            self.lex_doc_comment();
            return;
        }

        if b == b'/' && self.peek_at(1) == b'*' {
            self.advance_by(2);
            while !self.at_end() && !self.starts_with(b"*/") {
                self.advance();
            }
            if !self.at_end() {
                self.advance_by(2);
            }
            self.push(TokenKind::BlockComment, start, start_line);
            return;
        }

        if b == b'$' && is_ident_start(self.peek_at(1)) {
            self.advance();
            while !self.at_end() && is_ident_char(self.peek()) {
                self.advance();
            }
            self.push(TokenKind::Variable, start, start_line);
            return;
        }

        if is_ident_start(b) {
            while !self.at_end() && is_ident_char(self.peek()) {
                self.advance();
            }
            let word = self.src[start..self.pos].to_ascii_lowercase();
            let kind = lookup_keyword(&word).unwrap_or(TokenKind::Ident);
            self.push(kind, start, start_line);
            return;
        }

        if b.is_ascii_digit() {
            while !self.at_end() && self.peek().is_ascii_digit() {
                self.advance();
            }
            if self.peek() == b'.' && self.peek_at(1).is_ascii_digit() {
                self.advance();
                while !self.at_end() && self.peek().is_ascii_digit() {
                    self.advance();
                }
            }
            self.push(TokenKind::Number, start, start_line);
            return;
        }

        if b == b'\'' || b == b'"' {
            self.lex_quoted_string(b, start, start_line);
            return;
        }

        let kind = match b {
            b'\\' => TokenKind::NsSeparator,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenBrace,
            b'}' => TokenKind::CloseBrace,
            b'[' => TokenKind::OpenShortArray,
            b']' => TokenKind::CloseShortArray,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            _ => TokenKind::Other,
        };
        self.advance();
        self.push(kind, start, start_line);
    }

    fn lex_line_comment(&mut self, start: usize, start_line: u32) {
        while !self.at_end() && self.peek() != b'\n' {
            self.advance();
        }
        self.push(TokenKind::LineComment, start, start_line);
    }

    fn lex_quoted_string(&mut self, quote: u8, start: usize, start_line: u32) {
        self.advance();
        while !self.at_end() {
            if self.peek() == b'\\' && self.pos + 1 < self.source.len() {
                self.advance_by(2);
                continue;
            }
            if self.peek() == quote {
                self.advance();
                break;
            }
            self.advance();
        }
        let kind = if quote == b'\'' {
            TokenKind::SingleQuotedString
        } else {
            TokenKind::DoubleQuotedString
        };
        self.push(kind, start, start_line);
    }

    /// Lexes a `/** ... */` documentation comment into its component tokens.
    fn lex_doc_comment(&mut self) {
        let start = self.pos;
        let start_line = self.line;
        self.advance_by(3);
        self.push(TokenKind::DocCommentOpen, start, start_line);

        while !self.at_end() {
            if self.starts_with(b"*/") {
                let close_start = self.pos;
                let close_line = self.line;
                self.advance_by(2);
                self.push(TokenKind::DocCommentClose, close_start, close_line);
                return;
            }

            let piece_start = self.pos;
            let piece_line = self.line;
            let b = self.peek();

            if b.is_ascii_whitespace() {
                while !self.at_end() && self.peek().is_ascii_whitespace() {
                    self.advance();
                }
                self.push(TokenKind::DocCommentWhitespace, piece_start, piece_line);
                continue;
            }

            if b == b'*' {
                self.advance();
                self.push(TokenKind::DocCommentStar, piece_start, piece_line);
                continue;
            }

            if b == b'@' && is_ident_start(self.peek_at(1)) {
                self.advance();
                while !self.at_end() && (is_ident_char(self.peek()) || self.peek() == b'-') {
                    self.advance();
                }
                self.push(TokenKind::DocCommentTag, piece_start, piece_line);
                continue;
            }

            // Free text: the rest of the line, not crossing the closer.
            while !self.at_end() && self.peek() != b'\n' && !self.starts_with(b"*/") {
                self.advance();
            }
            // Trailing blanks belong to the following whitespace token.
            while self.pos > piece_start
                && (self.source[self.pos - 1] == b' ' || self.source[self.pos - 1] == b'\t')
            {
                self.pos -= 1;
            }
            if self.pos > piece_start {
                self.push(TokenKind::DocCommentString, piece_start, piece_line);
            }
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn opener_for(closer: TokenKind) -> TokenKind {
    match closer {
        TokenKind::CloseParen => TokenKind::OpenParen,
        TokenKind::CloseBrace => TokenKind::OpenBrace,
        TokenKind::CloseShortArray => TokenKind::OpenShortArray,
        _ => unreachable!("not a closer kind"),
    }
}

/// Fills in structural links: bracket matching and doc-comment spans.
fn link_structure(tokens: &mut [Token]) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        match tokens[i].kind {
            TokenKind::OpenParen | TokenKind::OpenBrace | TokenKind::OpenShortArray => {
                stack.push(i);
            }
            TokenKind::CloseParen | TokenKind::CloseBrace | TokenKind::CloseShortArray => {
                if let Some(&top) = stack.last() {
                    if tokens[top].kind == opener_for(tokens[i].kind) {
                        stack.pop();
                        tokens[top].matching_closer = Some(i);
                    }
                    // Unbalanced closers stay unlinked.
                }
            }
            _ => {}
        }
    }

    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind != TokenKind::DocCommentOpen {
            i += 1;
            continue;
        }
        let mut tags = Vec::new();
        let mut closer = None;
        let mut j = i + 1;
        while j < tokens.len() {
            match tokens[j].kind {
                TokenKind::DocCommentClose => {
                    closer = Some(j);
                    break;
                }
                TokenKind::DocCommentTag => {
                    tags.push(j);
                    tokens[j].comment_opener = Some(i);
                }
                TokenKind::DocCommentStar
                | TokenKind::DocCommentString
                | TokenKind::DocCommentWhitespace => {
                    tokens[j].comment_opener = Some(i);
                }
                // A doc comment that was never closed: stop linking.
                _ => break,
            }
            j += 1;
        }
        if let Some(c) = closer {
            tokens[c].comment_opener = Some(i);
            tokens[i].comment_closer = Some(c);
            tokens[i].comment_tags = tags;
            i = c + 1;
        } else {
            i = j.max(i + 1);
        }
    }
}
