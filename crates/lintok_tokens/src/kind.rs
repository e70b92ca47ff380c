//! Token kinds for PHP-style source.
//!
//! Keywords are case-insensitive: the lexer lowercases identifiers before
//! matching them with [`lookup_keyword`]. Whitespace, comments, and the
//! individual pieces of a documentation comment all get their own kinds so
//! that sniffs can reason about exact token offsets.

use serde::{Deserialize, Serialize};

/// The kind of a lexed token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    // === Tags ===
    /// `<?php`
    OpenTag,
    /// `?>`
    CloseTag,

    // === Keywords ===
    /// `declare`
    Declare,
    /// `namespace`
    Namespace,
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `trait`
    Trait,
    /// `function`
    Function,
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `final`
    Final,
    /// `new`
    New,
    /// `self`
    SelfKw,
    /// `array`
    ArrayKw,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // === Names and literals ===
    /// A bare identifier (class name, function name, constant)
    Ident,
    /// A variable (e.g., `$config`)
    Variable,
    /// `\` (namespace separator)
    NsSeparator,
    /// A numeric literal (e.g., `42`, `3.5`)
    Number,
    /// A single-quoted string literal
    SingleQuotedString,
    /// A double-quoted string literal
    DoubleQuotedString,

    // === Punctuation ===
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[` (short array syntax)
    OpenShortArray,
    /// `]`
    CloseShortArray,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // === Trivia ===
    /// A run of whitespace, possibly spanning multiple lines
    Whitespace,
    /// A `//` or `#` comment, not including the trailing newline
    LineComment,
    /// A `/* ... */` comment that is not a documentation comment
    BlockComment,

    // === Documentation comments ===
    /// `/**`
    DocCommentOpen,
    /// `*/` closing a documentation comment
    DocCommentClose,
    /// A decorative `*` at the start of a doc comment line
    DocCommentStar,
    /// An `@name` tag inside a doc comment
    DocCommentTag,
    /// Free text inside a doc comment
    DocCommentString,
    /// Whitespace inside a doc comment
    DocCommentWhitespace,

    // === Everything else ===
    /// Any operator or character the style checker has no dedicated kind for
    Other,
}

/// Looks up a keyword from a lowercased identifier string.
///
/// Returns `Some(TokenKind)` if the string is a keyword the checker
/// distinguishes, or `None` for a regular identifier.
pub fn lookup_keyword(s: &str) -> Option<TokenKind> {
    match s {
        "declare" => Some(TokenKind::Declare),
        "namespace" => Some(TokenKind::Namespace),
        "class" => Some(TokenKind::Class),
        "interface" => Some(TokenKind::Interface),
        "trait" => Some(TokenKind::Trait),
        "function" => Some(TokenKind::Function),
        "public" => Some(TokenKind::Public),
        "protected" => Some(TokenKind::Protected),
        "private" => Some(TokenKind::Private),
        "static" => Some(TokenKind::Static),
        "abstract" => Some(TokenKind::Abstract),
        "final" => Some(TokenKind::Final),
        "new" => Some(TokenKind::New),
        "self" => Some(TokenKind::SelfKw),
        "array" => Some(TokenKind::ArrayKw),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "null" => Some(TokenKind::Null),
        _ => None,
    }
}
