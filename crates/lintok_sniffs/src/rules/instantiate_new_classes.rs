//! Classes.InstantiateNewClasses: `new Widget()` with no arguments does not
//! need the brackets.

use crate::file::SniffFile;
use crate::fixer::FixerError;
use crate::{ProcessOutcome, Sniff};
use lintok_diagnostics::ViolationCode;
use lintok_tokens::{TokenKind, TokenStream};

const SNIFF: &str = "Classes.InstantiateNewClasses";

const NEW_CLASS: ViolationCode = ViolationCode::new(SNIFF, "NewClass");

/// Token kinds that make up the class-name reference after `new`.
const CLASS_NAME_PARTS: &[TokenKind] = &[
    TokenKind::Variable,
    TokenKind::Whitespace,
    TokenKind::NsSeparator,
    TokenKind::Ident,
    TokenKind::SelfKw,
];

/// Token kinds that count as a real constructor argument.
const ARGUMENT_KINDS: &[TokenKind] = &[
    TokenKind::Variable,
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::SingleQuotedString,
    TokenKind::DoubleQuotedString,
    TokenKind::ArrayKw,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::OpenShortArray,
];

/// The decision reached by [`scan_instantiation`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InstantiationScan {
    /// Whether the instantiation is acceptable as written.
    pub valid: bool,
    /// One past the last token examined by the walk.
    pub end: usize,
}

/// Walks forward from a `new` trigger classifying tokens until a decision.
///
/// A terminator (`;`/`,`) before any parenthesis means there was nothing to
/// object to; an argument token inside the parenthesis means the brackets
/// are earning their keep; a closing parenthesis reached while inside the
/// argument list without having seen an argument means an empty `()` follows
/// a bare class reference. Stream exhaustion is treated as invalid; the walk
/// checks bounds on every step and can never run away.
pub fn scan_instantiation(stream: &TokenStream, trigger: usize) -> InstantiationScan {
    let mut valid = false;
    let mut started = false;
    let mut cnt = trigger + 1;

    loop {
        let Some(tok) = stream.get(cnt) else {
            break;
        };
        cnt += 1;
        match tok.kind {
            TokenKind::Semicolon | TokenKind::Comma => {
                valid = true;
                break;
            }
            TokenKind::OpenParen => {
                started = true;
            }
            TokenKind::CloseParen => {
                if !started {
                    valid = true;
                }
                break;
            }
            kind if ARGUMENT_KINDS.contains(&kind) => {
                if started {
                    valid = true;
                    break;
                }
            }
            _ => {}
        }
    }

    InstantiationScan { valid, end: cnt }
}

/// Flags `new Widget()`, instantiation with an empty argument list, and
/// auto-fixes it by removing the brackets and the whitespace left behind
/// after the class name.
pub struct InstantiateNewClasses;

impl InstantiateNewClasses {
    fn apply_fix(&self, file: &mut SniffFile, trigger: usize, end: usize) -> Result<(), FixerError> {
        let Some(name_end) = file.stream().find_next_not(CLASS_NAME_PARTS, trigger + 1, None)
        else {
            return Ok(());
        };
        let stray_space = file.stream().kind(trigger + 3) == Some(TokenKind::Whitespace);

        let Some(fixer) = file.fixer() else {
            return Ok(());
        };
        fixer.begin_changeset()?;
        if stray_space {
            fixer.replace_token(trigger + 3, "")?;
        }
        for i in name_end..end {
            fixer.replace_token(i, "")?;
        }
        fixer.end_changeset()?;
        Ok(())
    }
}

impl Sniff for InstantiateNewClasses {
    fn name(&self) -> &'static str {
        SNIFF
    }

    fn description(&self) -> &'static str {
        "new classes without constructor arguments are instantiated without brackets"
    }

    fn register(&self) -> &'static [TokenKind] {
        &[TokenKind::New]
    }

    fn process(&self, file: &mut SniffFile, index: usize) -> ProcessOutcome {
        let scan = scan_instantiation(file.stream(), index);
        if scan.valid {
            return ProcessOutcome::Continue;
        }

        let fix = file.add_fixable_error(
            "Instantiating new class without parameters does not require brackets.",
            index,
            NEW_CLASS,
            Vec::new(),
        );
        if fix && self.apply_fix(file, index, scan.end).is_err() {
            // A fixer contract fault is a bug, not a style finding; stop
            // processing this file rather than half-fixing it.
            return ProcessOutcome::SkipRest;
        }

        ProcessOutcome::Continue
    }
}
