//! Transactional token-text rewriting.

use lintok_tokens::TokenStream;

/// Contract faults in fixer usage.
///
/// These indicate a bug in a sniff, not a problem with the checked source;
/// they are never reported as violations.
#[derive(Debug, thiserror::Error)]
pub enum FixerError {
    /// A replacement targeted a token index past the end of the stream.
    #[error("token index {0} is out of bounds for this fixer")]
    OutOfBounds(usize),

    /// `begin_changeset` was called while a changeset was already open.
    #[error("a changeset is already open")]
    ChangesetAlreadyOpen,

    /// `replace_token` or `end_changeset` was called with no open changeset.
    #[error("no changeset is open")]
    NoChangesetOpen,
}

/// Applies token replacements as atomic changesets.
///
/// The fixer holds a working copy of every token's text. A fix operation
/// opens a changeset, stages zero or more replacements, and commits them with
/// [`end_changeset`](Self::end_changeset): either every staged replacement is
/// applied or none are. Within one pass, a changeset that touches a token an
/// earlier changeset already modified is rolled back entirely, and the violation
/// it belonged to stays reported as detected-but-not-fixed.
///
/// Token indices refer to the stream the fixer was created from. They become
/// meaningless once the fixed contents are re-tokenized, so a fixer is only
/// ever used within a single pass.
pub struct Fixer {
    texts: Vec<String>,
    touched: Vec<bool>,
    staged: Option<Vec<(usize, String)>>,
    fix_count: usize,
}

impl Fixer {
    /// Creates a fixer holding a working copy of the stream's token texts.
    pub fn new(stream: &TokenStream) -> Self {
        let texts: Vec<String> = stream.tokens().iter().map(|t| t.text.clone()).collect();
        let touched = vec![false; texts.len()];
        Self {
            texts,
            touched,
            staged: None,
            fix_count: 0,
        }
    }

    /// Opens a new changeset.
    pub fn begin_changeset(&mut self) -> Result<(), FixerError> {
        if self.staged.is_some() {
            return Err(FixerError::ChangesetAlreadyOpen);
        }
        self.staged = Some(Vec::new());
        Ok(())
    }

    /// Stages a replacement of the token at `index` with `new_text`.
    ///
    /// An empty string deletes the token's text. Staging the same index twice
    /// within one changeset keeps the later replacement.
    pub fn replace_token(
        &mut self,
        index: usize,
        new_text: impl Into<String>,
    ) -> Result<(), FixerError> {
        if index >= self.texts.len() {
            return Err(FixerError::OutOfBounds(index));
        }
        let staged = self.staged.as_mut().ok_or(FixerError::NoChangesetOpen)?;
        staged.push((index, new_text.into()));
        Ok(())
    }

    /// Commits the open changeset.
    ///
    /// Returns `Ok(true)` when the changeset was applied (committing zero
    /// replacements is a no-op that also returns `Ok(true)`), and `Ok(false)`
    /// when the changeset was rolled back because it touched a token already
    /// modified by an earlier changeset in this pass.
    pub fn end_changeset(&mut self) -> Result<bool, FixerError> {
        let staged = self.staged.take().ok_or(FixerError::NoChangesetOpen)?;
        if staged.is_empty() {
            return Ok(true);
        }

        // Later stagings of the same index win.
        let mut by_index: std::collections::BTreeMap<usize, String> = std::collections::BTreeMap::new();
        for (index, text) in staged {
            by_index.insert(index, text);
        }

        if by_index.keys().any(|&i| self.touched[i]) {
            return Ok(false);
        }

        for (index, text) in by_index {
            self.texts[index] = text;
            self.touched[index] = true;
        }
        self.fix_count += 1;
        Ok(true)
    }

    /// Returns the number of changesets committed so far.
    pub fn fix_count(&self) -> usize {
        self.fix_count
    }

    /// Returns the corrected source text: every token's current text, in order.
    pub fn contents(&self) -> String {
        self.texts.concat()
    }
}
