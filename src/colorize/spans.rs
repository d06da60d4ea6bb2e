//! Span builder: turns the token stream into styled segments.

use serde::Serialize;

use super::attr::AttributeSet;
use super::sgr::{self, BackgroundPalette};
use super::tokenizer::{Token, Tokenizer};

/// A maximal run of text produced under one attribute state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    text: String,
    attributes: AttributeSet,
}

impl Segment {
    pub fn new(text: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Normalized text (see [`normalize_text`](super::normalize_text)).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn into_parts(self) -> (String, AttributeSet) {
        (self.text, self.attributes)
    }
}

/// Lazy segment stream over one log.
///
/// Owns the running attribute set. Text is appended to the pending segment
/// while the state is unchanged. An SGR sequence that changes the state
/// closes the pending segment right away, so segment boundaries sit exactly
/// on state changes even when a later sequence restores the old state.
/// Empty segments are never produced, except that a log with no text at all
/// yields a single empty segment carrying the final state.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    tokens: Tokenizer<'a>,
    palette: BackgroundPalette,
    current: AttributeSet,
    pending: Option<Segment>,
    emitted: bool,
    finished: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(tokens: Tokenizer<'a>, palette: BackgroundPalette) -> Self {
        Self {
            tokens,
            palette,
            current: AttributeSet::new(),
            pending: None,
            emitted: false,
            finished: false,
        }
    }

    /// Attribute state after everything consumed so far.
    pub fn current(&self) -> &AttributeSet {
        &self.current
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.finished {
            return None;
        }

        for token in self.tokens.by_ref() {
            match token {
                Token::Sgr(params) => {
                    let changed = sgr::apply(&mut self.current, params, self.palette);
                    let stale = self
                        .pending
                        .as_ref()
                        .is_some_and(|pending| pending.attributes != self.current);
                    if changed && stale {
                        self.emitted = true;
                        return self.pending.take();
                    }
                }
                // Pending always carries the current state here
                Token::Text(text) => match &mut self.pending {
                    Some(pending) => pending.text.push_str(&text),
                    None => {
                        self.pending = Some(Segment::new(text.into_owned(), self.current.clone()));
                    }
                },
            }
        }

        self.finished = true;
        match self.pending.take() {
            Some(last) => Some(last),
            // The whole log produced no text
            None if !self.emitted => Some(Segment::new(String::new(), self.current.clone())),
            None => None,
        }
    }
}
