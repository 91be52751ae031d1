//! Per-conversation selection state.

use crate::selection::{Selection, Selector};

/// State owned by a single conversation.
///
/// A session only remembers which template each rule should use next. It
/// is created when a conversation starts, passed by `&mut` into every
/// [`crate::Responder::respond`] call, and dropped when the conversation
/// ends. Sessions share nothing, so any number of them can run against the
/// same responder at once.
#[derive(Debug, Clone)]
pub struct Session {
    selector: Selector,
}

impl Session {
    /// A round-robin session.
    #[must_use]
    pub fn new() -> Self {
        Self::with_selection(Selection::RoundRobin)
    }

    #[must_use]
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selector: Selector::new(selection),
        }
    }

    /// Pick the template index to use for this hit of `rule_index`.
    pub fn select(&mut self, rule_index: usize, template_count: usize) -> usize {
        self.selector.next(rule_index, template_count)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
