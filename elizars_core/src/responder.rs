//! The responder: one utterance in, one reply out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::reflection::ReflectionMap;
use crate::rules::RuleTable;
use crate::session::Session;

/// Reply used when no rule matches. A validated table always ends in a
/// catch-all, so this only shows up if that guarantee is broken.
pub const DEFAULT_REPLY: &str = "Please tell me more.";

/// A reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Index of the matched rule, `None` when the default reply was used.
    pub rule_index: Option<usize>,
}

/// Stateless rule engine shared by every conversation.
///
/// The rule table and reflection map are immutable and reference counted,
/// so a responder can be cloned cheaply and used from any thread. All
/// per-conversation state lives in the [`Session`] passed to each call.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Arc<RuleTable>,
    reflections: Arc<ReflectionMap>,
}

impl Responder {
    #[must_use]
    pub const fn new(rules: Arc<RuleTable>, reflections: Arc<ReflectionMap>) -> Self {
        Self { rules, reflections }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    #[must_use]
    pub fn reflections(&self) -> &ReflectionMap {
        &self.reflections
    }

    /// Answer `utterance`, advancing the session's selection state.
    ///
    /// Never fails: any string, including an empty one, gets a reply.
    pub fn respond(&self, utterance: &str, session: &mut Session) -> String {
        self.respond_detailed(utterance, session).text
    }

    /// Like [`Responder::respond`] but also reports which rule answered.
    pub fn respond_detailed(&self, utterance: &str, session: &mut Session) -> Reply {
        let utterance = utterance.trim();

        let Some(found) = self.rules.find_match(utterance) else {
            warn!("No rule matched {utterance:?}; using the default reply");
            return Reply {
                text: DEFAULT_REPLY.to_string(),
                rule_index: None,
            };
        };

        let templates = found.rule.templates();
        let choice = session.select(found.index, templates.len());
        let text = templates.get(choice).map_or_else(
            || DEFAULT_REPLY.to_string(),
            |template| template.fill(&found.groups, &self.reflections),
        );

        debug!(
            "Rule {} (`{}`) answered with template {choice}",
            found.index,
            found.rule.pattern()
        );

        Reply {
            text,
            rule_index: Some(found.index),
        }
    }
}
