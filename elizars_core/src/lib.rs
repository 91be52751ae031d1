#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! Pattern-driven therapist responder.
//!
//! An ordered table of regular-expression rules is matched against the
//! user's (normalized) utterance. The first rule whose pattern matches the
//! whole utterance answers with one of its canned templates, with captured
//! fragments reflected ("my" → "your") and spliced into `%1`, `%2`, ….

pub mod error;
pub mod reflection;
pub mod responder;
pub mod rules;
mod selection;
pub mod session;
pub mod template;

pub use error::{Result, RuleTableError};
pub use reflection::ReflectionMap;
pub use responder::{DEFAULT_REPLY, Reply, Responder};
pub use rules::{RULES_ASSET_VERSION, Rule, RuleDef, RuleMatch, RuleTable};
pub use selection::Selection;
pub use session::Session;
pub use template::ResponseTemplate;

/// Text pre-processing applied to every utterance before matching.
///
/// Whatever normalizer a conversation uses must be applied to every input
/// of that conversation; switching mid-way changes which rules match.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    fn normalize(&self, text: &str) -> String {
        (**self).normalize(text)
    }
}
