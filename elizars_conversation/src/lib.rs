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

//! Interactive therapist sessions.
//!
//! A conversation owns its own reply rotation and normalizer while sharing
//! the rule table with every other conversation in the process.
//!
//! # Key Features
//! - One `Session` per conversation, identified by a UUID
//! - Input normalization before matching
//! - A line-oriented shell over any `BufRead` / `Write` pair

mod manager;

pub use manager::{
    BANNER, ConversationConfig, ConversationError, ConversationManager, QUIT_WORD, TurnResult,
    is_quit,
};
