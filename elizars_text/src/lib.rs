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
    clippy::missing_errors_doc
)]

//! Text normalization applied before rule matching: a punctuation-aware
//! tokenizer and a Porter stemmer.

pub mod normalizer;
pub mod porter;
pub mod tokenizer;

pub use normalizer::{NormalizerKind, PassthroughNormalizer, StemmingNormalizer};
pub use porter::PorterStemmer;
pub use tokenizer::{Token, join, tokenize};
