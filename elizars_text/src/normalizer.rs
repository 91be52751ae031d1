//! Normalizers applied to every utterance before rule matching.

use elizars_core::Normalizer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::porter::PorterStemmer;
use crate::tokenizer::{Token, join, tokenize};

/// Tokenize, stem every word, and join the result into one line.
///
/// "I am feeling HAPPY!" becomes "i am feel happi!".
#[derive(Debug, Clone, Copy, Default)]
pub struct StemmingNormalizer {
    stemmer: PorterStemmer,
}

impl StemmingNormalizer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stemmer: PorterStemmer::new(),
        }
    }
}

impl Normalizer for StemmingNormalizer {
    fn normalize(&self, text: &str) -> String {
        let tokens: Vec<Token> = tokenize(text)
            .into_iter()
            .map(|token| match token {
                Token::Word(word) => Token::Word(self.stemmer.stem(&word)),
                other => other,
            })
            .collect();
        let normalized = join(&tokens);
        debug!("Normalized {text:?} -> {normalized:?}");
        normalized
    }
}

/// Leaves the text as typed, apart from trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

impl Normalizer for PassthroughNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

/// Normalizer selection as written in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    /// Tokenize and Porter-stem the input.
    #[default]
    Stem,
    /// Match against the raw input.
    None,
}

impl NormalizerKind {
    #[must_use]
    pub fn build(self) -> Box<dyn Normalizer> {
        match self {
            Self::Stem => Box::new(StemmingNormalizer::new()),
            Self::None => Box::new(PassthroughNormalizer),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for NormalizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NormalizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stem" => Ok(Self::Stem),
            "none" => Ok(Self::None),
            other => Err(format!("unknown normalizer: {other} (expected `stem` or `none`)")),
        }
    }
}
