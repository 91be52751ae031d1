use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuleTableError>;

/// Problems found while building a rule table.
///
/// All of these are fatal: a table that fails validation must never be
/// handed to a responder.
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("Rule table is empty")]
    Empty,

    #[error("Last rule `{pattern}` does not match every input; a catch-all fallback must come last")]
    MissingFallback { pattern: String },

    #[error("Rule {index} has an invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {index} (`{pattern}`) has no responses")]
    NoResponses { index: usize, pattern: String },

    #[error(
        "Rule {index} template `{template}` references %{placeholder} but the pattern only has {groups} capture group(s)"
    )]
    PlaceholderOutOfRange {
        index: usize,
        template: String,
        placeholder: usize,
        groups: usize,
    },

    #[error("Malformed rule asset: {0}")]
    Asset(#[from] serde_json::Error),

    #[error("Unsupported rule asset version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
