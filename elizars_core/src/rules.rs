//! The ordered rule table.
//!
//! A rule pairs a regular expression with a set of response templates.
//! Rules are tried strictly in declaration order and the first pattern that
//! matches the *whole* utterance wins. The bundled table is a versioned JSON
//! asset compiled into the binary; [`RuleTable::load_rules`] validates it
//! once at startup.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Result, RuleTableError};
use crate::template::ResponseTemplate;

/// Version of the rule asset format this build understands.
pub const RULES_ASSET_VERSION: u32 = 1;

const BUNDLED_RULES: &str = include_str!("../assets/rules.json");

/// Inputs the last rule must accept to count as a catch-all fallback.
const FALLBACK_PROBES: &[&str] = &[
    "",
    "x",
    "?!",
    "...",
    "12345",
    "Hello there, how are you?",
    "i do n't know what to say",
];

/// Uncompiled form of a rule, as stored in the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Regex matched case-insensitively against the full utterance.
    pub pattern: String,
    /// Templates cycled through on successive matches.
    pub responses: Vec<String>,
}

impl RuleDef {
    pub fn new<S: Into<String>>(
        pattern: impl Into<String>,
        responses: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Compile and validate this definition as the rule at `index`.
    ///
    /// # Errors
    /// Fails on an invalid regex, an empty response set, or a template that
    /// references a capture group the pattern does not have.
    pub fn build(&self, index: usize) -> Result<Rule> {
        let regex = RegexBuilder::new(&format!("^(?:{})$", self.pattern))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| RuleTableError::InvalidPattern {
                index,
                pattern: self.pattern.clone(),
                source,
            })?;

        if self.responses.is_empty() {
            return Err(RuleTableError::NoResponses {
                index,
                pattern: self.pattern.clone(),
            });
        }

        let groups = regex.captures_len() - 1;
        let templates = self
            .responses
            .iter()
            .map(|text| {
                let template = ResponseTemplate::new(text.as_str());
                let placeholder = template.max_placeholder();
                if placeholder > groups {
                    return Err(RuleTableError::PlaceholderOutOfRange {
                        index,
                        template: text.clone(),
                        placeholder,
                        groups,
                    });
                }
                Ok(template)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Rule {
            pattern: self.pattern.clone(),
            regex,
            templates,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RuleAsset {
    version: u32,
    rules: Vec<RuleDef>,
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    templates: Vec<ResponseTemplate>,
}

impl Rule {
    /// The pattern as authored, without the anchoring added at compile time.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn templates(&self) -> &[ResponseTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Whether the pattern matches the entire utterance.
    #[must_use]
    pub fn is_match(&self, utterance: &str) -> bool {
        self.regex.is_match(utterance)
    }

    fn captures(&self, utterance: &str) -> Option<Vec<Option<String>>> {
        let caps = self.regex.captures(utterance)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }
}

/// Result of a successful [`RuleTable::find_match`].
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    /// Position of the rule in the table.
    pub index: usize,
    pub rule: &'a Rule,
    /// Capture groups 1..=n; `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
}

/// Ordered, immutable list of compiled rules ending in a catch-all.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fingerprint: String,
}

impl RuleTable {
    /// Load the rule table bundled with this build.
    ///
    /// # Errors
    /// Only fails if the bundled asset itself is broken.
    pub fn load_rules() -> Result<Self> {
        Self::from_json(BUNDLED_RULES)
    }

    /// Parse and validate a rule asset.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, an unknown asset version, or any
    /// validation failure of [`RuleTable::from_defs`].
    pub fn from_json(json: &str) -> Result<Self> {
        let asset: RuleAsset = serde_json::from_str(json)?;
        if asset.version != RULES_ASSET_VERSION {
            return Err(RuleTableError::UnsupportedVersion {
                found: asset.version,
                expected: RULES_ASSET_VERSION,
            });
        }
        Self::from_defs(asset.rules)
    }

    /// Compile rule definitions in order and validate the table as a whole.
    ///
    /// # Errors
    /// Returns an error if the table is empty, any rule fails to build, or the
    /// last rule is not a catch-all.
    pub fn from_defs(defs: impl IntoIterator<Item = RuleDef>) -> Result<Self> {
        let defs: Vec<RuleDef> = defs.into_iter().collect();

        let rules = defs
            .iter()
            .enumerate()
            .map(|(index, def)| def.build(index))
            .collect::<Result<Vec<_>>>()?;

        let fallback = rules.last().ok_or(RuleTableError::Empty)?;
        if !FALLBACK_PROBES.iter().all(|probe| fallback.is_match(probe)) {
            return Err(RuleTableError::MissingFallback {
                pattern: fallback.pattern.clone(),
            });
        }

        let fingerprint = fingerprint(&defs);
        debug!("Compiled {} rules (fingerprint {fingerprint})", rules.len());

        Ok(Self { rules, fingerprint })
    }

    /// Find the first rule, in table order, whose pattern matches the whole
    /// utterance.
    #[must_use]
    pub fn find_match(&self, utterance: &str) -> Option<RuleMatch<'_>> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.captures(utterance).map(|groups| RuleMatch {
                index,
                rule,
                groups,
            })
        })
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// SHA-256 hex digest of the ordered patterns and templates.
    ///
    /// Two tables with the same fingerprint behave identically.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(defs: &[RuleDef]) -> String {
    let mut hasher = Sha256::new();
    for def in defs {
        hasher.update(def.pattern.as_bytes());
        hasher.update(b"\x1e");
        for response in &def.responses {
            hasher.update(response.as_bytes());
            hasher.update(b"\x1f");
        }
        hasher.update(b"\x1d");
    }
    format!("{:x}", hasher.finalize())
}
