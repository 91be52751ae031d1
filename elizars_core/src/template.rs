//! Response templates with positional placeholders.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::reflection::ReflectionMap;

static PLACEHOLDER_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER_PATTERN
        .get_or_init(|| Regex::new(r"%(\d+)").expect("Static regex pattern is guaranteed to be valid"))
}

/// A canned reply such as `"Why do you need %1?"`.
///
/// `%k` refers to the k-th capture group of the owning rule (1-indexed).
/// `%0` and a bare `%` are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplate {
    text: String,
}

impl ResponseTemplate {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Placeholder indices in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        placeholder_pattern()
            .captures_iter(&self.text)
            .filter_map(|caps| caps[1].parse::<usize>().ok())
            .filter(|&index| index > 0)
    }

    /// Highest placeholder index, or 0 when the template is plain text.
    #[must_use]
    pub fn max_placeholder(&self) -> usize {
        self.placeholders().max().unwrap_or(0)
    }

    /// Substitute reflected capture groups into the template.
    ///
    /// `groups[0]` holds capture group 1. A placeholder whose group is
    /// missing or did not participate in the match is left as written.
    #[must_use]
    pub fn fill(&self, groups: &[Option<String>], reflections: &ReflectionMap) -> String {
        if self.max_placeholder() == 0 {
            return self.text.clone();
        }

        let filled = placeholder_pattern().replace_all(&self.text, |caps: &Captures<'_>| {
            let fragment = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|slot| groups.get(slot))
                .and_then(Option::as_deref);
            fragment.map_or_else(|| caps[0].to_string(), |text| reflections.reflect(text))
        });

        tidy_terminal_punctuation(&filled)
    }
}

impl From<&str> for ResponseTemplate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for ResponseTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tidy the two endings an echoed fragment typically produces: a question
/// spliced into a statement (`"?."` becomes `"."`) and a question spliced
/// into a question (`"??"` becomes `"?"`). Any other punctuation the user
/// typed is left alone.
fn tidy_terminal_punctuation(reply: &str) -> String {
    let mut tidied = reply.to_string();
    if tidied.ends_with("?.") {
        tidied.truncate(tidied.len() - 2);
        tidied.push('.');
    }
    if tidied.ends_with("??") {
        tidied.pop();
    }
    tidied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_string())).collect()
    }

    #[test]
    fn test_placeholders_parsed() {
        let template = ResponseTemplate::new("If %1, then %2 and %1 again.");
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec![1, 2, 1]);
        assert_eq!(template.max_placeholder(), 2);
    }

    #[test]
    fn test_template_from_str() {
        let template = ResponseTemplate::from("Why do you need %1?");
        assert_eq!(template.as_str(), "Why do you need %1?");
        assert_eq!(template.to_string(), template.as_str());
        assert_eq!(template, ResponseTemplate::new("Why do you need %1?"));
    }

    #[test]
    fn test_plain_text_has_no_placeholders() {
        let template = ResponseTemplate::new("Thank you, that will be $150.  Have a good day!");
        assert_eq!(template.max_placeholder(), 0);
        assert_eq!(
            template.fill(&[], &ReflectionMap::classic()),
            "Thank you, that will be $150.  Have a good day!"
        );
    }

    #[test]
    fn test_fill_substitutes_group() {
        let template = ResponseTemplate::new("Why do you need %1?");
        let reply = template.fill(&groups(&["rest"]), &ReflectionMap::classic());
        assert_eq!(reply, "Why do you need rest?");
    }

    #[test]
    fn test_fill_reflects_group() {
        let template = ResponseTemplate::new("How long have you been %1?");
        let reply = template.fill(&groups(&["my own boss"]), &ReflectionMap::classic());
        assert_eq!(reply, "How long have you been your own boss?");
    }

    #[test]
    fn test_missing_group_left_literal() {
        let template = ResponseTemplate::new("Both %1 and %2.");
        let reply = template.fill(&groups(&["this"]), &ReflectionMap::classic());
        assert_eq!(reply, "Both this and %2.");

        let reply = template.fill(&[None, Some("that".to_string())], &ReflectionMap::classic());
        assert_eq!(reply, "Both %1 and that.");
    }

    #[test]
    fn test_percent_zero_is_text() {
        let template = ResponseTemplate::new("100%0 sure");
        assert_eq!(template.max_placeholder(), 0);
    }

    #[test]
    fn test_echoed_question_mark_tidied() {
        let reflections = ReflectionMap::classic();
        let question = ResponseTemplate::new("Why do you need %1?");
        assert_eq!(
            question.fill(&groups(&["rest?"]), &reflections),
            "Why do you need rest?"
        );

        let statement = ResponseTemplate::new("%1.");
        assert_eq!(statement.fill(&groups(&["really?"]), &reflections), "really.");
    }

    #[test]
    fn test_user_punctuation_kept() {
        let reflections = ReflectionMap::classic();
        let template = ResponseTemplate::new("Why do you need %1?");
        assert_eq!(
            template.fill(&groups(&["a break..."]), &reflections),
            "Why do you need a break...?"
        );
        assert_eq!(
            template.fill(&groups(&["help!!!"]), &reflections),
            "Why do you need help!!!?"
        );
        assert_eq!(
            template.fill(&groups(&["rest."]), &reflections),
            "Why do you need rest.?"
        );
    }

    #[test]
    fn test_tidy_only_rewrites_two_endings() {
        assert_eq!(tidy_terminal_punctuation("fine."), "fine.");
        assert_eq!(tidy_terminal_punctuation("fine?."), "fine.");
        assert_eq!(tidy_terminal_punctuation("fine??"), "fine?");
        assert_eq!(tidy_terminal_punctuation("..."), "...");
        assert_eq!(tidy_terminal_punctuation("help!!!?"), "help!!!?");
        assert_eq!(tidy_terminal_punctuation(""), "");
    }
}
