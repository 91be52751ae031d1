//! Pronoun reflection for echoed user text.
//!
//! When a captured fragment is spliced into a reply it has to be told from
//! the other side of the conversation: "my exams" becomes "your exams",
//! "I was" becomes "you were". [`ReflectionMap`] is a fixed word-for-word
//! lookup that performs this flip.

use std::collections::HashMap;

/// First/second person pairs used by [`ReflectionMap::classic`].
const CLASSIC_REFLECTIONS: &[(&str, &str)] = &[
    ("i", "you"),
    ("me", "you"),
    ("my", "your"),
    ("mine", "yours"),
    ("myself", "yourself"),
    ("am", "are"),
    ("was", "were"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("you", "me"),
    ("your", "my"),
    ("yours", "mine"),
    ("yourself", "myself"),
    ("are", "am"),
    ("were", "was"),
    ("you're", "I am"),
    ("you'd", "I would"),
    ("you've", "I have"),
    ("you'll", "I will"),
];

/// Immutable word-level pronoun substitution table.
///
/// Keys are stored lowercase; lookups are case-insensitive and only ever
/// replace whole words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionMap {
    entries: HashMap<String, String>,
}

impl ReflectionMap {
    /// Build a map from arbitrary `(word, reflected)` pairs.
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    /// The standard therapist reflections.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(CLASSIC_REFLECTIONS.iter().copied())
    }

    /// Look up the reflection of a single bare word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reflect a captured fragment word by word.
    ///
    /// The fragment is split on whitespace and re-joined with single spaces.
    /// Punctuation hugging a word ("you?") is kept in place while the bare
    /// word is looked up. Words without a mapping pass through untouched.
    #[must_use]
    pub fn reflect(&self, fragment: &str) -> String {
        fragment
            .split_whitespace()
            .map(|word| self.reflect_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn reflect_word(&self, word: &str) -> String {
        let (lead, bare, trail) = split_punctuation(word);
        match self.get(bare) {
            Some(mapped) => format!("{lead}{}{trail}", match_case(bare, mapped)),
            None => word.to_string(),
        }
    }
}

impl Default for ReflectionMap {
    fn default() -> Self {
        Self::classic()
    }
}

/// Split `word` into leading punctuation, the bare word and trailing
/// punctuation. Apostrophes inside the word belong to it ("don't").
fn split_punctuation(word: &str) -> (&str, &str, &str) {
    let is_edge = |c: char| c.is_ascii_punctuation() && c != '\'';
    let start = word.find(|c: char| !is_edge(c)).unwrap_or(word.len());
    let end = word
        .rfind(|c: char| !is_edge(c))
        .map_or(start, |i| i + word[i..].chars().next().map_or(1, char::len_utf8));
    let end = end.max(start);
    (&word[..start], &word[start..end], &word[end..])
}

/// Carry the casing pattern of `original` over to `mapped`.
///
/// "I" and its contractions ("I'm", "I've") are always capitalised in
/// English, so a leading capital on them says nothing about the speaker's
/// casing and is not carried over.
fn match_case(original: &str, mapped: &str) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic()).peekable();
    let Some(first) = letters.peek().copied() else {
        return mapped.to_string();
    };
    let all_upper = original.chars().filter(|c| c.is_alphabetic()).count() > 1
        && letters.all(char::is_uppercase);
    if all_upper {
        mapped.to_uppercase()
    } else if first.is_uppercase() && !is_first_person_singular(original) {
        let mut chars = mapped.chars();
        chars.next().map_or_else(String::new, |c| {
            c.to_uppercase().chain(chars).collect()
        })
    } else {
        mapped.to_string()
    }
}

fn is_first_person_singular(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower == "i" || lower.starts_with("i'")
}
