//! Conversation manager for a single therapist session.
//!
//! The `ConversationManager` ties one [`Session`] to a shared [`Responder`]
//! and a [`Normalizer`], so every turn of the conversation is normalized
//! the same way and rotates through replies independently of any other
//! conversation.

use elizars_core::{Normalizer, Responder, Selection, Session};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// The word that ends a conversation, compared case-insensitively.
pub const QUIT_WORD: &str = "quit";

/// Introduction printed before the first prompt.
pub const BANNER: &str = "Therapist\n---------\n\
Talk to the program by typing in plain English, using normal upper-\n\
and lower-case letters and punctuation.  Enter \"quit\" when done.\n\
========================================================================\n\
Hello.  How are you feeling today?";

/// Whether `input` asks to end the conversation.
#[must_use]
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_WORD)
}

/// Configuration for a conversation.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// How replies are picked from each rule's template set
    pub selection: Selection,
    /// Printed before reading each line
    pub user_prompt: String,
    /// Printed before each reply
    pub bot_prefix: String,
    /// Print the introduction before the first prompt
    pub show_banner: bool,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            selection: Selection::RoundRobin,
            user_prompt: "You: ".to_string(),
            bot_prefix: "Eliza: ".to_string(),
            show_banner: true,
        }
    }
}

impl ConversationConfig {
    #[must_use]
    pub const fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_user_prompt(mut self, prompt: String) -> Self {
        self.user_prompt = prompt;
        self
    }

    #[must_use]
    pub fn with_bot_prefix(mut self, prefix: String) -> Self {
        self.bot_prefix = prefix;
        self
    }

    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}

/// Errors that can occur while running a conversation.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of processing one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The reply text
    pub reply: String,
    /// Utterance after normalization, as it was matched
    pub normalized: String,
    /// Matched rule, `None` only if the table had no catch-all
    pub rule_index: Option<usize>,
    /// 1-based turn counter
    pub turn_number: usize,
}

/// One conversation with the therapist.
pub struct ConversationManager<N = Box<dyn Normalizer>>
where
    N: Normalizer,
{
    id: Uuid,
    responder: Responder,
    normalizer: N,
    session: Session,
    config: ConversationConfig,
    turns: usize,
}

impl<N> ConversationManager<N>
where
    N: Normalizer,
{
    /// Start a new conversation with a fresh session.
    pub fn new(responder: Responder, normalizer: N, config: ConversationConfig) -> Self {
        let id = Uuid::now_v7();
        info!("Starting conversation {id} ({:?} selection)", config.selection);

        Self {
            id,
            responder,
            normalizer,
            session: Session::with_selection(config.selection),
            config,
            turns: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Number of turns processed so far.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub const fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// Normalize `input` and answer it.
    pub fn process_turn(&mut self, input: &str) -> TurnResult {
        self.turns += 1;
        let normalized = self.normalizer.normalize(input);
        let reply = self.responder.respond_detailed(&normalized, &mut self.session);

        debug!(
            "Conversation {} turn {}: {normalized:?} -> rule {:?}",
            self.id, self.turns, reply.rule_index
        );

        TurnResult {
            reply: reply.text,
            normalized,
            rule_index: reply.rule_index,
            turn_number: self.turns,
        }
    }

    /// The closing line, taken from the rule table's answer to the quit word.
    pub fn farewell(&mut self) -> String {
        self.process_turn(QUIT_WORD).reply
    }

    /// Run the read-respond loop until the user quits or input ends.
    ///
    /// Every line, including an empty one, gets a reply. Typing the quit
    /// word prints the farewell and returns.
    pub fn run_interactive<R, W>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), ConversationError>
    where
        R: BufRead,
        W: Write,
    {
        if self.config.show_banner {
            writeln!(output, "{BANNER}")?;
        }

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.config.user_prompt)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                info!("Input closed after {} turns", self.turns);
                break;
            };

            if is_quit(&line) {
                let farewell = self.farewell();
                writeln!(output, "{}{farewell}", self.config.bot_prefix)?;
                info!("Conversation {} ended after {} turns", self.id, self.turns);
                break;
            }

            let result = self.process_turn(&line);
            writeln!(output, "{}{}", self.config.bot_prefix, result.reply)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elizars_core::{ReflectionMap, RuleDef, RuleTable};
    use elizars_text::PassthroughNormalizer;
    use std::sync::Arc;

    fn manager() -> ConversationManager<PassthroughNormalizer> {
        let table = RuleTable::from_defs([
            RuleDef::new("quit", ["Bye."]),
            RuleDef::new("(.*)", ["One.", "Two."]),
        ]);
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let table = table.expect("test table should build");
        let responder = Responder::new(Arc::new(table), Arc::new(ReflectionMap::classic()));
        ConversationManager::new(responder, PassthroughNormalizer, ConversationConfig::default())
    }

    #[test]
    fn test_config_default() {
        let config = ConversationConfig::default();
        assert_eq!(config.selection, Selection::RoundRobin);
        assert_eq!(config.user_prompt, "You: ");
        assert!(config.show_banner);
    }

    #[test]
    fn test_config_builders() {
        let config = ConversationConfig::default()
            .with_selection(Selection::Random { seed: 1 })
            .with_bot_prefix("> ".to_string())
            .with_banner(false);
        assert_eq!(config.selection, Selection::Random { seed: 1 });
        assert_eq!(config.bot_prefix, "> ");
        assert!(!config.show_banner);
    }

    #[test]
    fn test_turns_are_counted() {
        let mut manager = manager();
        let first = manager.process_turn("hello");
        let second = manager.process_turn("hello");
        assert_eq!(first.turn_number, 1);
        assert_eq!(second.turn_number, 2);
        assert_eq!(first.reply, "One.");
        assert_eq!(second.reply, "Two.");
        assert_eq!(manager.turns(), 2);
    }

    #[test]
    fn test_quit_detection() {
        assert!(is_quit("quit"));
        assert!(is_quit("  QuIt \n"));
        assert!(!is_quit("quit now"));
        assert!(!is_quit(""));
    }

    #[test]
    fn test_banner_layout() {
        let lines: Vec<&str> = BANNER.lines().collect();
        assert_eq!(lines[0], "Therapist");
        assert_eq!(lines[4], "=".repeat(72));
        assert_eq!(lines.last(), Some(&"Hello.  How are you feeling today?"));
    }

    #[test]
    fn test_run_interactive_without_banner() -> Result<(), ConversationError> {
        let mut manager = manager();
        assert!(manager.config().show_banner);
        manager.config = ConversationConfig::default().with_banner(false);
        assert!(!manager.config().show_banner);

        let mut output = Vec::new();
        manager.run_interactive(std::io::Cursor::new("hi\nQUIT\nhi\n"), &mut output)?;

        let transcript = String::from_utf8_lossy(&output);
        assert_eq!(transcript, "You: Eliza: One.\nYou: Eliza: Bye.\n");
        Ok(())
    }

    #[test]
    fn test_farewell_uses_quit_rule() {
        let mut manager = manager();
        assert_eq!(manager.farewell(), "Bye.");
    }
}
