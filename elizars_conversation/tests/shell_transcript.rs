//! End-to-end sessions through the interactive shell with the bundled rules.

use std::io::Cursor;
use std::sync::Arc;

use elizars_conversation::{BANNER, ConversationConfig, ConversationManager};
use elizars_core::{ReflectionMap, Responder, RuleTable};
use elizars_text::NormalizerKind;

fn manager(kind: NormalizerKind, config: ConversationConfig) -> ConversationManager {
    let table = RuleTable::load_rules().expect("bundled rules should load");
    let responder = Responder::new(Arc::new(table), Arc::new(ReflectionMap::classic()));
    ConversationManager::new(responder, kind.build(), config)
}

fn run(manager: &mut ConversationManager, input: &str) -> String {
    let mut output = Vec::new();
    manager
        .run_interactive(Cursor::new(input.to_string()), &mut output)
        .expect("in-memory session should not fail");
    String::from_utf8(output).expect("transcript should be UTF-8")
}

#[test]
fn test_full_session_with_banner() {
    let mut manager = manager(NormalizerKind::Stem, ConversationConfig::default());
    let transcript = run(&mut manager, "I need rest\nI am sad\nquit\n");

    let expected = format!(
        "{BANNER}\n\
         You: Eliza: Why do you need rest?\n\
         You: Eliza: Did you come to me because you are sad?\n\
         You: Eliza: Thank you for talking with me.\n"
    );
    assert_eq!(transcript, expected);
    assert_eq!(manager.turns(), 3);
}

#[test]
fn test_end_of_input_closes_session() {
    let config = ConversationConfig::default().with_banner(false);
    let mut manager = manager(NormalizerKind::Stem, config);
    let transcript = run(&mut manager, "hello\n");

    assert_eq!(
        transcript,
        "You: Eliza: Hello... I'm glad you could drop by today.\nYou: \n"
    );
}

#[test]
fn test_lines_after_quit_are_ignored() {
    let config = ConversationConfig::default().with_banner(false);
    let mut manager = manager(NormalizerKind::None, config);
    let transcript = run(&mut manager, "Quit\nI need rest\n");

    assert_eq!(transcript, "You: Eliza: Thank you for talking with me.\n");
}

#[test]
fn test_empty_line_still_gets_a_reply() {
    let config = ConversationConfig::default().with_banner(false);
    let mut manager = manager(NormalizerKind::Stem, config);
    let transcript = run(&mut manager, "\nquit\n");

    assert!(transcript.starts_with("You: Eliza: Please tell me more.\n"));
}

#[test]
fn test_custom_prompts() {
    let config = ConversationConfig::default()
        .with_banner(false)
        .with_user_prompt("> ".to_string())
        .with_bot_prefix("< ".to_string());
    let mut manager = manager(NormalizerKind::Stem, config);
    let transcript = run(&mut manager, "I am sad\n");

    assert_eq!(
        transcript,
        "> < Did you come to me because you are sad?\n> \n"
    );
}

#[test]
fn test_stemming_changes_which_rule_fires() {
    let config = ConversationConfig::default().with_banner(false);

    let mut raw = manager(NormalizerKind::None, config.clone());
    let turn = raw.process_turn("Finals start soon");
    assert_eq!(turn.rule_index, Some(0));
    assert_eq!(
        turn.reply,
        "I hear you. Finals week start soon for many. Do you want to tell me more?"
    );

    // "Finals" stems to "final", so the school rule no longer applies.
    let mut stemmed = manager(NormalizerKind::Stem, config);
    let turn = stemmed.process_turn("Finals start soon");
    assert_eq!(turn.normalized, "final start soon");
    assert_eq!(turn.rule_index, Some(41));
}

#[test]
fn test_conversations_rotate_independently() {
    let config = ConversationConfig::default().with_banner(false);
    let mut first = manager(NormalizerKind::Stem, config.clone());
    let mut second = manager(NormalizerKind::Stem, config);

    assert_eq!(first.process_turn("I need rest").reply, "Why do you need rest?");
    assert_eq!(
        first.process_turn("I need rest").reply,
        "Would it really help you to get rest?"
    );
    assert_eq!(second.process_turn("I need rest").reply, "Why do you need rest?");
    assert_ne!(first.id(), second.id());
}
