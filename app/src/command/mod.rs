//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use std::path::Path;
use std::sync::Arc;

use elizars_config::Config;
use elizars_conversation::{ConversationConfig, ConversationManager};
use elizars_core::{ReflectionMap, Responder, RuleTable};
use tracing::info;

mod chat;
mod info;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the config named on the command line, or the default one.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, Config::load_from)
}

/// Build a conversation from the bundled rule table and `config`.
fn build_manager(config: &Config) -> anyhow::Result<ConversationManager> {
    let rules = RuleTable::load_rules()?;
    info!(
        "Loaded {} rules (fingerprint {})",
        rules.len(),
        rules.fingerprint()
    );

    let responder = Responder::new(Arc::new(rules), Arc::new(ReflectionMap::classic()));
    let conversation_config = ConversationConfig::default()
        .with_selection(config.selection)
        .with_user_prompt(config.shell.user_prompt.clone())
        .with_bot_prefix(config.shell.bot_prefix.clone())
        .with_banner(config.shell.show_banner);

    Ok(ConversationManager::new(
        responder,
        config.normalizer.build(),
        conversation_config,
    ))
}
