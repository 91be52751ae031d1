use std::path::PathBuf;

use elizars_config::Config;
use elizars_core::{RULES_ASSET_VERSION, RuleTable};

/// Strategy for displaying configuration and rule table details.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = match input {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            Config::default()
        };

        println!("=== elizars Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", config_path.display());
        }
        println!();

        println!("Conversation:");
        println!("  Normalizer: {}", config.normalizer);
        println!("  Selection: {:?}", config.selection);
        println!();

        println!("Shell:");
        println!("  User Prompt: {:?}", config.shell.user_prompt);
        println!("  Bot Prefix: {:?}", config.shell.bot_prefix);
        println!("  Show Banner: {}", config.shell.show_banner);
        println!();

        let rules = RuleTable::load_rules()?;
        println!("Rules:");
        println!("  Asset Version: {RULES_ASSET_VERSION}");
        println!("  Count: {}", rules.len());
        println!("  Fingerprint: {}", rules.fingerprint());

        Ok(())
    }
}
