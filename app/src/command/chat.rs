//! Therapist conversation command.
//!
//! Answers a single message with `-m`, otherwise runs the interactive shell
//! on stdin and stdout.

use std::path::PathBuf;

use tracing::info;

use super::{build_manager, load_config};

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Config file override
    pub config_path: Option<PathBuf>,
    /// Optional single message to answer (non-interactive mode)
    pub message: Option<String>,
    /// Skip the introduction even if the config asks for it
    pub no_banner: bool,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = load_config(input.config_path.as_deref())?;
        if input.no_banner {
            config.shell.show_banner = false;
        }

        let mut manager = build_manager(&config)?;

        if let Some(msg) = input.message {
            let result = manager.process_turn(&msg);
            println!("{}", result.reply);
            info!(
                "Answered with rule {:?} (normalized: {:?})",
                result.rule_index, result.normalized
            );
        } else {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            manager.run_interactive(stdin.lock(), &mut stdout)?;
            info!("Conversation ended after {} turns", manager.turns());
        }

        Ok(())
    }
}
