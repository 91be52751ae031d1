use std::path::PathBuf;

use elizars_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default configuration to `~/elizars/config.json`, or to the
/// path given with `--config`.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state, simplest form of strategy
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        match input {
            Some(path) => Config::create_config_at(&path),
            None => Config::create_config().map(|_| ()),
        }
    }
}
