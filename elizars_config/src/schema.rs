use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use elizars_core::Selection;
use elizars_text::NormalizerKind;

/// Configuration written by `elizars init`.
pub const CONFIG_TEMPLATE: &str = r#"{
  "normalizer": "stem",
  "selection": {
    "policy": "round_robin"
  },
  "shell": {
    "user_prompt": "You: ",
    "bot_prefix": "Eliza: ",
    "show_banner": true
  }
}
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerKind,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    #[serde(default = "ShellConfig::default_user_prompt")]
    pub user_prompt: String,
    #[serde(default = "ShellConfig::default_bot_prefix")]
    pub bot_prefix: String,
    #[serde(default = "ShellConfig::default_show_banner")]
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user_prompt: Self::default_user_prompt(),
            bot_prefix: Self::default_bot_prefix(),
            show_banner: Self::default_show_banner(),
        }
    }
}

impl ShellConfig {
    fn default_user_prompt() -> String {
        "You: ".to_string()
    }

    fn default_bot_prefix() -> String {
        "Eliza: ".to_string()
    }

    const fn default_show_banner() -> bool {
        true
    }
}

impl Config {
    /// `~/elizars`
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("elizars"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/elizars/config.json`, falling back to defaults when the file
    /// has not been created yet.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults (run 'elizars init' to create one)",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load a config file that must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the default config to `~/elizars/config.json`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::create_config_at(&config_path)?;
        Ok(config_path)
    }

    /// Write the default config template to `path`, refusing to overwrite.
    pub fn create_config_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - normalizer: \"stem\" (tokenize + Porter stemming) or \"none\"");
        println!("   - selection.policy: \"round_robin\", or \"random\" with a \"seed\"");
        println!("   - shell: user prompt, reply prefix and banner");
        println!();
        Ok(())
    }
}
