use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Discord bot configuration.
///
/// The token is expected to come from the environment
/// (`PASSFORGE_DISCORD__TOKEN`) or `config/local.toml`, never from the
/// checked-in defaults file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DiscordConfig {
    #[serde(default)]
    pub token: String,
}

/// Word source configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WordlistConfig {
    /// Path to a newline-delimited word file
    #[serde(default = "default_wordlist_path")]
    pub path: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_wordlist_path() -> String {
    "/usr/share/dict/words".to_string()
}

fn default_min_length() -> usize {
    4
}

fn default_max_length() -> usize {
    10
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            path: default_wordlist_path(),
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

/// Root application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub wordlist: WordlistConfig,
    /// Accounts subscribed to relayed feedback from process start.
    /// The set is also mutable at runtime through the debug commands.
    #[serde(default)]
    pub admins: Vec<u64>,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default config file
            .add_source(File::with_name("config/default").required(false))
            // Override with local config if present
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (prefix: PASSFORGE_)
            // e.g., PASSFORGE_DISCORD__TOKEN, PASSFORGE_WORDLIST__PATH
            .add_source(
                Environment::with_prefix("PASSFORGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Initialize the global config singleton
    pub fn init() -> Result<&'static Self, ConfigError> {
        let config = Self::load()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    /// Get reference to the global config
    pub fn get() -> &'static Self {
        CONFIG
            .get()
            .expect("Config not initialized. Call AppConfig::init() first.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_default_bounds() {
        let config = WordlistConfig::default();
        assert_eq!(config.path, "/usr/share/dict/words");
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_length, 10);
    }

    #[test]
    fn test_root_defaults_are_empty_credentials() {
        let config = AppConfig::default();
        assert!(config.discord.token.is_empty());
        assert!(config.admins.is_empty());
    }
}
