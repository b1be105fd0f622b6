//! Configuration management for Usercraft
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (`USERCRAFT_*` prefix, `__` between levels)
//! 2. usercraft.local.toml (gitignored, local overrides)
//! 3. usercraft.toml (git-tracked, project config)
//! 4. ~/.config/usercraft/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Usercraft configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsercraftConfig {
    pub directory: DirectoryConfig,
    pub rules: RulesConfig,
    pub followers: FollowersConfig,
    pub output: OutputConfig,
}

/// A user name and age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub name: String,
    pub age: u32,
}

impl UserEntry {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Users the workshop starts from and adds along the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub seed: Vec<UserEntry>,
    pub new_user: UserEntry,
    pub friend: UserEntry,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                UserEntry::new("BruNo", 24),
                UserEntry::new("Ann@", 15),
                UserEntry::new("dian_a", 17),
                UserEntry::new("1gor", 24),
                UserEntry::new("Cloe", 18),
            ],
            new_user: UserEntry::new("Kate", 27),
            friend: UserEntry::new("Tom", 30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub adult_age: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { adult_age: 18 }
    }
}

/// Constants of `followers = (base + age) * multiplier`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowersConfig {
    pub base: u32,
    pub multiplier: u32,
}

impl Default for FollowersConfig {
    fn default() -> Self {
        Self {
            base: 100,
            multiplier: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
}

impl UsercraftConfig {
    /// Reject settings the workshop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let directory = &self.directory;
        let entries = directory
            .seed
            .iter()
            .chain([&directory.new_user, &directory.friend]);

        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "user names must not be empty (age {})",
                    entry.age
                )));
            }
        }

        if self.followers.multiplier == 0 {
            return Err(ConfigError::ValidationError(
                "followers.multiplier must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UsercraftConfig::default();
        assert_eq!(config.directory.seed.len(), 5);
        assert_eq!(config.directory.seed[0], UserEntry::new("BruNo", 24));
        assert_eq!(config.directory.new_user.name, "Kate");
        assert_eq!(config.directory.friend.name, "Tom");
        assert_eq!(config.rules.adult_age, 18);
        assert_eq!(config.followers.base, 100);
        assert_eq!(config.followers.multiplier, 10);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut config = UsercraftConfig::default();
        config.directory.friend.name = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_zero_multiplier_is_rejected() {
        let mut config = UsercraftConfig::default();
        config.followers.multiplier = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("multiplier"));
    }

    #[test]
    fn test_toml_rendering_round_trips() {
        let config = UsercraftConfig::default();
        let rendered = config.to_toml_string().unwrap();

        assert!(rendered.contains("adult_age = 18"));
        let parsed: UsercraftConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: UsercraftConfig = toml::from_str("[rules]\nadult_age = 21\n").unwrap();
        assert_eq!(parsed.rules.adult_age, 21);
        assert_eq!(parsed.directory, DirectoryConfig::default());
    }
}
