use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Project file name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "changelog.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "changelog-gen.toml";

/// Represents the complete configuration for changelog-gen.
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// strftime pattern used for bucket dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Link shown in the attribution footer
    #[serde(default = "default_credit_url")]
    pub credit_url: String,

    #[serde(default)]
    pub colors: ColorsConfig,
}

/// Long calendar date, pinned so output does not depend on the host locale.
fn default_date_format() -> String {
    "%A, %B %-d, %Y".to_string()
}

fn default_credit_url() -> String {
    "https://github.com/fergusonr/ChangeLogGenerator".to_string()
}

/// Banner colors used by the HTML, Markdown and RTF renderers.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ColorsConfig {
    #[serde(default = "default_foreground")]
    pub foreground: [u8; 3],

    #[serde(default = "default_tagged_background")]
    pub tagged_background: [u8; 3],

    #[serde(default = "default_untagged_background")]
    pub untagged_background: [u8; 3],
}

fn default_foreground() -> [u8; 3] {
    [255, 255, 255]
}

fn default_tagged_background() -> [u8; 3] {
    [0, 100, 0]
}

fn default_untagged_background() -> [u8; 3] {
    [255, 165, 0]
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            foreground: default_foreground(),
            tagged_background: default_tagged_background(),
            untagged_background: default_untagged_background(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: default_date_format(),
            credit_url: default_credit_url(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ChangelogError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject date patterns chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChangelogError::config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `changelog-gen.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config(path)?
    } else if Path::new(PROJECT_CONFIG_FILE).exists() {
        read_config(Path::new(PROJECT_CONFIG_FILE))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            read_config(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| ChangelogError::config(format!("cannot read {}: {}", path.display(), e)))
}
