use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine config dir")]
    NoConfigDir,
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::InvalidColor(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub default_root: String, // directory holding <skill>/SKILL.md folders
    pub color: ColorMode,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_root: "skills".to_string(),
            color: ColorMode::Auto,
        }
    }
}

impl UserConfig {
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "default_root" => Ok(self.default_root.clone()),
            "color" => Ok(self.color.as_str().to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_root" => self.default_root = value.to_string(),
            "color" => self.color = ColorMode::parse(value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

pub fn config_dir() -> Result<PathBuf> {
    // Tests point this at a temp dir
    if let Some(dir) = std::env::var_os("SKCHECK_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let pd = ProjectDirs::from("", "", "skcheck").ok_or(ConfigError::NoConfigDir)?;
    Ok(pd.config_dir().to_path_buf())
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_or_default() -> Result<UserConfig> {
    let path = config_path()?;
    if path.exists() {
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: UserConfig =
            serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    } else {
        Ok(UserConfig::default())
    }
}

pub fn save(cfg: &UserConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config dir {}", parent.display()))?;
    }
    let pretty = serde_json::to_string_pretty(cfg)?;
    fs::write(&path, pretty).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
