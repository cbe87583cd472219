//! Configuration management for yuno-ride
//!
//! Config stored at: ~/.config/yuno-ride/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use yuno_domain::service::QuoteConfig;
use yuno_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// WhatsApp recipient for booking requests (country code, digits only)
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Brand shown in the booking message header
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Fleet catalog file (toml, json or csv)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Pickup time assumed when the form leaves it blank
    #[serde(default = "default_pickup_time")]
    pub default_pickup_time: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_whatsapp_number() -> String {
    "918951849454".to_string()
}

fn default_brand_name() -> String {
    "YUNO RIDE".to_string()
}

fn default_pickup_time() -> String {
    yuno_domain::service::quote_calculator::DEFAULT_PICKUP_TIME.to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            brand_name: default_brand_name(),
            catalog_path: None,
            default_pickup_time: default_pickup_time(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("yuno-ride");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Quote settings derived from this config
    pub fn quote_config(&self) -> Result<QuoteConfig> {
        let config = QuoteConfig::with_default_time(&self.default_pickup_time).map_err(|_| {
            ConfigError::ParseError(format!(
                "default_pickup_time must be HH:MM, got {:?}",
                self.default_pickup_time
            ))
        })?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Yuno Ride Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Brand:          {}", self.brand_name)?;
        writeln!(f, "WhatsApp:       +{}", self.whatsapp_number)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f, "Pickup time:    {}", self.default_pickup_time)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
