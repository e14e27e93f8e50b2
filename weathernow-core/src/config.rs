use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{provider::ProviderId, units::TemperatureUnit};

/// Location looked up when geolocation is unavailable.
pub const FALLBACK_LOCATION: &str = "New York";

/// Base URLs of the Open-Meteo APIs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenMeteoConfig {
    #[serde(default = "OpenMeteoConfig::default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default = "OpenMeteoConfig::default_forecast_url")]
    pub forecast_url: String,
}

impl OpenMeteoConfig {
    fn default_geocoding_url() -> String {
        "https://geocoding-api.open-meteo.com".to_string()
    }

    fn default_forecast_url() -> String {
        "https://api.open-meteo.com".to_string()
    }
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: Self::default_geocoding_url(),
            forecast_url: Self::default_forecast_url(),
        }
    }
}

/// Credentials for the chat-completions endpoint used for summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizerConfig {
    #[serde(default = "SummarizerConfig::default_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "SummarizerConfig::default_model")]
    pub model: String,
}

impl SummarizerConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            api_key,
            model: Self::default_model(),
        }
    }

    fn default_endpoint() -> String {
        "https://api.openai.com/v1/chat/completions".to_string()
    }

    fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "synthetic" or "open-meteo"; synthetic when absent.
    pub default_provider: Option<String>,

    pub default_location: Option<String>,

    #[serde(default)]
    pub unit: TemperatureUnit,

    /// Delay synthetic lookups like a network call would.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,

    /// Example TOML:
    /// [summarizer]
    /// api_key = "..."
    pub summarizer: Option<SummarizerConfig>,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: None,
            default_location: None,
            unit: TemperatureUnit::default(),
            simulate_latency: default_simulate_latency(),
            open_meteo: OpenMeteoConfig::default(),
            summarizer: None,
        }
    }
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        match &self.default_provider {
            Some(s) => ProviderId::try_from(s.as_str()),
            None => Ok(ProviderId::Synthetic),
        }
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    pub fn default_location(&self) -> &str {
        self.default_location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_LOCATION)
    }

    /// Set or replace the summarizer API key, keeping any custom endpoint/model.
    pub fn upsert_summarizer_api_key(&mut self, api_key: String) {
        match &mut self.summarizer {
            Some(existing) => existing.api_key = api_key,
            None => self.summarizer = Some(SummarizerConfig::new(api_key)),
        }
    }

    pub fn is_summarizer_configured(&self) -> bool {
        self.summarizer
            .as_ref()
            .is_some_and(|s| !s.api_key.trim().is_empty())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
