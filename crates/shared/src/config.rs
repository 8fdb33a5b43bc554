//! Configuration management for the anime portal.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site branding and page layout
    #[serde(default)]
    pub site: SiteConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Record counts requested per listing
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Interaction handler settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name appended to document titles
    pub name: String,

    /// Directory rendered pages are written to
    pub output_dir: String,

    /// Homepage file name
    pub home_page: String,

    /// Details page file name (navigation target for cards)
    pub details_page: String,

    /// Shows grid file name
    pub shows_page: String,

    /// Movies grid file name
    pub movies_page: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// Catalog API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Jikan API base URL
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Per-listing record limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Records requested for the current season
    pub current_season: u32,

    /// Records requested for the upcoming season
    pub upcoming_season: u32,

    /// Records requested for the top-rated list
    pub top_rated: u32,

    /// Records requested per search
    pub search: u32,
}

/// Interaction handler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Carousel auto-advance interval in milliseconds
    pub carousel_interval_ms: u64,

    /// Number of carousel slides populated from the current season
    pub carousel_slides: usize,

    /// Scroll offset past which the back-to-top button shows
    pub back_to_top_offset: f64,

    /// How long the contact confirmation stays visible, in milliseconds
    pub form_message_ms: u64,

    /// Maximum streaming platform buttons on the details page
    pub max_platforms: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Anime Portal".to_string(),
            output_dir: "site".to_string(),
            home_page: "index.html".to_string(),
            details_page: "animes.html".to_string(),
            shows_page: "anime.html".to_string(),
            movies_page: "movies.html".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jikan.moe/v4".to_string(),
            user_agent: "anime-portal/0.1.0".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            current_season: 8,
            upcoming_season: 8,
            top_rated: 10,
            search: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5000,
            carousel_slides: 3,
            back_to_top_offset: 300.0,
            form_message_ms: 5000,
            max_platforms: 6,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
            api: ApiConfig::default(),
            limits: LimitsConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Reject values the portal cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.ui.carousel_interval_ms == 0 {
            anyhow::bail!("ui.carousel_interval_ms must be greater than zero");
        }
        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }

    /// Get the directory rendered pages are written to
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.site.output_dir)
    }

    /// Get the log directory, resolved against the output directory when relative
    pub fn log_dir(&self) -> PathBuf {
        let log_path = Path::new(&self.logging.log_dir);
        if log_path.is_absolute() {
            log_path.to_path_buf()
        } else {
            self.output_dir().join(log_path)
        }
    }

    /// Parse the configured default log level
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .default_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
