//! Configuration file support for cezi.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/cezi/config.toml`. Settings include the interpretation service
//! endpoint, the optional host integration, drawing surface appearance, and sharing text.
//!
//! If no config file exists, defaults are used. The defaults leave the endpoint and the
//! host credential at their "unset" sentinels, which run the tool in local test mode.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, HostConfig, ServiceConfig, ShareConfig};

use crate::draw::{Color, StrokeStyle, WHITE};
use crate::interpret::{ENDPOINT_UNSET, Endpoint};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `service.endpoint`.
pub const ENDPOINT_ENV: &str = "CEZI_ENDPOINT";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [service]
/// endpoint = "https://example.com/interpret"
/// timeout_secs = 60
///
/// [host]
/// enabled = false
/// credential = "YOUR_HOST_ID"
///
/// [canvas]
/// stroke_color = [26, 16, 37]
/// stroke_width = 6.0
/// background = "white"
///
/// [share]
/// title = "Cezi"
/// label = "🔮 Cezi reading"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Interpretation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Host application integration
    #[serde(default)]
    pub host: HostConfig,

    /// Drawing surface appearance
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Shared text settings
    #[serde(default)]
    pub share: ShareConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `service.timeout_secs`: 5 - 300
    /// - `canvas.stroke_width`: 1.0 - 40.0
    /// - `service.endpoint`: sentinel, empty, or an http(s) URL
    pub(crate) fn validate_and_clamp(&mut self) {
        if !(5..=300).contains(&self.service.timeout_secs) {
            log::warn!(
                "Invalid timeout_secs {}, clamping to 5-300 range",
                self.service.timeout_secs
            );
            self.service.timeout_secs = self.service.timeout_secs.clamp(5, 300);
        }

        if !(1.0..=40.0).contains(&self.canvas.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-40.0 range",
                self.canvas.stroke_width
            );
            self.canvas.stroke_width = if self.canvas.stroke_width.is_nan() {
                crate::draw::DEFAULT_STROKE_WIDTH
            } else {
                self.canvas.stroke_width.clamp(1.0, 40.0)
            };
        }

        if let Err(err) = Endpoint::try_parse(&self.service.endpoint) {
            log::warn!(
                "Invalid endpoint '{}' ({}), falling back to local test mode",
                self.service.endpoint.trim(),
                err
            );
            self.service.endpoint = ENDPOINT_UNSET.to_string();
        }
    }

    /// Applies environment overrides (currently only [`ENDPOINT_ENV`]).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV)
            && !endpoint.trim().is_empty()
        {
            info!("Using endpoint from {}", ENDPOINT_ENV);
            self.service.endpoint = endpoint;
        }
    }

    /// Returns the path to the configuration file (`~/.config/cezi/config.toml`).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("cezi");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// Environment overrides are applied before validation.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let config_str = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
            let config: Config = toml::from_str(&config_str).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;
            info!("Loaded config from {}", config_path.display());
            config
        } else {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            Self::default()
        };

        config.apply_env_overrides();
        config.validate_and_clamp();
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Parsed interpretation endpoint.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::parse(&self.service.endpoint)
    }

    /// Request timeout for the interpretation service.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }

    /// Stroke style for the drawing surface.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.canvas.stroke_color.to_color(),
            width: self.canvas.stroke_width,
        }
    }

    /// Opaque background color for the drawing surface.
    pub fn background(&self) -> Color {
        self.canvas.background.to_color_or(WHITE).opaque()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::INK;

    #[test]
    fn defaults_run_in_local_test_mode() {
        let config = Config::default();
        assert_eq!(config.endpoint(), Endpoint::Unconfigured);
        assert!(!config.host.enabled);
        assert_eq!(config.host.credential, crate::share::HOST_CREDENTIAL_UNSET);
        assert_eq!(config.stroke_style().color, INK);
        assert_eq!(config.stroke_style().width, 6.0);
        assert_eq!(config.background(), WHITE);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.timeout_secs, 60);
    }

    #[test]
    fn partial_file_is_merged_with_defaults_and_clamped() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[service]\nendpoint = \"https://example.com/exec\"\ntimeout_secs = 1\n\n\
             [canvas]\nstroke_width = 100.0\nbackground = [0, 0, 0]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.endpoint().is_configured());
        assert_eq!(config.service.timeout_secs, 5);
        assert_eq!(config.canvas.stroke_width, 40.0);
        assert_eq!(config.background(), crate::draw::BLACK);
        assert_eq!(config.share.title, "Cezi");
    }

    #[test]
    fn invalid_endpoint_falls_back_to_sentinel() {
        let mut config = Config::default();
        config.service.endpoint = "localhost without scheme".into();
        config.validate_and_clamp();
        assert_eq!(config.service.endpoint, ENDPOINT_UNSET);
    }

    #[test]
    fn rejected_endpoint_is_reported_once() {
        let mut config = Config::default();
        config.service.endpoint = "ftp://example.com/exec".into();
        config.validate_and_clamp();

        // The reset value parses cleanly, so building the client stays silent
        assert_eq!(
            Endpoint::try_parse(&config.service.endpoint),
            Ok(Endpoint::Unconfigured)
        );
        assert_eq!(config.endpoint(), Endpoint::Unconfigured);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[service\nendpoint =").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn example_file_parses() {
        let example: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(example.service.endpoint, ENDPOINT_UNSET);
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("cezi").join("config.toml");
        Config::create_default_file(&path).unwrap();
        assert!(path.exists());
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("service"));
        assert!(schema.contains("canvas"));
    }
}
