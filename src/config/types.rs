//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::interpret::ENDPOINT_UNSET;
use crate::share::HOST_CREDENTIAL_UNSET;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interpretation service settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ServiceConfig {
    /// Deployment URL of the interpretation service.
    /// Leave as "YOUR_DEPLOYMENT_URL" (or empty) to get a local placeholder answer.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (valid range: 5 - 300)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Host application integration settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HostConfig {
    /// Enable the host share picker (only used when running inside the host)
    #[serde(default)]
    pub enabled: bool,

    /// Identity credential for the host handshake.
    /// "YOUR_HOST_ID" (or empty) keeps the integration off.
    #[serde(default = "default_credential")]
    pub credential: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            credential: default_credential(),
        }
    }
}

/// Drawing surface appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Stroke color - a named color or an RGB array like `[26, 16, 37]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in logical pixels (valid range: 1.0 - 40.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Background color; always rendered opaque
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            background: default_background(),
        }
    }
}

/// Sharing settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShareConfig {
    /// Title passed to native share
    #[serde(default = "default_share_title")]
    pub title: String,

    /// Fixed label at the top of shared text
    #[serde(default = "default_share_label")]
    pub label: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: default_share_title(),
            label: default_share_label(),
        }
    }
}

fn default_endpoint() -> String {
    ENDPOINT_UNSET.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_credential() -> String {
    HOST_CREDENTIAL_UNSET.to_string()
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Rgb([26, 16, 37])
}

fn default_stroke_width() -> f64 {
    crate::draw::DEFAULT_STROKE_WIDTH
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_share_title() -> String {
    "Cezi".to_string()
}

fn default_share_label() -> String {
    "🔮 Cezi reading".to_string()
}
