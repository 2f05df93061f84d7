//! CLI configuration from environment.

use anyhow::{Context, Result};
use clap::ValueEnum;
use intercept_core::{DetectionRules, DEFAULT_DETECTION_THRESHOLD_PX};
use std::env;

pub const DEFAULT_CAMERA: &str = "Arducam IMX519 (Stock)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub default_camera: String,
    pub detection_threshold_px: f64,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_camera: DEFAULT_CAMERA.to_string(),
            detection_threshold_px: DEFAULT_DETECTION_THRESHOLD_PX,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            default_camera: lookup("INTERCEPT_DEFAULT_CAMERA")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.default_camera),
            detection_threshold_px: lookup("INTERCEPT_DETECTION_THRESHOLD_PX")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| DetectionRules::with_threshold(*v).is_ok())
                .unwrap_or(defaults.detection_threshold_px),
            output: lookup("INTERCEPT_OUTPUT")
                .and_then(|s| OutputFormat::from_str(&s, true).ok())
                .unwrap_or(defaults.output),
        }
    }

    /// Detection rules for this run; an explicit threshold wins over the
    /// configured one and is validated the same way.
    pub fn detection_rules(&self, threshold_px: Option<f64>) -> Result<DetectionRules> {
        let threshold = threshold_px.unwrap_or(self.detection_threshold_px);
        DetectionRules::with_threshold(threshold)
            .with_context(|| format!("Invalid detection threshold {threshold}"))
    }
}
