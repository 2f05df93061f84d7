//! Core data models for interception analysis.

use crate::error::{require_finite, require_positive, InterceptError, Result};
use serde::{Deserialize, Serialize};

/// Camera intrinsics needed for field-of-view and footprint estimates.
///
/// Accepts the compact `{w, h, f, r}` keys when deserializing so preset
/// tables written in that layout load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraProfile {
    #[serde(alias = "w")]
    pub sensor_width_mm: f64,
    #[serde(alias = "h")]
    pub sensor_height_mm: f64,
    #[serde(alias = "f")]
    pub focal_length_mm: f64,
    /// Horizontal pixel count
    #[serde(alias = "r")]
    pub resolution_px: u32,
}

impl CameraProfile {
    pub fn new(
        sensor_width_mm: f64,
        sensor_height_mm: f64,
        focal_length_mm: f64,
        resolution_px: u32,
    ) -> Self {
        Self {
            sensor_width_mm,
            sensor_height_mm,
            focal_length_mm,
            resolution_px,
        }
    }

    /// Check that every intrinsic is strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        require_positive("sensor_width_mm", self.sensor_width_mm)?;
        require_positive("sensor_height_mm", self.sensor_height_mm)?;
        require_positive("focal_length_mm", self.focal_length_mm)?;
        if self.resolution_px == 0 {
            return Err(InterceptError::invalid("resolution_px", "must be > 0, got 0"));
        }
        Ok(())
    }
}

/// A single vertical-plane flight geometry to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightScenario {
    /// Nose-down tilt in degrees
    pub pitch_deg: f64,
    pub horizontal_distance_m: f64,
    /// Positive when the target is above the drone
    #[serde(default)]
    pub relative_height_m: f64,
    /// Physical linear size of the target
    pub target_size_m: f64,
}

impl Default for FlightScenario {
    fn default() -> Self {
        Self::new(30.0, 50.0, 0.3)
    }
}

impl FlightScenario {
    /// Create a level scenario (target at the drone's altitude).
    pub fn new(pitch_deg: f64, horizontal_distance_m: f64, target_size_m: f64) -> Self {
        Self {
            pitch_deg,
            horizontal_distance_m,
            relative_height_m: 0.0,
            target_size_m,
        }
    }

    /// Set the target's height relative to the drone.
    pub fn with_relative_height(mut self, relative_height_m: f64) -> Self {
        self.relative_height_m = relative_height_m;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("pitch_deg", self.pitch_deg)?;
        require_positive("horizontal_distance_m", self.horizontal_distance_m)?;
        require_finite("relative_height_m", self.relative_height_m)?;
        require_positive("target_size_m", self.target_size_m)?;
        Ok(())
    }
}

/// Whether the estimated footprint is large enough to resolve the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Detectability {
    /// Footprint above the detection threshold
    Detected,
    /// Footprint at or below the threshold
    Blurred,
}

/// Which edge of the viewing band a lost target has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Excursion {
    AboveCeiling,
    BelowFloor,
}

/// Outcome of evaluating one profile against one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityResult {
    pub vfov_deg: f64,
    pub hfov_deg: f64,
    pub target_angle_deg: f64,
    pub ceiling_angle_deg: f64,
    pub floor_angle_deg: f64,
    pub is_visible: bool,
    /// Safety margin when visible, size of the excursion when not
    pub margin_deg: f64,
    /// `None` while the target is inside the band
    pub excursion: Option<Excursion>,
    pub slant_distance_m: f64,
    pub pixels_on_target: f64,
    pub detectability: Detectability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_validation_names_offending_field() {
        let profile = CameraProfile::new(5.6, 4.2, 0.0, 4656);
        match profile.validate() {
            Err(InterceptError::InvalidInput { field, .. }) => assert_eq!(field, "focal_length_mm"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let profile = CameraProfile::new(5.6, 4.2, 4.28, 0);
        assert!(profile.validate().is_err());
        assert!(CameraProfile::new(5.6, 4.2, 4.28, 4656).validate().is_ok());
    }

    #[test]
    fn profile_reads_compact_keys() {
        let json = r#"{"w": 6.17, "h": 4.55, "f": 6.0, "r": 4056}"#;
        let profile: CameraProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, CameraProfile::new(6.17, 4.55, 6.0, 4056));
    }

    #[test]
    fn scenario_height_defaults_to_zero() {
        let json = r#"{"pitch_deg": 10, "horizontal_distance_m": 20, "target_size_m": 0.5}"#;
        let scenario: FlightScenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.relative_height_m, 0.0);
        assert_eq!(scenario, FlightScenario::new(10.0, 20.0, 0.5));
    }

    #[test]
    fn scenario_rejects_non_positive_distance() {
        let scenario = FlightScenario::new(30.0, 0.0, 0.3);
        assert!(scenario.validate().is_err());
        let scenario = FlightScenario::new(30.0, 50.0, 0.3).with_relative_height(f64::INFINITY);
        assert!(scenario.validate().is_err());
    }
}
