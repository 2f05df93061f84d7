//! Pixel footprint estimation.

use crate::error::{require_positive, Result};
use crate::models::{CameraProfile, Detectability};
use crate::rules::DetectionRules;

/// Linear pixel span of a target of `target_size_m` at `slant_distance_m`.
///
/// Projects the target through the pinhole onto the sensor width and scales
/// by the horizontal resolution.
pub fn pixels_on_target(
    profile: &CameraProfile,
    target_size_m: f64,
    slant_distance_m: f64,
) -> Result<f64> {
    let slant = require_positive("slant_distance_m", slant_distance_m)?;
    let width = require_positive("sensor_width_mm", profile.sensor_width_mm)?;
    let focal = require_positive("focal_length_mm", profile.focal_length_mm)?;
    let size = require_positive("target_size_m", target_size_m)?;
    Ok((f64::from(profile.resolution_px) * size * focal) / (width * slant))
}

/// Classify a footprint against the configured threshold (strictly greater).
pub fn classify_pixels(pixels: f64, rules: &DetectionRules) -> Detectability {
    if pixels > rules.detection_threshold_px {
        Detectability::Detected
    } else {
        Detectability::Blurred
    }
}
