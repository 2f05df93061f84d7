//! Pinhole field-of-view math.

use crate::error::{require_positive, Result};
use crate::models::CameraProfile;

/// Angular field of view along both sensor axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    pub horizontal_deg: f64,
    pub vertical_deg: f64,
}

/// Full field-of-view angle for one sensor dimension.
///
/// `2 * atan(d / 2f)`, converted to degrees. Fails with `InvalidInput` when
/// either length is non-positive or non-finite.
pub fn field_of_view_deg(sensor_dimension_mm: f64, focal_length_mm: f64) -> Result<f64> {
    let focal = require_positive("focal_length_mm", focal_length_mm)?;
    let dimension = require_positive("sensor_dimension_mm", sensor_dimension_mm)?;
    Ok((2.0 * (dimension / (2.0 * focal)).atan()).to_degrees())
}

/// Horizontal FOV from the sensor width, vertical FOV from the sensor height.
pub fn field_of_view(profile: &CameraProfile) -> Result<FieldOfView> {
    Ok(FieldOfView {
        horizontal_deg: field_of_view_deg(profile.sensor_width_mm, profile.focal_length_mm)?,
        vertical_deg: field_of_view_deg(profile.sensor_height_mm, profile.focal_length_mm)?,
    })
}
