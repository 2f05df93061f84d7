//! Single-shot evaluation of a camera profile against a flight scenario.

use crate::error::Result;
use crate::geometry::target_bearing;
use crate::models::{CameraProfile, FlightScenario, VisibilityResult};
use crate::optics::field_of_view;
use crate::resolution::{classify_pixels, pixels_on_target};
use crate::rules::DetectionRules;
use crate::visibility::ViewBand;

/// Evaluate with the default detection threshold.
pub fn evaluate(profile: &CameraProfile, scenario: &FlightScenario) -> Result<VisibilityResult> {
    evaluate_with_rules(profile, scenario, &DetectionRules::default())
}

/// Run the full optics → geometry → visibility → footprint pipeline.
///
/// Pure and re-entrant. Inputs are validated before any math runs so a bad
/// profile or scenario fails with `InvalidInput` instead of producing NaN.
pub fn evaluate_with_rules(
    profile: &CameraProfile,
    scenario: &FlightScenario,
    rules: &DetectionRules,
) -> Result<VisibilityResult> {
    profile.validate()?;
    scenario.validate()?;

    let fov = field_of_view(profile)?;
    let bearing = target_bearing(scenario.horizontal_distance_m, scenario.relative_height_m);
    let band = ViewBand::from_pitch(scenario.pitch_deg, fov.vertical_deg);
    let check = band.classify(bearing.angle_deg);
    let pixels = pixels_on_target(profile, scenario.target_size_m, bearing.slant_distance_m)?;
    let detectability = classify_pixels(pixels, rules);

    tracing::trace!(
        target_angle_deg = bearing.angle_deg,
        visible = check.is_visible,
        margin_deg = check.margin_deg,
        pixels,
        "Evaluated interception geometry"
    );

    Ok(VisibilityResult {
        vfov_deg: fov.vertical_deg,
        hfov_deg: fov.horizontal_deg,
        target_angle_deg: bearing.angle_deg,
        ceiling_angle_deg: band.ceiling_deg,
        floor_angle_deg: band.floor_deg,
        is_visible: check.is_visible,
        margin_deg: check.margin_deg,
        excursion: check.excursion,
        slant_distance_m: bearing.slant_distance_m,
        pixels_on_target: pixels,
        detectability,
    })
}
