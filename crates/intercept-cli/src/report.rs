//! Report rendering for evaluation results.

use intercept_core::{CameraProfile, Detectability, Excursion, FlightScenario, VisibilityResult};
use serde::Serialize;
use std::fmt;

/// Cone radius relative to the slant distance, so the target sits inside it.
const CONE_RADIUS_FACTOR: f64 = 1.15;

/// Side-view triangle of what the camera sees, in metres (x forward, y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewCone {
    pub apex: (f64, f64),
    pub ceiling_edge: (f64, f64),
    pub floor_edge: (f64, f64),
    pub target: (f64, f64),
    pub radius_m: f64,
}

impl ViewCone {
    pub fn from_result(result: &VisibilityResult, scenario: &FlightScenario) -> Self {
        let radius_m = result.slant_distance_m * CONE_RADIUS_FACTOR;
        let edge = |angle_deg: f64| {
            let rad = angle_deg.to_radians();
            (radius_m * rad.cos(), radius_m * rad.sin())
        };
        Self {
            apex: (0.0, 0.0),
            ceiling_edge: edge(result.ceiling_angle_deg),
            floor_edge: edge(result.floor_angle_deg),
            target: (scenario.horizontal_distance_m, scenario.relative_height_m),
            radius_m,
        }
    }
}

/// Everything a presentation layer needs for one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub camera: String,
    pub profile: CameraProfile,
    pub scenario: FlightScenario,
    pub result: VisibilityResult,
    pub cone: ViewCone,
}

impl Report {
    pub fn new(
        camera: impl Into<String>,
        profile: CameraProfile,
        scenario: FlightScenario,
        result: VisibilityResult,
    ) -> Self {
        let cone = ViewCone::from_result(&result, &scenario);
        Self {
            camera: camera.into(),
            profile,
            scenario,
            result,
            cone,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        let p = &self.profile;
        let quality = match r.detectability {
            Detectability::Detected => "Detected",
            Detectability::Blurred => "Blurred",
        };

        writeln!(
            f,
            "Camera: {} ({:.2} x {:.2} mm, f {:.2} mm, {} px)",
            self.camera, p.sensor_width_mm, p.sensor_height_mm, p.focal_length_mm, p.resolution_px
        )?;
        writeln!(f, "FOV vertical: {:.1}°  horizontal: {:.1}°", r.vfov_deg, r.hfov_deg)?;
        writeln!(
            f,
            "Target angle: {:.1}°  view band: [{:.1}°, {:.1}°]",
            r.target_angle_deg, r.floor_angle_deg, r.ceiling_angle_deg
        )?;
        writeln!(f, "Slant distance: {:.1} m", r.slant_distance_m)?;
        writeln!(f, "Pixels on target: {:.1} px ({quality})", r.pixels_on_target)?;

        match r.excursion {
            None => writeln!(f, "Status: VISIBLE ({:.1}° below the ceiling)", r.margin_deg),
            Some(Excursion::AboveCeiling) => writeln!(
                f,
                "Status: LOST (target is {:.1}° above the camera's view)",
                r.margin_deg
            ),
            Some(Excursion::BelowFloor) => writeln!(
                f,
                "Status: LOST (target is {:.1}° below the camera's view)",
                r.margin_deg
            ),
        }
    }
}
