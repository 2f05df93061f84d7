//! Vertical-plane geometry between the drone and its target.

/// Elevation and straight-line range from the drone to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBearing {
    /// Elevation angle, up positive
    pub angle_deg: f64,
    pub slant_distance_m: f64,
}

/// Signed elevation from the drone to the target, in degrees.
///
/// Independent of camera orientation. `atan2(0, 0)` yields 0.
pub fn target_angle_deg(horizontal_distance_m: f64, relative_height_m: f64) -> f64 {
    relative_height_m.atan2(horizontal_distance_m).to_degrees()
}

/// True line-of-sight distance, accounting for the height offset.
///
/// Zero when both offsets are zero; callers dividing by it must guard that.
pub fn slant_distance_m(horizontal_distance_m: f64, relative_height_m: f64) -> f64 {
    horizontal_distance_m.hypot(relative_height_m)
}

pub fn target_bearing(horizontal_distance_m: f64, relative_height_m: f64) -> TargetBearing {
    TargetBearing {
        angle_deg: target_angle_deg(horizontal_distance_m, relative_height_m),
        slant_distance_m: slant_distance_m(horizontal_distance_m, relative_height_m),
    }
}
