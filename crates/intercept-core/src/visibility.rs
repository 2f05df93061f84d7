//! Classification of a target bearing against the camera's vertical band.
//!
//! Angles are measured in the vertical plane with "up" positive. Pitching the
//! nose down by `pitch_deg` shifts the whole band down by the same amount.

use crate::models::Excursion;

/// Upper and lower edges of what the camera sees, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBand {
    pub ceiling_deg: f64,
    pub floor_deg: f64,
}

/// Result of testing one bearing against a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityCheck {
    pub is_visible: bool,
    /// Distance to the ceiling when visible, to the crossed edge otherwise
    pub margin_deg: f64,
    pub excursion: Option<Excursion>,
}

impl ViewBand {
    /// Band for a camera fixed along the drone's longitudinal axis.
    pub fn from_pitch(pitch_deg: f64, vfov_deg: f64) -> Self {
        let half = vfov_deg / 2.0;
        Self {
            ceiling_deg: -pitch_deg + half,
            floor_deg: -pitch_deg - half,
        }
    }

    /// Both edges are inclusive.
    pub fn contains(&self, target_angle_deg: f64) -> bool {
        self.floor_deg <= target_angle_deg && target_angle_deg <= self.ceiling_deg
    }

    pub fn classify(&self, target_angle_deg: f64) -> VisibilityCheck {
        if self.contains(target_angle_deg) {
            VisibilityCheck {
                is_visible: true,
                margin_deg: self.ceiling_deg - target_angle_deg,
                excursion: None,
            }
        } else if target_angle_deg > self.ceiling_deg {
            VisibilityCheck {
                is_visible: false,
                margin_deg: target_angle_deg - self.ceiling_deg,
                excursion: Some(Excursion::AboveCeiling),
            }
        } else {
            VisibilityCheck {
                is_visible: false,
                margin_deg: self.floor_deg - target_angle_deg,
                excursion: Some(Excursion::BelowFloor),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMX519_VFOV: f64 = 52.2701;

    #[test]
    fn pitched_band_misses_level_target() {
        let band = ViewBand::from_pitch(30.0, IMX519_VFOV);
        assert!((band.ceiling_deg + 3.865).abs() < 0.01);
        assert!((band.floor_deg + 56.135).abs() < 0.01);

        let check = band.classify(0.0);
        assert!(!check.is_visible);
        assert_eq!(check.excursion, Some(Excursion::AboveCeiling));
        assert!((check.margin_deg - 3.865).abs() < 0.01);
    }

    #[test]
    fn edges_are_inclusive() {
        let band = ViewBand {
            ceiling_deg: 10.0,
            floor_deg: -20.0,
        };
        let top = band.classify(10.0);
        assert!(top.is_visible);
        assert_eq!(top.margin_deg, 0.0);

        let bottom = band.classify(-20.0);
        assert!(bottom.is_visible);
        assert_eq!(bottom.margin_deg, 30.0);
    }

    #[test]
    fn below_floor_reports_positive_excursion() {
        let band = ViewBand::from_pitch(0.0, 40.0);
        let check = band.classify(-35.0);
        assert!(!check.is_visible);
        assert_eq!(check.excursion, Some(Excursion::BelowFloor));
        assert!((check.margin_deg - 15.0).abs() < 1e-9);
    }

    #[test]
    fn more_pitch_moves_band_down() {
        let level = ViewBand::from_pitch(0.0, 50.0);
        let pitched = ViewBand::from_pitch(20.0, 50.0);
        assert!((level.ceiling_deg - pitched.ceiling_deg - 20.0).abs() < 1e-9);
        assert!((level.floor_deg - pitched.floor_deg - 20.0).abs() < 1e-9);
        assert!(level.classify(0.0).is_visible);
    }
}
