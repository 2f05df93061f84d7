//! Detection thresholds for footprint classification.

use crate::error::{require_finite, InterceptError, Result};

/// Pixel span above which a target counts as resolvable.
pub const DEFAULT_DETECTION_THRESHOLD_PX: f64 = 15.0;

/// Configuration for detectability classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRules {
    /// Minimum pixel footprint (exclusive) for a `Detected` classification
    pub detection_threshold_px: f64,
}

impl Default for DetectionRules {
    fn default() -> Self {
        Self {
            detection_threshold_px: DEFAULT_DETECTION_THRESHOLD_PX,
        }
    }
}

impl DetectionRules {
    /// Rules with a custom threshold; it must be finite and non-negative.
    pub fn with_threshold(detection_threshold_px: f64) -> Result<Self> {
        require_finite("detection_threshold_px", detection_threshold_px)?;
        if detection_threshold_px < 0.0 {
            return Err(InterceptError::invalid(
                "detection_threshold_px",
                format!("must be >= 0, got {detection_threshold_px}"),
            ));
        }
        Ok(Self {
            detection_threshold_px,
        })
    }
}
