pub mod engine;
pub mod error;
pub mod geometry;
pub mod models;
pub mod optics;
pub mod registry;
pub mod resolution;
pub mod rules;
pub mod visibility;

pub use engine::{evaluate, evaluate_with_rules};
pub use error::{InterceptError, Result};
pub use geometry::{slant_distance_m, target_angle_deg, target_bearing, TargetBearing};
pub use models::{CameraProfile, Detectability, Excursion, FlightScenario, VisibilityResult};
pub use optics::{field_of_view, field_of_view_deg, FieldOfView};
pub use registry::{CameraPresetRegistry, DEFAULT_PRESETS};
pub use resolution::{classify_pixels, pixels_on_target};
pub use rules::{DetectionRules, DEFAULT_DETECTION_THRESHOLD_PX};
pub use visibility::{ViewBand, VisibilityCheck};
