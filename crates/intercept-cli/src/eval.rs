//! One-shot evaluation with preset field overrides.

use anyhow::{Context, Result};
use intercept_core::{evaluate_with_rules, CameraPresetRegistry, DetectionRules, FlightScenario};

use crate::report::Report;

/// Inputs for a single `eval` run.
///
/// Unset intrinsics fall back to the selected preset's values.
#[derive(Debug, Clone)]
pub struct EvalRequest {
    pub camera: Option<String>,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub focal_mm: Option<f64>,
    pub resolution_px: Option<u32>,
    pub scenario: FlightScenario,
    /// Store the edited profile under this name before evaluating
    pub save_as: Option<String>,
}

impl Default for EvalRequest {
    fn default() -> Self {
        Self {
            camera: None,
            width_mm: None,
            height_mm: None,
            focal_mm: None,
            resolution_px: None,
            scenario: FlightScenario::default(),
            save_as: None,
        }
    }
}

/// Resolve the preset, apply overrides, optionally save, then evaluate.
pub fn run_eval(
    registry: &mut CameraPresetRegistry,
    default_camera: &str,
    rules: &DetectionRules,
    request: EvalRequest,
) -> Result<Report> {
    let camera = request.camera.unwrap_or_else(|| default_camera.to_string());
    let mut profile = registry
        .get(&camera)
        .with_context(|| format!("Unknown camera preset '{camera}'"))?;

    if let Some(width) = request.width_mm {
        profile.sensor_width_mm = width;
    }
    if let Some(height) = request.height_mm {
        profile.sensor_height_mm = height;
    }
    if let Some(focal) = request.focal_mm {
        profile.focal_length_mm = focal;
    }
    if let Some(resolution) = request.resolution_px {
        profile.resolution_px = resolution;
    }

    let label = match request.save_as {
        Some(name) => {
            registry
                .upsert(name.clone(), profile)
                .with_context(|| format!("Failed to save preset '{name}'"))?;
            tracing::info!(preset = %name, "Saved camera preset");
            name
        }
        None => camera,
    };

    let result =
        evaluate_with_rules(&profile, &request.scenario, rules).context("Evaluation failed")?;
    Ok(Report::new(label, profile, request.scenario, result))
}
