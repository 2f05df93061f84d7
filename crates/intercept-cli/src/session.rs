//! Line-delimited JSON session over a single camera registry.
//!
//! Each input line is one request tagged by `op`; each gets exactly one JSON
//! response line. A failing request produces `{"ok": false, "error": ..}` and
//! the session keeps going.

use anyhow::{anyhow, Context, Result};
use intercept_core::{
    evaluate_with_rules, CameraPresetRegistry, CameraProfile, DetectionRules, FlightScenario,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};

use crate::report::Report;

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionRequest {
    List,
    Get {
        name: String,
    },
    Upsert {
        name: String,
        profile: CameraProfile,
    },
    Evaluate {
        /// Preset to resolve; ignored when `profile` is given
        #[serde(default)]
        camera: Option<String>,
        #[serde(default)]
        profile: Option<CameraProfile>,
        scenario: FlightScenario,
        #[serde(default)]
        threshold_px: Option<f64>,
    },
}

/// One user session: owns its registry for its whole lifetime.
pub struct Session {
    registry: CameraPresetRegistry,
    rules: DetectionRules,
}

impl Session {
    pub fn new(registry: CameraPresetRegistry, rules: DetectionRules) -> Self {
        Self { registry, rules }
    }

    pub fn registry(&self) -> &CameraPresetRegistry {
        &self.registry
    }

    /// Serve requests until EOF. Blank lines are skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line.context("Failed to read session input")?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line);
            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Value {
        let outcome = serde_json::from_str::<SessionRequest>(line)
            .context("Malformed request")
            .and_then(|request| self.handle(request));

        match outcome {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Session request failed: {:#}", e);
                json!({ "ok": false, "error": format!("{e:#}") })
            }
        }
    }

    pub fn handle(&mut self, request: SessionRequest) -> Result<Value> {
        match request {
            SessionRequest::List => Ok(json!({ "ok": true, "names": self.registry.list_names() })),
            SessionRequest::Get { name } => {
                let profile = self.registry.get(&name)?;
                Ok(json!({ "ok": true, "name": name, "profile": profile }))
            }
            SessionRequest::Upsert { name, profile } => {
                let replaced = self.registry.contains(&name);
                self.registry.upsert(name.clone(), profile)?;
                Ok(json!({ "ok": true, "name": name, "replaced": replaced }))
            }
            SessionRequest::Evaluate {
                camera,
                profile,
                scenario,
                threshold_px,
            } => {
                let (label, profile) = match (profile, camera) {
                    (Some(profile), camera) => {
                        (camera.unwrap_or_else(|| "custom".to_string()), profile)
                    }
                    (None, Some(camera)) => {
                        let profile = self.registry.get(&camera)?;
                        (camera, profile)
                    }
                    (None, None) => return Err(anyhow!("evaluate needs `camera` or `profile`")),
                };
                let rules = match threshold_px {
                    Some(px) => DetectionRules::with_threshold(px)?,
                    None => self.rules,
                };
                let result = evaluate_with_rules(&profile, &scenario, &rules)?;
                let report = Report::new(label, profile, scenario, result);
                Ok(json!({ "ok": true, "report": report }))
            }
        }
    }
}
