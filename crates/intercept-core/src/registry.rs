//! Named camera presets.
//!
//! One registry belongs to one session. It is a plain owned value: callers
//! pass it by reference and nothing in this crate keeps a global copy.

use crate::error::{InterceptError, Result};
use crate::models::CameraProfile;

/// Built-in presets, in display order.
pub const DEFAULT_PRESETS: [(&str, CameraProfile); 4] = [
    (
        "Arducam IMX519 (Stock)",
        CameraProfile {
            sensor_width_mm: 5.6,
            sensor_height_mm: 4.2,
            focal_length_mm: 4.28,
            resolution_px: 4656,
        },
    ),
    (
        "RPi HQ (Lente 6mm)",
        CameraProfile {
            sensor_width_mm: 6.17,
            sensor_height_mm: 4.55,
            focal_length_mm: 6.0,
            resolution_px: 4056,
        },
    ),
    (
        "GoPro Hero (Wide)",
        CameraProfile {
            sensor_width_mm: 6.17,
            sensor_height_mm: 4.55,
            focal_length_mm: 2.5,
            resolution_px: 4000,
        },
    ),
    (
        "Fisheye Genérica (1.8mm)",
        CameraProfile {
            sensor_width_mm: 5.6,
            sensor_height_mm: 4.2,
            focal_length_mm: 1.8,
            resolution_px: 2000,
        },
    ),
];

/// Insertion-ordered store of camera presets keyed by display name.
///
/// Entries are created or overwritten through [`upsert`](Self::upsert) and
/// never removed. The preset table is small, so lookups scan a `Vec` and
/// keep the order stable across overwrites.
#[derive(Debug, Clone)]
pub struct CameraPresetRegistry {
    entries: Vec<(String, CameraProfile)>,
}

impl Default for CameraPresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraPresetRegistry {
    /// Create a registry seeded with [`DEFAULT_PRESETS`].
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_PRESETS
                .iter()
                .map(|(name, profile)| (name.to_string(), *profile))
                .collect(),
        }
    }

    /// Create a registry with no presets.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Preset names: seeded defaults first, then user additions.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Result<CameraProfile> {
        self.position(name)
            .map(|idx| self.entries[idx].1)
            .ok_or_else(|| InterceptError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert a preset, or replace the one already stored under `name`.
    ///
    /// Replacing keeps the entry's original position. Profiles that would
    /// make the optics formulas undefined are rejected, as are blank names.
    pub fn upsert(&mut self, name: impl Into<String>, profile: CameraProfile) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InterceptError::invalid("name", "preset name must not be empty"));
        }
        profile.validate()?;

        match self.position(&name) {
            Some(idx) => {
                tracing::debug!(preset = %name, "Overwriting camera preset");
                self.entries[idx].1 = profile;
            }
            None => {
                tracing::debug!(preset = %name, "Adding camera preset");
                self.entries.push((name, profile));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CameraProfile)> {
        self.entries.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_defaults_in_order() {
        let registry = CameraPresetRegistry::new();
        assert_eq!(
            registry.list_names(),
            vec![
                "Arducam IMX519 (Stock)",
                "RPi HQ (Lente 6mm)",
                "GoPro Hero (Wide)",
                "Fisheye Genérica (1.8mm)",
            ]
        );

        let gopro = registry.get("GoPro Hero (Wide)").unwrap();
        assert_eq!(gopro, CameraProfile::new(6.17, 4.55, 2.5, 4000));
        let fisheye = registry.get("Fisheye Genérica (1.8mm)").unwrap();
        assert_eq!(fisheye.resolution_px, 2000);
    }

    #[test]
    fn test_upsert_round_trip() {
        let mut registry = CameraPresetRegistry::new();
        let custom = CameraProfile::new(7.6, 5.7, 8.0, 3840);
        registry.upsert("Custom 8mm", custom).unwrap();
        assert_eq!(registry.get("Custom 8mm").unwrap(), custom);
        assert_eq!(registry.list_names().last().map(String::as_str), Some("Custom 8mm"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = CameraPresetRegistry::new();
        let tuned = CameraProfile::new(6.17, 4.55, 12.0, 4056);
        registry.upsert("RPi HQ (Lente 6mm)", tuned).unwrap();
        registry.upsert("RPi HQ (Lente 6mm)", tuned).unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.list_names()[1], "RPi HQ (Lente 6mm)");
        assert_eq!(registry.get("RPi HQ (Lente 6mm)").unwrap(), tuned);
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = CameraPresetRegistry::new();
        assert_eq!(
            registry.get("nonexistent"),
            Err(InterceptError::NotFound("nonexistent".to_string()))
        );
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn test_upsert_rejects_invalid_entries() {
        let mut registry = CameraPresetRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.upsert("  ", CameraProfile::new(5.6, 4.2, 4.28, 4656)).is_err());
        assert!(registry.upsert("Broken", CameraProfile::new(5.6, 4.2, 0.0, 4656)).is_err());
        assert!(registry.is_empty());
    }
}
