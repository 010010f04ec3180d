//=========================================================================
// Drill Configuration
//=========================================================================
//
// Which drill is running and how it is tuned.
//
// Every drill starts from a built-in preset. A JSON file named by the
// `DRILL_CONFIG` environment variable may override any subset of the
// preset's fields:
//
// ```json
// { "resource_start": 90.0, "speed": 6.5 }
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

//=== Internal Dependencies ===============================================

use super::geometry::Vec2;
use crate::error::DrillError;

/// Environment variable naming a JSON override file.
pub const CONFIG_ENV: &str = "DRILL_CONFIG";

//=== DrillKind ===========================================================

/// The four disaster scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillKind {
    Earthquake,
    Flood,
    Heatwave,
    Drought,
}

impl DrillKind {
    /// Launcher menu order (digit keys 1 to 4).
    pub const MENU_ORDER: [DrillKind; 4] = [
        DrillKind::Flood,
        DrillKind::Earthquake,
        DrillKind::Heatwave,
        DrillKind::Drought,
    ];

    /// Stable name used for score keys and drill binaries.
    pub fn key(self) -> &'static str {
        match self {
            DrillKind::Earthquake => "earthquake",
            DrillKind::Flood => "flood",
            DrillKind::Heatwave => "heatwave",
            DrillKind::Drought => "drought",
        }
    }

    /// Label shown in the launcher.
    pub fn menu_label(self) -> &'static str {
        match self {
            DrillKind::Earthquake => "EARTHQUAKE DRILL",
            DrillKind::Flood => "FLOOD SIMULATION",
            DrillKind::Heatwave => "HEATWAVE SAFETY",
            DrillKind::Drought => "DROUGHT AWARENESS",
        }
    }
}

impl fmt::Display for DrillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

//=== DrillConfig =========================================================

/// Tuning for one drill round.
///
/// Hazard internals (water rise curve, particle ranges) are fixed per
/// kind; everything a player would notice is here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    pub kind: DrillKind,

    /// Window title prefix.
    pub title: String,
    /// Instruction line shown while the round runs.
    pub instruction: String,

    /// Resource name on the HUD ("Time Left", "Thirst Level"...).
    pub resource_label: String,
    /// Resource at round start; also the drought hydration cap.
    pub resource_start: f32,
    /// Resource lost per second.
    pub drain_per_second: f32,
    /// The HUD turns red strictly below this value.
    pub low_threshold: f32,

    /// Avatar speed in units per second.
    pub speed: f32,

    pub goal: Vec2,
    pub goal_tolerance: f32,

    /// Number of debris pieces, particles or water sources.
    pub entity_count: usize,

    pub success_message: String,
    pub failure_message: String,
}

impl DrillConfig {
    //--- Presets ----------------------------------------------------------

    pub fn preset(kind: DrillKind) -> Self {
        match kind {
            DrillKind::Earthquake => Self {
                kind,
                title: "Virtual Disaster Drill - Realistic Side View".into(),
                instruction: "Use WASD to move the man. Enter the green shelter before time runs out!"
                    .into(),
                resource_label: "Time Left".into(),
                resource_start: 30.0,
                drain_per_second: 1.0,
                low_threshold: 10.0,
                speed: 5.0,
                goal: Vec2::new(8.0, 1.0),
                goal_tolerance: 1.5,
                entity_count: 300,
                success_message: "Success! Entered Shelter!".into(),
                failure_message: "Time's up! Drill Failed!".into(),
            },
            DrillKind::Flood => Self {
                kind,
                title: "Virtual Disaster Drill - Flood Simulation".into(),
                instruction: "Use WASD to move. Reach the green safe zone before the flood water rises!"
                    .into(),
                resource_label: "Time Left".into(),
                resource_start: 60.0,
                drain_per_second: 1.0,
                low_threshold: 10.0,
                speed: 5.0,
                goal: Vec2::new(8.0, 2.0),
                goal_tolerance: 2.0,
                entity_count: 100,
                success_message: "Success! Reached Safe Zone!".into(),
                failure_message: "Time's up! Drill Failed!".into(),
            },
            DrillKind::Heatwave => Self {
                kind,
                title: "Virtual Disaster Drill - Heatwave Simulation".into(),
                instruction: "Use WASD to move. Find shade (green area) before heat exhaustion!".into(),
                resource_label: "Heat Resistance".into(),
                resource_start: 30.0,
                drain_per_second: 1.5,
                low_threshold: 10.0,
                speed: 4.0,
                goal: Vec2::new(8.0, 1.5),
                goal_tolerance: 2.0,
                entity_count: 50,
                success_message: "Success! Found Shade!".into(),
                failure_message: "Heat Exhaustion! Drill Failed!".into(),
            },
            DrillKind::Drought => Self {
                kind,
                title: "Virtual Disaster Drill - Drought Simulation".into(),
                instruction:
                    "Use WASD to move. Find water (blue spheres or green oasis) before dehydration!"
                        .into(),
                resource_label: "Thirst Level".into(),
                resource_start: 45.0,
                drain_per_second: 1.0,
                low_threshold: 10.0,
                speed: 5.0,
                goal: Vec2::new(8.0, 1.5),
                goal_tolerance: 2.0,
                entity_count: 3,
                success_message: "Success! Found Oasis!".into(),
                failure_message: "Dehydrated! Drill Failed!".into(),
            },
        }
    }

    //--- Overrides --------------------------------------------------------

    /// Applies a JSON object of field overrides on top of `self`.
    ///
    /// Unknown fields are rejected. `kind` cannot be changed: a drill
    /// binary always runs its own scenario.
    pub fn with_overrides(self, json: &str) -> Result<Self, serde_json::Error> {
        let patch: Value = serde_json::from_str(json)?;
        let Value::Object(patch) = patch else {
            return Err(invalid("override must be a JSON object"));
        };

        let mut merged = serde_json::to_value(&self)?;
        if let Value::Object(fields) = &mut merged {
            for (name, value) in patch {
                if !fields.contains_key(&name) {
                    return Err(invalid(format!("unknown field `{}`", name)));
                }
                fields.insert(name, value);
            }
        }

        let mut config: DrillConfig = serde_json::from_value(merged)?;
        if config.kind != self.kind {
            warn!("Ignoring kind override {} for the {} drill", config.kind, self.kind);
            config.kind = self.kind;
        }

        config.validate()?;
        Ok(config)
    }

    /// Preset for `kind`, with the `DRILL_CONFIG` file applied if set.
    pub fn from_env(kind: DrillKind) -> Result<Self, DrillError> {
        let preset = Self::preset(kind);
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => preset.with_override_file(Path::new(&path)),
            None => Ok(preset),
        }
    }

    /// Applies the overrides stored in `path`.
    pub fn with_override_file(self, path: &Path) -> Result<Self, DrillError> {
        let text = std::fs::read_to_string(path).map_err(|e| DrillError::io(path, e))?;
        let config = self
            .with_overrides(&text)
            .map_err(|e| DrillError::json(path, e))?;
        info!("Loaded {} drill overrides from {}", config.kind, path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), serde_json::Error> {
        if !(self.resource_start > 0.0) {
            return Err(invalid("resource_start must be positive"));
        }
        if self.drain_per_second < 0.0 || self.speed < 0.0 {
            return Err(invalid("drain_per_second and speed must not be negative"));
        }
        if !(self.goal_tolerance > 0.0) {
            return Err(invalid("goal_tolerance must be positive"));
        }
        Ok(())
    }
}

fn invalid(msg: impl fmt::Display) -> serde_json::Error {
    <serde_json::Error as serde::de::Error>::custom(msg)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_their_kind() {
        for kind in DrillKind::MENU_ORDER {
            assert_eq!(DrillConfig::preset(kind).kind, kind);
        }
    }

    #[test]
    fn preset_constants() {
        let flood = DrillConfig::preset(DrillKind::Flood);
        assert_eq!(flood.resource_start, 60.0);
        assert_eq!(flood.goal, Vec2::new(8.0, 2.0));

        let heat = DrillConfig::preset(DrillKind::Heatwave);
        assert_eq!(heat.drain_per_second, 1.5);
        assert_eq!(heat.speed, 4.0);

        let quake = DrillConfig::preset(DrillKind::Earthquake);
        assert_eq!(quake.goal_tolerance, 1.5);
        assert_eq!(quake.entity_count, 300);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DrillKind::Heatwave).unwrap(), "\"heatwave\"");
        assert_eq!(DrillKind::Drought.to_string(), "drought");
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let config = DrillConfig::preset(DrillKind::Drought)
            .with_overrides(r#"{ "resource_start": 90.0, "goal": { "x": 3.0, "y": 1.0 } }"#)
            .unwrap();

        assert_eq!(config.resource_start, 90.0);
        assert_eq!(config.goal, Vec2::new(3.0, 1.0));
        assert_eq!(config.resource_label, "Thirst Level");
    }

    #[test]
    fn kind_cannot_be_overridden() {
        let config = DrillConfig::preset(DrillKind::Flood)
            .with_overrides(r#"{ "kind": "drought" }"#)
            .unwrap();
        assert_eq!(config.kind, DrillKind::Flood);
    }

    #[test]
    fn bad_overrides_are_rejected() {
        let preset = || DrillConfig::preset(DrillKind::Flood);

        assert!(preset().with_overrides("[1, 2]").is_err());
        assert!(preset().with_overrides(r#"{ "sped": 3.0 }"#).is_err());
        assert!(preset().with_overrides(r#"{ "speed": "fast" }"#).is_err());
        assert!(preset().with_overrides(r#"{ "resource_start": 0.0 }"#).is_err());
        assert!(preset().with_overrides("{ not json").is_err());
    }

    #[test]
    fn override_file_errors_name_the_path() {
        let path = std::env::temp_dir().join("disaster_drills_missing_override.json");
        let err = DrillConfig::preset(DrillKind::Flood)
            .with_override_file(&path)
            .unwrap_err();
        assert!(matches!(err, DrillError::Io { .. }));
    }
}
