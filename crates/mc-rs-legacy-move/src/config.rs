use serde::Deserialize;
use std::path::Path;

use crate::movement::{EYE_HEIGHT, POSITION_PRECISION, TELEPORT_TOLERANCE_SQ};
use crate::rollback::MAX_ROLLBACK_DISTANCE_SQ;

#[derive(Debug, Default, Deserialize)]
pub struct LegacyMoveConfig {
    #[serde(default)]
    pub movement: MovementSection,
    #[serde(default)]
    pub rollback: RollbackSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovementSection {
    /// Squared distance a post-teleport sample may sit from the server position.
    #[serde(default = "default_teleport_tolerance_sq")]
    pub teleport_tolerance_sq: f32,
    /// Offset between the client's eye position and the player's feet.
    #[serde(default = "default_eye_height")]
    pub eye_height: f32,
    /// Decimal places incoming positions are rounded to.
    #[serde(default = "default_position_precision")]
    pub position_precision: u32,
}

fn default_teleport_tolerance_sq() -> f32 {
    TELEPORT_TOLERANCE_SQ
}

fn default_eye_height() -> f32 {
    EYE_HEIGHT
}

fn default_position_precision() -> u32 {
    POSITION_PRECISION
}

impl Default for MovementSection {
    fn default() -> Self {
        Self {
            teleport_tolerance_sq: default_teleport_tolerance_sq(),
            eye_height: default_eye_height(),
            position_precision: default_position_precision(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RollbackSection {
    /// Players at or beyond this squared distance get no block resend.
    #[serde(default = "default_max_distance_sq")]
    pub max_distance_sq: f32,
}

fn default_max_distance_sq() -> f32 {
    MAX_ROLLBACK_DISTANCE_SQ
}

impl Default for RollbackSection {
    fn default() -> Self {
        Self {
            max_distance_sq: default_max_distance_sq(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LegacyMoveConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
