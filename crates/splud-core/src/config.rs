//! Player-facing settings supplied by the host at run start.
//!
//! Settings are read-only for the duration of a run. Missing keys in a
//! serialized form fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VOLUME, PLAYER_DEFAULT_SPEED};
use crate::enums::{Difficulty, WeaponKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Audio volume (0.0 - 1.0). Not used by the engine.
    pub volume: f64,
    pub difficulty: Difficulty,
    /// Starting movement speed (units/s).
    pub player_speed: f64,
    /// Weapon equipped at tier 0 when the run starts.
    pub selected_weapon: WeaponKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            difficulty: Difficulty::default(),
            player_speed: PLAYER_DEFAULT_SPEED,
            selected_weapon: WeaponKind::default(),
        }
    }
}

impl Settings {
    /// Clamp out-of-range values instead of rejecting them. Non-finite
    /// numbers fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            self.player_speed = PLAYER_DEFAULT_SPEED;
        }
        self
    }
}
