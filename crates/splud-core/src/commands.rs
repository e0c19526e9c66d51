//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;
use crate::types::MoveIntent;

/// All possible player and host actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// Set the movement intent used from this tick on.
    Move { intent: MoveIntent },

    // --- Shop ---
    /// Buy a weapon into the next free slot.
    BuyWeapon { weapon: WeaponKind },
    /// Upgrade the weapon in the given slot by one tier.
    UpgradeWeapon { slot: usize },
    /// Leave the shop and start the next wave.
    ContinueWave,

    // --- Simulation control ---
    /// Freeze all timers.
    Pause,
    /// Resume from the exact remaining durations.
    Resume,
    /// Start a fresh run (only valid after game over).
    Restart,
}
