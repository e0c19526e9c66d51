//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (units). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking. Time is kept in whole milliseconds so that
/// cooldowns and wave timers compare exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Elapsed simulated time in milliseconds.
    pub elapsed_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Squared distance, for comparisons that don't need the root.
    pub fn distance_squared_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance_squared(other.as_dvec2())
    }

    /// Angle from this position to another in radians, measured from +x
    /// toward +y.
    pub fn angle_to(&self, other: &Position) -> f64 {
        let dy = other.y - self.y;
        let dx = other.x - self.x;
        dy.atan2(dx)
    }

    /// The point `distance` units away along `angle`.
    pub fn offset(&self, angle: f64, distance: f64) -> Position {
        (self.as_dvec2() + DVec2::from_angle(angle) * distance).into()
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of the given magnitude along `angle` (radians from +x).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        (DVec2::from_angle(angle) * speed).into()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Milliseconds per tick at the fixed tick rate.
    pub fn dt_ms(&self) -> u64 {
        crate::constants::TICK_MS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += self.dt_ms();
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

/// Normalized movement intent from the input collaborator.
///
/// Each axis is -1, 0 or 1 before normalization; diagonals are scaled by
/// `DIAGONAL_FACTOR` so they don't outrun straight movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub x: f64,
    pub y: f64,
}

impl MoveIntent {
    pub const IDLE: MoveIntent = MoveIntent { x: 0.0, y: 0.0 };

    /// Build an intent from raw axis directions. Values are clamped to
    /// the sign of the input.
    pub fn from_axes(horizontal: i8, vertical: i8) -> Self {
        let mut x = f64::from(horizontal.signum());
        let mut y = f64::from(vertical.signum());
        if x != 0.0 && y != 0.0 {
            x *= crate::constants::DIAGONAL_FACTOR;
            y *= crate::constants::DIAGONAL_FACTOR;
        }
        Self { x, y }
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
