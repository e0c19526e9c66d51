//! Wave state machine.
//!
//! `Combat(wave, timer)` → `Shop(wave)` → `Combat(wave + 1, 60 s)` → …, with
//! `GameOver` reachable from any combat phase and absorbing. The controller
//! also owns the spawn schedule, which only runs during combat.

use splud_core::constants::{
    INITIAL_SPAWN_INTERVAL_MS, MIN_SPAWN_INTERVAL_MS, SPAWN_INTERVAL_STEP_MS, WAVE_DURATION_MS,
};
use splud_core::enums::RunPhase;

/// Spawn cadence for a wave. The first wave uses the initial interval; later
/// waves shrink by a fixed step per wave number down to the floor.
pub fn spawn_interval_ms(wave: u32) -> u64 {
    if wave <= 1 {
        return INITIAL_SPAWN_INTERVAL_MS;
    }
    INITIAL_SPAWN_INTERVAL_MS
        .saturating_sub(u64::from(wave) * SPAWN_INTERVAL_STEP_MS)
        .max(MIN_SPAWN_INTERVAL_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    Combat {
        remaining_ms: u64,
    },
    Shop,
    GameOver {
        score: u64,
        total_exp: u64,
        total_gold: u64,
    },
}

/// Result of advancing the combat clock by one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveTick {
    /// Spawn timer firings that fell inside this tick.
    pub spawns_due: u32,
    /// The combat timer reached zero this tick.
    pub expired: bool,
    /// New whole-second countdown value, when it changed.
    pub secs_remaining: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveController {
    wave: u32,
    phase: WavePhase,
    spawn_interval_ms: u64,
    /// Combat time accumulated toward the next spawn.
    spawn_accumulator_ms: u64,
}

impl Default for WaveController {
    fn default() -> Self {
        Self {
            wave: 1,
            phase: WavePhase::Combat {
                remaining_ms: WAVE_DURATION_MS,
            },
            spawn_interval_ms: spawn_interval_ms(1),
            spawn_accumulator_ms: 0,
        }
    }
}

impl WaveController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn run_phase(&self) -> RunPhase {
        match self.phase {
            WavePhase::Combat { .. } => RunPhase::Combat,
            WavePhase::Shop => RunPhase::Shop,
            WavePhase::GameOver { .. } => RunPhase::GameOver,
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(self.phase, WavePhase::Combat { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, WavePhase::GameOver { .. })
    }

    pub fn remaining_ms(&self) -> u64 {
        match self.phase {
            WavePhase::Combat { remaining_ms } => remaining_ms,
            _ => 0,
        }
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        self.spawn_interval_ms
    }

    /// Advance the combat timer and spawn schedule by `dt_ms`. Outside of
    /// combat nothing moves.
    pub fn advance(&mut self, dt_ms: u64) -> WaveTick {
        let WavePhase::Combat { remaining_ms } = self.phase else {
            return WaveTick::default();
        };

        let remaining = remaining_ms.saturating_sub(dt_ms);
        self.phase = WavePhase::Combat {
            remaining_ms: remaining,
        };

        let before_secs = remaining_ms.div_ceil(1000);
        let after_secs = remaining.div_ceil(1000);
        let secs_remaining = (after_secs != before_secs).then_some(after_secs);

        if remaining == 0 {
            return WaveTick {
                spawns_due: 0,
                expired: true,
                secs_remaining,
            };
        }

        self.spawn_accumulator_ms += dt_ms;
        let mut spawns_due = 0;
        while self.spawn_accumulator_ms >= self.spawn_interval_ms {
            self.spawn_accumulator_ms -= self.spawn_interval_ms;
            spawns_due += 1;
        }

        WaveTick {
            spawns_due,
            expired: false,
            secs_remaining,
        }
    }

    /// Combat → Shop. Halts the spawn schedule. Returns false outside combat.
    pub fn end_combat(&mut self) -> bool {
        if !self.is_combat() {
            return false;
        }
        self.phase = WavePhase::Shop;
        self.spawn_accumulator_ms = 0;
        true
    }

    /// Shop → Combat for the next wave with a fresh timer and cadence.
    /// Returns false outside the shop.
    pub fn start_next_wave(&mut self) -> bool {
        if self.phase != WavePhase::Shop {
            return false;
        }
        self.wave += 1;
        self.phase = WavePhase::Combat {
            remaining_ms: WAVE_DURATION_MS,
        };
        self.spawn_interval_ms = spawn_interval_ms(self.wave);
        self.spawn_accumulator_ms = 0;
        true
    }

    /// Combat → GameOver. Only the first call during combat transitions;
    /// later calls return false.
    pub fn game_over(&mut self, score: u64, total_exp: u64, total_gold: u64) -> bool {
        if !self.is_combat() {
            return false;
        }
        self.phase = WavePhase::GameOver {
            score,
            total_exp,
            total_gold,
        };
        self.spawn_accumulator_ms = 0;
        true
    }
}
