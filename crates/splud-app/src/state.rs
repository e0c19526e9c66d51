//! Messages exchanged between the host and the game loop thread.

use splud_core::commands::PlayerCommand;
use splud_sim::engine::SimConfig;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Start a fresh run, replacing any run in progress.
    NewRun(SimConfig),
    /// Drop the current run and idle until the next `NewRun`.
    EndRun,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop paces its ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep so one tick takes one tick's worth of wall time.
    Realtime,
    /// Tick as fast as the snapshot consumer keeps up.
    #[default]
    Unthrottled,
}
