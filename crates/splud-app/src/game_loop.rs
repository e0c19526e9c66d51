//! Game loop thread: runs the simulation engine at 50Hz and hands out snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel; snapshots leave through a
//! bounded channel, so an unthrottled loop can't run ahead of its consumer.
//! The loop idles between runs and numbers each run it starts, so the host
//! can discard frames a previous run left in the buffer.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use splud_core::commands::PlayerCommand;
use splud_core::constants::TICK_RATE;
use splud_core::state::GameStateSnapshot;
use splud_sim::engine::{SimConfig, SimulationEngine};

use crate::error::{AppError, AppResult};
use crate::state::{GameLoopCommand, Pacing};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Snapshots buffered between the loop and the host.
const SNAPSHOT_BUFFER: usize = 8;

/// A snapshot tagged with the run that produced it.
struct Frame {
    run: u64,
    snapshot: GameStateSnapshot,
}

/// Host side of a game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    snapshots: mpsc::Receiver<Frame>,
    thread: JoinHandle<()>,
    runs_started: u64,
    active: bool,
}

impl GameLoopHandle {
    fn send(&self, command: GameLoopCommand) -> AppResult<()> {
        self.commands
            .send(command)
            .map_err(|_| AppError::LoopDisconnected)
    }

    /// Start a fresh run, replacing any run in progress.
    pub fn start_run(&mut self, config: SimConfig) -> AppResult<()> {
        self.send(GameLoopCommand::NewRun(config))?;
        self.runs_started += 1;
        self.active = true;
        tracing::debug!(run = self.runs_started, "run started");
        Ok(())
    }

    /// Drop the current run. The loop idles until the next `start_run`.
    pub fn end_run(&mut self) -> AppResult<()> {
        self.send(GameLoopCommand::EndRun)?;
        self.active = false;
        tracing::debug!(run = self.runs_started, "run ended");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.active
    }

    /// Forward a player command to the engine.
    pub fn command(&self, command: PlayerCommand) -> AppResult<()> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Block until the next snapshot of the current run arrives.
    pub fn recv(&self) -> AppResult<GameStateSnapshot> {
        if !self.active {
            return Err(AppError::NoActiveRun);
        }
        loop {
            let frame = self
                .snapshots
                .recv()
                .map_err(|_| AppError::LoopDisconnected)?;
            if frame.run == self.runs_started {
                return Ok(frame.snapshot);
            }
        }
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) {
        let GameLoopHandle {
            commands,
            snapshots,
            thread,
            ..
        } = self;
        let _ = commands.send(GameLoopCommand::Shutdown);
        // Unblocks a loop parked on a full snapshot buffer.
        drop(snapshots);
        if thread.join().is_err() {
            tracing::error!("game loop thread panicked");
        }
    }
}

/// Spawns an idle game loop in a new thread. Nothing ticks until
/// [`GameLoopHandle::start_run`].
pub fn spawn_game_loop(pacing: Pacing) -> AppResult<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::sync_channel::<Frame>(SNAPSHOT_BUFFER);

    let thread = std::thread::Builder::new()
        .name("splud-game-loop".into())
        .spawn(move || {
            run_game_loop(pacing, cmd_rx, snap_tx);
        })
        .map_err(AppError::Spawn)?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        thread,
        runs_started: 0,
        active: false,
    })
}

/// Engine state owned by the loop thread.
struct LoopState {
    engine: Option<SimulationEngine>,
    run: u64,
    next_tick_time: Instant,
}

impl LoopState {
    /// Applies one command. Returns `false` on Shutdown.
    fn apply(&mut self, command: GameLoopCommand) -> bool {
        match command {
            GameLoopCommand::PlayerCommand(cmd) => match self.engine.as_mut() {
                Some(engine) => engine.queue_command(cmd),
                None => tracing::debug!(?cmd, "no run in progress, command dropped"),
            },
            GameLoopCommand::NewRun(config) => {
                self.engine = Some(SimulationEngine::new(config));
                self.run += 1;
                self.next_tick_time = Instant::now();
            }
            GameLoopCommand::EndRun => {
                self.engine = None;
            }
            GameLoopCommand::Shutdown => {
                tracing::debug!(run = self.run, "game loop shutting down");
                return false;
            }
        }
        true
    }
}

/// The game loop. Runs until Shutdown or either channel disconnects.
fn run_game_loop(
    pacing: Pacing,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::SyncSender<Frame>,
) {
    let mut state = LoopState {
        engine: None,
        run: 0,
        next_tick_time: Instant::now(),
    };
    tracing::debug!(?pacing, "game loop started");

    loop {
        // 1. Without a run, park until the host says something
        if state.engine.is_none() {
            let Ok(command) = cmd_rx.recv() else {
                return;
            };
            if !state.apply(command) {
                return;
            }
            continue;
        }

        // 2. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !state.apply(command) {
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 3. Advance one tick (engine handles pause and shop internally)
        let Some(engine) = state.engine.as_mut() else {
            continue;
        };
        let frame = Frame {
            run: state.run,
            snapshot: engine.tick(),
        };

        // 4. Hand the snapshot to the host
        if snap_tx.send(frame).is_err() {
            return;
        }

        // 5. Sleep until next tick
        if pacing == Pacing::Realtime {
            state.next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if state.next_tick_time > now {
                std::thread::sleep(state.next_tick_time - now);
            } else if now - state.next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid catch-up spiral
                state.next_tick_time = now;
            }
        }
    }
}
