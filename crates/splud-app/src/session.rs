//! A headless play session: navigator, game loop and autopilot wired together.
//!
//! The session walks the menus to start a run, feeds the autopilot's intents
//! and shop plans into the loop, and stops after the requested number of
//! waves or when the player dies. Quitting to the menu ends the run on the
//! loop; confirming a character from the menu starts a fresh one.

use splud_core::commands::PlayerCommand;
use splud_core::events::Notification;
use splud_core::state::GameStateSnapshot;
use splud_sim::engine::SimConfig;

use crate::autopilot::{plan_shop, Autopilot};
use crate::error::AppResult;
use crate::game_loop::{spawn_game_loop, GameLoopHandle};
use crate::navigation::{NavAction, NavEffect, Navigator, Screen};
use crate::state::Pacing;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Stop once this many waves have ended. Zero plays until death.
    pub waves: u32,
    pub pacing: Pacing,
    pub autopilot_seed: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            waves: 3,
            pacing: Pacing::Unthrottled,
            autopilot_seed: 0,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub waves_cleared: u32,
    pub died: bool,
    pub score: u64,
    pub level: u32,
    pub total_exp: u64,
    pub total_gold: u64,
    pub enemies_killed: u32,
    pub ticks: u64,
}

impl SessionSummary {
    fn from_snapshot(snapshot: &GameStateSnapshot, waves_cleared: u32, died: bool) -> Self {
        Self {
            waves_cleared,
            died,
            score: snapshot.progress.score,
            level: snapshot.progress.level,
            total_exp: snapshot.progress.total_exp,
            total_gold: snapshot.progress.total_gold,
            enemies_killed: snapshot.progress.enemies_killed,
            ticks: snapshot.time.tick,
        }
    }
}

/// Menus wired to a game loop thread. Navigation effects start and stop
/// runs on the loop and forward in-run commands to it.
pub struct Session {
    navigator: Navigator,
    config: SimConfig,
    handle: GameLoopHandle,
}

impl Session {
    /// Spawns an idle loop and shows the main menu.
    pub fn new(config: SimConfig, pacing: Pacing) -> AppResult<Self> {
        Ok(Self {
            navigator: Navigator::new(),
            config,
            handle: spawn_game_loop(pacing)?,
        })
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    /// Applies a menu action and carries out its effect on the loop.
    pub fn navigate(&mut self, action: NavAction) -> AppResult<()> {
        match self.navigator.handle(action) {
            NavEffect::StartRun => self.handle.start_run(self.config.clone()),
            NavEffect::StopRun => self.handle.end_run(),
            NavEffect::Command(command) => self.handle.command(command),
            NavEffect::None => Ok(()),
        }
    }

    pub fn command(&self, command: PlayerCommand) -> AppResult<()> {
        self.handle.command(command)
    }

    /// Next snapshot of the current run.
    pub fn recv(&self) -> AppResult<GameStateSnapshot> {
        self.handle.recv()
    }

    /// Leaves any run for the main menu and stops the loop thread.
    pub fn close(mut self) {
        if matches!(self.screen(), Screen::Paused | Screen::GameOver) {
            if let Err(err) = self.navigate(NavAction::QuitToMenu) {
                tracing::warn!(%err, "could not end run");
            }
        }
        self.handle.shutdown();
    }

    /// Walks the menus into a run and lets the autopilot play it.
    fn autoplay(&mut self, options: &SessionOptions) -> AppResult<SessionSummary> {
        self.navigate(NavAction::Play)?;
        self.navigate(NavAction::ConfirmCharacter)?;

        let mut autopilot = Autopilot::new(options.autopilot_seed);
        let mut waves_cleared = 0;

        loop {
            let snapshot = self.recv()?;

            for notification in &snapshot.notifications {
                log_notification(notification);
                match *notification {
                    Notification::ShopOpened { wave, .. } => {
                        waves_cleared = wave;
                        self.navigate(NavAction::ShopOpened)?;
                        if options.waves != 0 && wave >= options.waves {
                            return Ok(SessionSummary::from_snapshot(
                                &snapshot,
                                waves_cleared,
                                false,
                            ));
                        }
                        for command in plan_shop(&snapshot, wave) {
                            self.command(command)?;
                        }
                        self.navigate(NavAction::ContinueWave)?;
                    }
                    Notification::GameOver { .. } => {
                        self.navigate(NavAction::PlayerDied)?;
                        return Ok(SessionSummary::from_snapshot(&snapshot, waves_cleared, true));
                    }
                    _ => {}
                }
            }

            if self.screen() == Screen::Playing {
                if let Some(intent) = autopilot.steer(&snapshot) {
                    self.command(PlayerCommand::Move { intent })?;
                }
            }
        }
    }
}

pub fn run_session(config: SimConfig, options: &SessionOptions) -> AppResult<SessionSummary> {
    let mut session = Session::new(config, options.pacing)?;
    let result = session.autoplay(options);
    session.close();
    result
}

fn log_notification(notification: &Notification) {
    match notification {
        Notification::LevelUp { level } => tracing::info!(level, "level up"),
        Notification::WaveNumberChanged { wave } => tracing::info!(wave, "wave"),
        Notification::ShopOpened { wave, gold } => tracing::info!(wave, gold, "shop opened"),
        Notification::ShopPurchase { weapon, tier, cost } => {
            tracing::info!(?weapon, tier, cost, "bought")
        }
        Notification::ShopRejected { reason } => tracing::warn!(?reason, "purchase rejected"),
        Notification::GameOver {
            score,
            total_exp,
            total_gold,
        } => tracing::info!(score, total_exp, total_gold, "game over"),
        other => tracing::trace!(?other, "notification"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use splud_core::config::Settings;
    use splud_core::enums::Difficulty;
    use splud_sim::engine::CollisionMode;

    #[test]
    fn test_external_collisions_clear_requested_waves() {
        // Nothing ever hits the player without a collision reporter.
        let config = SimConfig {
            seed: 3,
            collisions: CollisionMode::External,
            ..Default::default()
        };
        let options = SessionOptions {
            waves: 2,
            ..Default::default()
        };
        let summary = run_session(config, &options).unwrap();
        assert_eq!(summary.waves_cleared, 2);
        assert!(!summary.died);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.ticks, 6000);
    }

    #[test]
    fn test_builtin_session_ends_with_summary() {
        let config = SimConfig {
            seed: 11,
            settings: Settings {
                difficulty: Difficulty::Easy,
                ..Default::default()
            },
            ..Default::default()
        };
        let summary = run_session(config, &SessionOptions::default()).unwrap();
        assert!(summary.died || summary.waves_cleared == 3);
        assert_eq!(summary.score, summary.enemies_killed as u64 * 10);
        assert!(summary.level >= 1);
    }

    fn external_config(seed: u64) -> SimConfig {
        SimConfig {
            seed,
            collisions: CollisionMode::External,
            ..Default::default()
        }
    }

    #[test]
    fn test_confirm_character_starts_a_run() {
        let mut session = Session::new(external_config(1), Pacing::Unthrottled).unwrap();
        assert!(matches!(session.recv(), Err(AppError::NoActiveRun)));

        session.navigate(NavAction::Play).unwrap();
        session.navigate(NavAction::ConfirmCharacter).unwrap();
        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.recv().unwrap().time.tick, 1);
        session.close();
    }

    #[test]
    fn test_quit_to_menu_then_replay_starts_fresh_run() {
        let mut session = Session::new(external_config(2), Pacing::Unthrottled).unwrap();
        session.navigate(NavAction::Play).unwrap();
        session.navigate(NavAction::ConfirmCharacter).unwrap();
        let mut last = session.recv().unwrap();
        for _ in 0..200 {
            last = session.recv().unwrap();
        }
        assert!(last.time.tick > 200);

        session.navigate(NavAction::PlayerDied).unwrap();
        session.navigate(NavAction::QuitToMenu).unwrap();
        assert_eq!(session.screen(), Screen::MainMenu);
        assert!(matches!(session.recv(), Err(AppError::NoActiveRun)));

        session.navigate(NavAction::Play).unwrap();
        session.navigate(NavAction::ConfirmCharacter).unwrap();
        let fresh = session.recv().unwrap();
        assert_eq!(fresh.time.tick, 1);
        assert_eq!(fresh.wave.number, 1);
        assert_eq!(fresh.progress.score, 0);
        session.close();
    }

    #[test]
    fn test_pause_from_menu_reaches_engine() {
        let mut session = Session::new(external_config(4), Pacing::Unthrottled).unwrap();
        session.navigate(NavAction::Play).unwrap();
        session.navigate(NavAction::ConfirmCharacter).unwrap();
        session.recv().unwrap();

        session.navigate(NavAction::Pause).unwrap();
        assert_eq!(session.screen(), Screen::Paused);
        let paused = loop {
            let snap = session.recv().unwrap();
            if snap.paused {
                break snap;
            }
        };
        assert_eq!(session.recv().unwrap().time.tick, paused.time.tick);
        session.close();
    }
}
