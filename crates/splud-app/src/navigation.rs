//! Screen flow for the host: menus around the running simulation.
//!
//! `Navigator` only permits the documented transitions. Anything else leaves
//! the current screen unchanged and produces no effect, the same way the
//! engine silently ignores commands that don't fit its phase.

use splud_core::commands::PlayerCommand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    MainMenu,
    Options,
    CharacterSelect,
    Playing,
    Paused,
    Shop,
    GameOver,
}

/// User actions and simulation outcomes that move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Play,
    OpenOptions,
    Back,
    /// Character/weapon chosen; starts a fresh run.
    ConfirmCharacter,
    Pause,
    Resume,
    /// Driven by the `ShopOpened` notification.
    ShopOpened,
    ContinueWave,
    /// Driven by the `GameOver` notification.
    PlayerDied,
    Restart,
    QuitToMenu,
}

/// What the host must do to the game loop when a transition happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEffect {
    /// Nothing to forward.
    None,
    /// Build a new engine from the current settings.
    StartRun,
    /// Forward a command to the running engine.
    Command(PlayerCommand),
    /// Tear down the running engine.
    StopRun,
}

/// The transition table. `None` means the action is not allowed here.
pub fn transition(screen: Screen, action: NavAction) -> Option<(Screen, NavEffect)> {
    use NavAction as A;
    use Screen as S;

    let next = match (screen, action) {
        (S::MainMenu, A::Play) => (S::CharacterSelect, NavEffect::None),
        (S::MainMenu, A::OpenOptions) => (S::Options, NavEffect::None),
        (S::Options, A::Back) => (S::MainMenu, NavEffect::None),
        (S::CharacterSelect, A::Back) => (S::MainMenu, NavEffect::None),
        (S::CharacterSelect, A::ConfirmCharacter) => (S::Playing, NavEffect::StartRun),
        (S::Playing, A::Pause) => (S::Paused, NavEffect::Command(PlayerCommand::Pause)),
        (S::Playing, A::ShopOpened) => (S::Shop, NavEffect::None),
        (S::Playing, A::PlayerDied) => (S::GameOver, NavEffect::None),
        (S::Paused, A::Resume) => (S::Playing, NavEffect::Command(PlayerCommand::Resume)),
        (S::Paused, A::QuitToMenu) => (S::MainMenu, NavEffect::StopRun),
        (S::Shop, A::ContinueWave) => (S::Playing, NavEffect::Command(PlayerCommand::ContinueWave)),
        (S::GameOver, A::Restart) => (S::Playing, NavEffect::Command(PlayerCommand::Restart)),
        (S::GameOver, A::QuitToMenu) => (S::MainMenu, NavEffect::StopRun),
        _ => return None,
    };
    Some(next)
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Apply an action. Illegal actions return `NavEffect::None` and leave the
    /// screen as it was.
    pub fn handle(&mut self, action: NavAction) -> NavEffect {
        match transition(self.screen, action) {
            Some((next, effect)) => {
                tracing::debug!(from = ?self.screen, to = ?next, ?action, "screen change");
                self.screen = next;
                effect
            }
            None => {
                tracing::trace!(screen = ?self.screen, ?action, "ignored navigation action");
                NavEffect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCREENS: [Screen; 7] = [
        Screen::MainMenu,
        Screen::Options,
        Screen::CharacterSelect,
        Screen::Playing,
        Screen::Paused,
        Screen::Shop,
        Screen::GameOver,
    ];

    const ALL_ACTIONS: [NavAction; 11] = [
        NavAction::Play,
        NavAction::OpenOptions,
        NavAction::Back,
        NavAction::ConfirmCharacter,
        NavAction::Pause,
        NavAction::Resume,
        NavAction::ShopOpened,
        NavAction::ContinueWave,
        NavAction::PlayerDied,
        NavAction::Restart,
        NavAction::QuitToMenu,
    ];

    #[test]
    fn test_menu_to_run() {
        let mut nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::MainMenu);
        assert_eq!(nav.handle(NavAction::Play), NavEffect::None);
        assert_eq!(nav.screen(), Screen::CharacterSelect);
        assert_eq!(nav.handle(NavAction::ConfirmCharacter), NavEffect::StartRun);
        assert_eq!(nav.screen(), Screen::Playing);
    }

    #[test]
    fn test_options_round_trip() {
        let mut nav = Navigator::new();
        nav.handle(NavAction::OpenOptions);
        assert_eq!(nav.screen(), Screen::Options);
        nav.handle(NavAction::Back);
        assert_eq!(nav.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_wave_cycle_forwards_commands() {
        let mut nav = Navigator::new();
        nav.handle(NavAction::Play);
        nav.handle(NavAction::ConfirmCharacter);

        assert_eq!(
            nav.handle(NavAction::Pause),
            NavEffect::Command(PlayerCommand::Pause)
        );
        assert_eq!(
            nav.handle(NavAction::Resume),
            NavEffect::Command(PlayerCommand::Resume)
        );
        nav.handle(NavAction::ShopOpened);
        assert_eq!(nav.screen(), Screen::Shop);
        assert_eq!(
            nav.handle(NavAction::ContinueWave),
            NavEffect::Command(PlayerCommand::ContinueWave)
        );
        assert_eq!(nav.screen(), Screen::Playing);
    }

    #[test]
    fn test_game_over_exits() {
        let mut nav = Navigator::new();
        nav.handle(NavAction::Play);
        nav.handle(NavAction::ConfirmCharacter);
        nav.handle(NavAction::PlayerDied);
        assert_eq!(nav.screen(), Screen::GameOver);
        assert_eq!(
            nav.handle(NavAction::Restart),
            NavEffect::Command(PlayerCommand::Restart)
        );
        nav.handle(NavAction::PlayerDied);
        assert_eq!(nav.handle(NavAction::QuitToMenu), NavEffect::StopRun);
        assert_eq!(nav.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_illegal_actions_leave_screen_unchanged() {
        let mut nav = Navigator::new();
        for action in [
            NavAction::Pause,
            NavAction::Resume,
            NavAction::ContinueWave,
            NavAction::Restart,
            NavAction::ShopOpened,
        ] {
            assert_eq!(nav.handle(action), NavEffect::None);
            assert_eq!(nav.screen(), Screen::MainMenu);
        }
    }

    #[test]
    fn test_no_pause_from_shop_or_game_over() {
        assert!(transition(Screen::Shop, NavAction::Pause).is_none());
        assert!(transition(Screen::GameOver, NavAction::Pause).is_none());
        assert!(transition(Screen::Paused, NavAction::ShopOpened).is_none());
    }

    #[test]
    fn test_only_character_select_starts_a_run() {
        for screen in ALL_SCREENS {
            for action in ALL_ACTIONS {
                if let Some((_, NavEffect::StartRun)) = transition(screen, action) {
                    assert_eq!(screen, Screen::CharacterSelect);
                    assert_eq!(action, NavAction::ConfirmCharacter);
                }
            }
        }
    }

    #[test]
    fn test_every_screen_is_reachable_and_escapable() {
        for screen in ALL_SCREENS {
            let reachable = ALL_SCREENS.iter().any(|&from| {
                ALL_ACTIONS
                    .iter()
                    .any(|&a| matches!(transition(from, a), Some((to, _)) if to == screen))
            });
            let escapable = ALL_ACTIONS.iter().any(|&a| transition(screen, a).is_some());
            assert!(reachable, "{:?} is unreachable", screen);
            assert!(escapable, "{:?} is a dead end", screen);
        }
    }
}
