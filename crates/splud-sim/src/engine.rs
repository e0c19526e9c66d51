//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes commands, runs all
//! systems, and produces `GameStateSnapshot`s. Completely headless (no host
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use splud_core::commands::PlayerCommand;
use splud_core::components::{Health, Player};
use splud_core::config::Settings;
use splud_core::constants::{PROJECTILE_POOL_CAPACITY, TICK_MS};
use splud_core::enums::{RunPhase, ShopRejection};
use splud_core::events::Notification;
use splud_core::state::GameStateSnapshot;
use splud_core::types::{MoveIntent, SimTime, Velocity};

use crate::inventory::Inventory;
use crate::pool::ProjectilePool;
use crate::progression::{ProgressionTracker, ScoreState};
use crate::shop::{self, PurchaseOutcome};
use crate::systems;
use crate::systems::collision::OverlapEvent;
use crate::systems::combat::CombatState;
use crate::systems::snapshot::SnapshotSources;
use crate::wave::WaveController;
use crate::world_setup;

/// Where overlap events come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionMode {
    /// The engine runs its own circle-overlap detection every tick.
    #[default]
    Builtin,
    /// An external physics collaborator reports overlaps through
    /// [`SimulationEngine::resolve_overlaps`].
    External,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Player settings, fixed for the run.
    pub settings: Settings,
    pub collisions: CollisionMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: Settings::default(),
            collisions: CollisionMode::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    paused: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    overlap_buffer: Vec<OverlapEvent>,
    notifications: Vec<Notification>,
    intent: MoveIntent,
    next_spawn_seq: u64,

    inventory: Inventory,
    pool: ProjectilePool,
    progression: ProgressionTracker,
    score: ScoreState,
    wave: WaveController,
}

impl SimulationEngine {
    /// Create a new simulation engine in `Combat(1, 60s)`.
    pub fn new(config: SimConfig) -> Self {
        let config = SimConfig {
            settings: config.settings.sanitized(),
            ..config
        };
        let mut world = World::new();
        world_setup::spawn_player(&mut world, &config.settings);

        let mut inventory = Inventory::new();
        inventory.add_weapon(config.settings.selected_weapon, 0);

        let wave = WaveController::new();
        let notifications = vec![
            Notification::WaveNumberChanged { wave: wave.wave() },
            Notification::WaveTimeChanged {
                secs_remaining: wave.remaining_ms().div_ceil(1000),
            },
        ];

        tracing::info!(
            seed = config.seed,
            difficulty = ?config.settings.difficulty,
            weapon = ?config.settings.selected_weapon,
            "run started"
        );

        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world,
            time: SimTime::default(),
            paused: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            overlap_buffer: Vec::new(),
            notifications,
            intent: MoveIntent::IDLE,
            next_spawn_seq: 0,
            inventory,
            pool: ProjectilePool::new(PROJECTILE_POOL_CAPACITY),
            progression: ProgressionTracker::new(),
            score: ScoreState::default(),
            wave,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.is_running() {
            self.time.advance();
            self.run_systems();
        }

        self.snapshot()
    }

    /// Apply overlap events reported by an external collision collaborator.
    /// Ignored while paused or outside combat.
    pub fn resolve_overlaps(&mut self, events: &[OverlapEvent]) {
        if !self.is_running() {
            return;
        }
        let mut state = CombatState {
            pool: &mut self.pool,
            progression: &mut self.progression,
            score: &mut self.score,
            wave: &mut self.wave,
            rng: &mut self.rng,
            notifications: &mut self.notifications,
        };
        systems::combat::resolve(&mut self.world, events, &mut state);
    }

    /// Build a snapshot without advancing, draining pending notifications.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let notifications = std::mem::take(&mut self.notifications);
        let sources = SnapshotSources {
            time: self.time,
            paused: self.paused,
            wave: &self.wave,
            inventory: &self.inventory,
            pool: &self.pool,
            progression: &self.progression,
            score: &self.score,
        };
        systems::snapshot::build_snapshot(&self.world, &sources, notifications)
    }

    pub fn phase(&self) -> RunPhase {
        self.wave.run_phase()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn wave(&self) -> &WaveController {
        &self.wave
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    pub fn progression(&self) -> &ProgressionTracker {
        &self.progression
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Current player health, for hosts that only need the HUD number.
    pub fn player_health(&self) -> Option<Health> {
        self.world
            .query::<(&Player, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, health))| *health)
    }

    fn is_running(&self) -> bool {
        !self.paused && self.wave.is_combat()
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn enemies through the spawn director (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemies(&mut self, count: u32) {
        let player_pos = systems::player_position(&self.world);
        systems::spawn_director::run(
            &mut self.world,
            &mut self.rng,
            count,
            player_pos,
            self.score.score,
            self.config.settings.difficulty,
            &mut self.next_spawn_seq,
        );
    }

    /// Grant gold directly (for shop tests).
    #[cfg(test)]
    pub fn grant_gold(&mut self, gold: u64) {
        self.progression.apply_loot(0, gold);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { intent } => {
                self.intent = intent;
            }
            PlayerCommand::BuyWeapon { weapon } => {
                if self.shop_open() {
                    let outcome = shop::buy_weapon(
                        &mut self.inventory,
                        &mut self.progression,
                        weapon,
                        self.wave.wave(),
                    );
                    self.report_purchase(outcome);
                }
            }
            PlayerCommand::UpgradeWeapon { slot } => {
                if self.shop_open() {
                    let outcome =
                        shop::upgrade_weapon(&mut self.inventory, &mut self.progression, slot);
                    self.report_purchase(outcome);
                }
            }
            PlayerCommand::ContinueWave => {
                if self.wave.start_next_wave() {
                    self.notifications.push(Notification::WaveNumberChanged {
                        wave: self.wave.wave(),
                    });
                    self.notifications.push(Notification::WaveTimeChanged {
                        secs_remaining: self.wave.remaining_ms().div_ceil(1000),
                    });
                    tracing::info!(
                        wave = self.wave.wave(),
                        spawn_interval_ms = self.wave.spawn_interval_ms(),
                        "wave started"
                    );
                }
            }
            PlayerCommand::Pause => {
                if self.wave.is_combat() {
                    self.paused = true;
                }
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
            PlayerCommand::Restart => {
                if self.wave.is_game_over() {
                    let pending = std::mem::take(&mut self.command_queue);
                    *self = SimulationEngine::new(self.config.clone());
                    self.command_queue = pending;
                }
            }
        }
    }

    /// Shop commands outside the shop are refused with a notification.
    fn shop_open(&mut self) -> bool {
        let open = self.wave.run_phase() == RunPhase::Shop;
        if !open {
            self.notifications.push(Notification::ShopRejected {
                reason: ShopRejection::ShopClosed,
            });
        }
        open
    }

    fn report_purchase(&mut self, outcome: PurchaseOutcome) {
        match outcome {
            PurchaseOutcome::Purchased { weapon, tier, cost } => {
                self.notifications
                    .push(Notification::ShopPurchase { weapon, tier, cost });
                self.notifications.push(Notification::GoldChanged {
                    gold: self.progression.ledger().gold,
                });
                tracing::debug!(?weapon, tier, cost, "shop purchase");
            }
            PurchaseOutcome::Rejected(reason) => {
                self.notifications
                    .push(Notification::ShopRejected { reason });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Input
        systems::movement::apply_intent(&mut self.world, self.intent);

        // 2. Wave clock
        let wave_tick = self.wave.advance(TICK_MS);
        if let Some(secs_remaining) = wave_tick.secs_remaining {
            self.notifications
                .push(Notification::WaveTimeChanged { secs_remaining });
        }
        if wave_tick.expired {
            self.end_wave();
            return;
        }

        // 3. Spawning
        let player_pos = systems::player_position(&self.world);
        systems::spawn_director::run(
            &mut self.world,
            &mut self.rng,
            wave_tick.spawns_due,
            player_pos,
            self.score.score,
            self.config.settings.difficulty,
            &mut self.next_spawn_seq,
        );

        // 4. Targeting and firing
        let report = systems::targeting::run(
            &self.world,
            &mut self.inventory,
            &mut self.pool,
            &mut self.rng,
            player_pos,
            self.time.elapsed_ms,
        );
        if report.skipped > 0 {
            tracing::debug!(skipped = report.skipped, "projectile pool exhausted");
        }

        // 5. Movement integration
        systems::movement::run(&mut self.world);
        systems::movement::advance_projectiles(&mut self.pool);

        // 6. Regeneration
        systems::regen::run(&mut self.world, &mut self.notifications);

        // 7. Overlaps and combat
        if self.config.collisions == CollisionMode::Builtin {
            let mut events = std::mem::take(&mut self.overlap_buffer);
            events.clear();
            systems::collision::detect(&self.world, &self.pool, &mut events);
            self.resolve_overlaps(&events);
            self.overlap_buffer = events;
        }
    }

    /// Combat → Shop: clear the field and hand over to the shop collaborator.
    fn end_wave(&mut self) {
        let cleared = systems::cleanup::clear_enemies(&mut self.world, &mut self.despawn_buffer);
        self.pool.release_all();
        for (_entity, (_player, vel)) in self.world.query_mut::<(&Player, &mut Velocity)>() {
            *vel = Velocity::default();
        }
        self.wave.end_combat();

        let gold = self.progression.ledger().gold;
        self.notifications.push(Notification::ShopOpened {
            wave: self.wave.wave(),
            gold,
        });
        tracing::info!(wave = self.wave.wave(), gold, cleared, "wave ended");
    }
}
