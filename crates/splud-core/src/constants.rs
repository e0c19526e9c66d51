//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Milliseconds per tick.
pub const TICK_MS: u64 = 1000 / TICK_RATE as u64;

/// Seconds per tick.
pub const DT: f64 = TICK_MS as f64 / 1000.0;

// --- World ---

/// World width in units.
pub const WORLD_WIDTH: f64 = 2400.0;

/// World height in units.
pub const WORLD_HEIGHT: f64 = 1800.0;

// --- Player ---

/// Player starting and maximum health.
pub const PLAYER_MAX_HEALTH: f64 = 20.0;

/// Player movement speed used when settings don't override it (units/s).
pub const PLAYER_DEFAULT_SPEED: f64 = 150.0;

/// Diagonal movement scale so diagonal speed matches straight speed.
pub const DIAGONAL_FACTOR: f64 = 0.707;

/// Player collision radius (units).
pub const PLAYER_RADIUS: f64 = 28.0;

// --- Progression ---

/// Experience threshold for the first level-up.
pub const INITIAL_EXP_FOR_NEXT_LEVEL: u64 = 50;

/// Multiplier applied to the threshold after each level-up (truncated).
pub const EXP_THRESHOLD_GROWTH: f64 = 1.5;

/// Health restored on level-up (clamped to max health).
pub const LEVEL_UP_HEAL: f64 = 2.0;

/// Movement speed granted on level-up (units/s).
pub const LEVEL_UP_SPEED_BONUS: f64 = 5.0;

// --- Loot ---

/// Inclusive experience reward range per kill.
pub const KILL_EXP_MIN: u64 = 2;
pub const KILL_EXP_MAX: u64 = 5;

/// Inclusive gold reward range per kill.
pub const KILL_GOLD_MIN: u64 = 1;
pub const KILL_GOLD_MAX: u64 = 2;

/// Score awarded per kill.
pub const KILL_SCORE: u64 = 10;

// --- Weapons ---

/// Maximum number of equipped weapons.
pub const MAX_WEAPONS: usize = 4;

/// Cooldown between shots of a single weapon slot (ms).
pub const WEAPON_COOLDOWN_MS: u64 = 1200;

/// Projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 400.0;

/// Projectile pool capacity.
pub const PROJECTILE_POOL_CAPACITY: usize = 200;

/// Distance after which an unspent projectile returns to the pool (units).
pub const PROJECTILE_MAX_RANGE: f64 = 1200.0;

/// Projectile collision radius (units).
pub const PROJECTILE_RADIUS: f64 = 8.0;

// --- Enemies ---

/// Distance from the player at which enemies appear (units).
pub const SPAWN_DISTANCE: f64 = 600.0;

/// Enemy base speed before score scaling and difficulty (units/s).
pub const ENEMY_BASE_SPEED: f64 = 60.0;

/// Enemy speed gained per point of score (units/s).
pub const ENEMY_SPEED_PER_SCORE: f64 = 0.3;

/// Damage an enemy deals on contact with the player.
pub const ENEMY_CONTACT_DAMAGE: f64 = 2.0;

/// Enemy collision radius (units).
pub const ENEMY_RADIUS: f64 = 12.0;

// --- Waves ---

/// Combat phase length (ms).
pub const WAVE_DURATION_MS: u64 = 60_000;

/// Spawn interval for the first wave (ms).
pub const INITIAL_SPAWN_INTERVAL_MS: u64 = 1500;

/// Spawn interval reduction per wave number (ms).
pub const SPAWN_INTERVAL_STEP_MS: u64 = 100;

/// Spawn interval floor (ms).
pub const MIN_SPAWN_INTERVAL_MS: u64 = 500;

// --- Shop ---

/// Base price of a new weapon.
pub const WEAPON_BASE_PRICE: u64 = 15;

/// Weapon price increase per wave number.
pub const WEAPON_PRICE_PER_WAVE: u64 = 2;

/// Upgrade price per target tier (upgrading tier t costs this * (t + 1)).
pub const UPGRADE_BASE_PRICE: u64 = 10;

// --- Settings defaults ---

/// Default audio volume.
pub const DEFAULT_VOLUME: f64 = 0.3;
