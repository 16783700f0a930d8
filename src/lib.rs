//! Skyweave - simulation core for a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemy AI, collisions, game state)
//! - `spawner`: Generation-checked enemy spawn timers
//!
//! Rendering, input capture and the frame clock are host collaborators: the
//! host sets `joystick_direction`/`shoot_pressed`, calls `update(dt)` once per
//! frame and draws from a `RenderSnapshot`. The binary in `main.rs` shows the
//! expected wiring, including spawn timers running on their own threads.

pub mod sim;
pub mod spawner;

pub use sim::{Enemy, EnemyBullet, Phase, Player, PlayerBullet, RenderSnapshot, WorldState};
pub use spawner::SpawnScheduler;

/// Game configuration constants
pub mod consts {
    /// Player movement speed (units/sec)
    pub const PLAYER_SPEED: f32 = 260.0;
    /// Player keep-in margin from every screen edge
    pub const PLAYER_MARGIN: f32 = 32.0;
    /// Player collision radius (collision only, not movement)
    pub const PLAYER_HIT_RADIUS: f32 = 26.0;
    /// Seconds of game time between player shots (hard rate limit)
    pub const FIRE_COOLDOWN: f32 = 1.0;
    /// Player bullets spawn this far above the player
    pub const MUZZLE_OFFSET: f32 = 28.0;
    /// Player bullet speed, straight up
    pub const PLAYER_BULLET_SPEED: f32 = 360.0;
    pub const PLAYER_BULLET_RADIUS: f32 = 10.0;

    /// Enemy collision radius (collision only)
    pub const ENEMY_HIT_RADIUS: f32 = 34.0;
    /// Enemy keep-in margin from the side edges (spawn range and drift clamp)
    pub const ENEMY_SIDE_MARGIN: f32 = 40.0;
    /// Enemies spawn this far above the top edge
    pub const ENEMY_SPAWN_Y: f32 = -40.0;
    /// Enemies despawn this far below the bottom edge
    pub const ENEMY_DESPAWN_MARGIN: f32 = 60.0;
    /// Enemy starting health
    pub const ENEMY_HEALTH: u8 = 3;
    /// Horizontal weave speed at full noise amplitude (units/sec)
    pub const ENEMY_DRIFT_X: f32 = 120.0;
    /// Constant downward drift (units/sec)
    pub const ENEMY_FALL_SPEED: f32 = 40.0;

    /// Enemy bullet speed along the series direction
    pub const ENEMY_BULLET_SPEED: f32 = 140.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 8.0;
    /// Shots per firing series (inclusive)
    pub const SERIES_SHOTS_MIN: u32 = 3;
    pub const SERIES_SHOTS_MAX: u32 = 10;
    /// Seconds between firing series (half-open)
    pub const SERIES_DELAY_MIN: f32 = 3.0;
    pub const SERIES_DELAY_MAX: f32 = 6.0;
    /// Seconds between shots within a series (half-open)
    pub const SHOT_INTERVAL_MIN: f32 = 0.15;
    pub const SHOT_INTERVAL_MAX: f32 = 0.3;
    /// Max angular offset applied to the aimed series direction (degrees)
    pub const SERIES_SPREAD_DEG: f32 = 45.0;

    /// Number of independent spawn timers
    pub const SPAWN_TIMERS: usize = 3;
    /// Seconds a spawn timer sleeps between enemies (half-open)
    pub const SPAWN_DELAY_MIN: f32 = 3.0;
    pub const SPAWN_DELAY_MAX: f32 = 10.0;
}
