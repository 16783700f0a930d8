//! Game state and core simulation types
//!
//! `WorldState` owns every entity collection and mutable scalar; nothing else
//! writes to them. Lifecycle operations live here, the per-frame passes in
//! `tick`, `enemy` and `collision`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Last-shot stamp far enough in the past that the first press always fires.
const ARMED_SHOT_STAMP: f32 = -100.0;

/// Current phase of gameplay
///
/// `Ready` shows the tap-to-start overlay, `Running` ticks the simulation.
/// One enum rather than two flags keeps the phases mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Ready,
    Running,
}

/// The player ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

/// A bullet fired by the player, travelling straight up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A bullet fired by an enemy during a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// An enemy, weaving downward and firing aimed bursts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Noise phase, random per enemy
    pub seed: f32,
    /// Seconds alive
    pub age: f32,
    pub health: u8,
    /// Seconds until the next firing series; counts down only while idle
    pub time_to_next_series: f32,
    /// Shots left in the active series, 0 when idle
    pub series_shots_remaining: u32,
    /// Unit aim direction of the active series
    pub series_direction: Vec2,
    /// Seconds between shots within the series
    pub shot_interval: f32,
    pub time_until_next_shot: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, seed: f32, first_series_delay: f32) -> Self {
        Self {
            pos,
            seed,
            age: 0.0,
            health: ENEMY_HEALTH,
            time_to_next_series: first_series_delay,
            series_shots_remaining: 0,
            series_direction: Vec2::ZERO,
            shot_interval: 0.25,
            time_until_next_shot: 0.0,
        }
    }
}

/// Everything the renderer needs for one frame, copied out of the world.
///
/// The host pulls one of these per frame instead of observing individual
/// fields; enemies render at a fixed radius, so only their positions travel.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub show_ready: bool,
    pub running: bool,
    pub player: Vec2,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Vec2>,
    pub spawn_generation: u64,
}

/// Complete simulation state
///
/// Single writer: all mutation happens through the lifecycle operations below
/// and the per-frame `update` pass. The input fields are set by the host's
/// input collaborator between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub(crate) width: f32,
    pub(crate) height: f32,
    phase: Phase,
    pub player: Player,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    /// Unit-length-or-zero movement direction, set by the input collaborator
    pub joystick_direction: Vec2,
    /// Fire button state, set by the input collaborator
    pub shoot_pressed: bool,
    pub(crate) last_shot_time: f32,
    pub(crate) elapsed_game_time: f32,
    spawn_generation: u64,
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// Create a world in the Ready phase with the player at the spawn point.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            phase: Phase::Ready,
            player: Player {
                pos: spawn_point(width, height),
            },
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            joystick_direction: Vec2::ZERO,
            shoot_pressed: false,
            last_shot_time: ARMED_SHOT_STAMP,
            elapsed_game_time: 0.0,
            spawn_generation: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn show_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Viewport size as `(width, height)`.
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Seconds of game time accumulated since the last `start`.
    pub fn elapsed_game_time(&self) -> f32 {
        self.elapsed_game_time
    }

    /// Monotonic counter bumped by every `start`. Spawn timers compare it
    /// against the value they captured to notice that a new run began.
    pub fn spawn_generation(&self) -> u64 {
        self.spawn_generation
    }

    /// Set the viewport size. Safe to call at any time (e.g. on resize);
    /// while not running the player is re-centered at the spawn point, while
    /// running the entities of the current run are left alone.
    pub fn update_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        if !self.running() {
            self.reset_player();
        }
    }

    /// Ready -> Running. Clears every entity, re-arms the fire timer so the
    /// first press shoots immediately, and signals the spawn timers.
    pub fn start(&mut self) {
        self.phase = Phase::Running;
        self.reset_player();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.elapsed_game_time = 0.0;
        self.last_shot_time = ARMED_SHOT_STAMP;
        self.spawn_generation += 1;
        log::info!(
            "run {} started ({}x{})",
            self.spawn_generation,
            self.width,
            self.height
        );
    }

    /// Any state -> Ready. Invoked by the collision pass on player death and
    /// available to the host for a manual give-up.
    pub fn restart(&mut self) {
        self.phase = Phase::Ready;
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.reset_player();
    }

    /// Append one enemy at a random x along the top edge. No-op unless
    /// running, so a timer firing after the run ended spawns nothing.
    pub fn spawn_enemy(&mut self) {
        if !self.running() {
            return;
        }
        let x = self
            .rng
            .random_range(ENEMY_SIDE_MARGIN..self.width - ENEMY_SIDE_MARGIN);
        let seed = self.rng.random::<f32>() * 10_000.0;
        let delay = self.rng.random_range(SERIES_DELAY_MIN..SERIES_DELAY_MAX);
        self.enemies
            .push(Enemy::new(Vec2::new(x, ENEMY_SPAWN_Y), seed, delay));
        log::debug!("enemy spawned at x={x:.1} ({} alive)", self.enemies.len());
    }

    /// Copy out the render-facing view of the world.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            show_ready: self.show_ready(),
            running: self.running(),
            player: self.player.pos,
            player_bullets: self.player_bullets.clone(),
            enemy_bullets: self.enemy_bullets.clone(),
            enemies: self.enemies.iter().map(|e| e.pos).collect(),
            spawn_generation: self.spawn_generation,
        }
    }

    pub(crate) fn reset_player(&mut self) {
        self.player = Player {
            pos: spawn_point(self.width, self.height),
        };
    }
}

/// Player spawn point: horizontally centered, near the bottom edge.
fn spawn_point(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height * 0.8)
}
