//! Per-frame update pass
//!
//! `update` advances the world by one tick in a fixed order: player, enemies,
//! bullets, collisions. Bullets emitted earlier in the tick are advected by
//! the same tick's bullet pass.

use glam::Vec2;

use super::collision;
use super::enemy;
use super::state::{PlayerBullet, WorldState};
use crate::consts::*;

impl WorldState {
    /// Advance the simulation by `dt` seconds of real time.
    ///
    /// No-op while the world is not running. Negative or non-finite `dt` is
    /// clamped to zero rather than propagated; `dt = 0` is a safe tick.
    pub fn update(&mut self, dt: f32) {
        if !self.running() {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed_game_time += dt;

        step_player(self, dt);
        enemy::step_enemies(self, dt);
        step_player_bullets(self, dt);
        step_enemy_bullets(self, dt);
        collision::resolve_collisions(self);
    }
}

/// Integrate the player, clamp into the arena, and fire on request.
fn step_player(world: &mut WorldState, dt: f32) {
    let velocity = world.joystick_direction * PLAYER_SPEED;
    let next = world.player.pos + velocity * dt;
    let min = Vec2::splat(PLAYER_MARGIN);
    let max = Vec2::new(world.width - PLAYER_MARGIN, world.height - PLAYER_MARGIN);
    world.player.pos = next.clamp(min, max);

    // Hard rate limit: a press inside the window is simply lost, it does not
    // latch a shot for later.
    if world.shoot_pressed && world.elapsed_game_time - world.last_shot_time >= FIRE_COOLDOWN {
        world.player_bullets.push(PlayerBullet {
            pos: world.player.pos + Vec2::new(0.0, -MUZZLE_OFFSET),
            vel: Vec2::new(0.0, -PLAYER_BULLET_SPEED),
            radius: PLAYER_BULLET_RADIUS,
        });
        world.last_shot_time = world.elapsed_game_time;
    }
}

/// Advance player bullets, culling the ones fully above the top edge.
/// The index stays put on removal so the scan preserves sequence order.
fn step_player_bullets(world: &mut WorldState, dt: f32) {
    let mut index = 0;
    while index < world.player_bullets.len() {
        let bullet = &mut world.player_bullets[index];
        bullet.pos += bullet.vel * dt;
        if bullet.pos.y + bullet.radius < 0.0 {
            world.player_bullets.remove(index);
        } else {
            index += 1;
        }
    }
}

/// Advance enemy bullets, culling the ones fully outside any edge.
fn step_enemy_bullets(world: &mut WorldState, dt: f32) {
    let (width, height) = (world.width, world.height);
    let mut index = 0;
    while index < world.enemy_bullets.len() {
        let bullet = &mut world.enemy_bullets[index];
        bullet.pos += bullet.vel * dt;
        let r = bullet.radius;
        let outside = bullet.pos.x < -r
            || bullet.pos.x > width + r
            || bullet.pos.y < -r
            || bullet.pos.y > height + r;
        if outside {
            world.enemy_bullets.remove(index);
        } else {
            index += 1;
        }
    }
}
