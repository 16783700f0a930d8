//! Enemy behavior: noise-driven drift and the per-enemy firing series
//!
//! Each enemy is either idle, counting down to its next series, or firing,
//! emitting shots along one aimed direction at a fixed interval. The series
//! countdown only runs while idle; it stays frozen for the whole burst.

use glam::Vec2;
use rand::Rng;

use super::noise::organic_noise;
use super::state::{EnemyBullet, WorldState};
use crate::consts::*;

/// Advance every enemy by one tick: drift, series state machine, despawn.
///
/// An enemy crossing the bottom margin is removed in place of its field
/// writeback, so a shot it fired this tick still stands.
pub(crate) fn step_enemies(world: &mut WorldState, dt: f32) {
    let mut index = 0;
    while index < world.enemies.len() {
        let enemy = &mut world.enemies[index];
        enemy.age += dt;

        // Weaving drift: deterministic noise sideways, constant fall.
        let drift_x = organic_noise(enemy.age, enemy.seed) * ENEMY_DRIFT_X;
        enemy.pos += Vec2::new(drift_x * dt, ENEMY_FALL_SPEED * dt);
        enemy.pos.x = enemy
            .pos
            .x
            .clamp(ENEMY_SIDE_MARGIN, world.width - ENEMY_SIDE_MARGIN);

        if enemy.series_shots_remaining == 0 {
            enemy.time_to_next_series -= dt;
            if enemy.time_to_next_series <= 0.0 {
                // Start a series aimed at the player, with a random spread.
                enemy.series_shots_remaining = world
                    .rng
                    .random_range(SERIES_SHOTS_MIN..=SERIES_SHOTS_MAX);
                enemy.time_to_next_series =
                    world.rng.random_range(SERIES_DELAY_MIN..SERIES_DELAY_MAX);
                enemy.shot_interval = world
                    .rng
                    .random_range(SHOT_INTERVAL_MIN..SHOT_INTERVAL_MAX);
                enemy.time_until_next_shot = 0.0;

                let to_player = world.player.pos - enemy.pos;
                let base_angle = to_player.y.atan2(to_player.x);
                let spread = world
                    .rng
                    .random_range(-SERIES_SPREAD_DEG..SERIES_SPREAD_DEG)
                    .to_radians();
                enemy.series_direction = Vec2::from_angle(base_angle + spread);
            }
        }

        if enemy.series_shots_remaining > 0 {
            enemy.time_until_next_shot -= dt;
            if enemy.time_until_next_shot <= 0.0 {
                world.enemy_bullets.push(EnemyBullet {
                    pos: enemy.pos,
                    vel: enemy.series_direction * ENEMY_BULLET_SPEED,
                    radius: ENEMY_BULLET_RADIUS,
                });
                enemy.series_shots_remaining -= 1;
                enemy.time_until_next_shot = enemy.shot_interval;
            }
        }

        if enemy.pos.y > world.height + ENEMY_DESPAWN_MARGIN {
            world.enemies.remove(index);
        } else {
            index += 1;
        }
    }
}
