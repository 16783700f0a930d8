//! Collision resolution
//!
//! Everything that collides is a circle. Outcomes apply in a fixed order:
//! the player-death check first (it aborts the rest of the pass), then player
//! bullets against enemies with first-match semantics.

use glam::Vec2;

use super::state::WorldState;
use crate::consts::*;

/// Circle-circle hit test. Touching counts as a hit.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) <= radius_a + radius_b
}

/// Apply this tick's collision outcomes.
pub(crate) fn resolve_collisions(world: &mut WorldState) {
    // Player death ends the run immediately; the rest of the tick's
    // collisions are discarded along with the entities.
    let player_pos = world.player.pos;
    let player_down = world
        .enemy_bullets
        .iter()
        .any(|bullet| circles_overlap(bullet.pos, bullet.radius, player_pos, PLAYER_HIT_RADIUS));
    if player_down {
        log::info!("player hit after {:.1}s", world.elapsed_game_time);
        world.restart();
        return;
    }

    // Each bullet damages the first enemy it overlaps, in sequence order,
    // and is spent either way.
    let mut bullet_index = 0;
    while bullet_index < world.player_bullets.len() {
        let bullet = world.player_bullets[bullet_index];
        let hit = world
            .enemies
            .iter()
            .position(|enemy| {
                circles_overlap(enemy.pos, ENEMY_HIT_RADIUS, bullet.pos, bullet.radius)
            });
        match hit {
            Some(enemy_index) => {
                let enemy = &mut world.enemies[enemy_index];
                enemy.health -= 1;
                if enemy.health == 0 {
                    world.enemies.remove(enemy_index);
                }
                world.player_bullets.remove(bullet_index);
            }
            None => bullet_index += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, EnemyBullet, PlayerBullet};

    fn running_world() -> WorldState {
        let mut world = WorldState::new(400.0, 800.0, 13);
        world.start();
        world
    }

    /// An enemy parked away from the player that never starts a series.
    fn inert_enemy(pos: Vec2) -> Enemy {
        Enemy::new(pos, 0.0, f32::INFINITY)
    }

    fn stationary_bullet_at(pos: Vec2) -> PlayerBullet {
        PlayerBullet {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_BULLET_RADIUS,
        }
    }

    #[test]
    fn overlap_includes_the_touching_case() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(18.0, 0.0), 8.0));
        assert!(circles_overlap(a, 10.0, Vec2::new(0.0, 18.0), 8.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(18.1, 0.0), 8.0));
    }

    #[test]
    fn enemy_bullet_on_player_resets_the_run() {
        let mut world = running_world();
        world.enemies.push(inert_enemy(Vec2::new(100.0, 300.0)));
        world.enemy_bullets.push(EnemyBullet {
            pos: world.player.pos + Vec2::new(30.0, 0.0),
            vel: Vec2::ZERO,
            radius: ENEMY_BULLET_RADIUS,
        });

        world.update(0.0);
        assert!(world.show_ready());
        assert!(world.enemy_bullets.is_empty());
        assert!(world.player_bullets.is_empty());
        assert!(world.enemies.is_empty());
        assert_eq!(world.player.pos, Vec2::new(200.0, 640.0));
    }

    #[test]
    fn grazing_enemy_bullet_does_not_kill() {
        let mut world = running_world();
        world.enemy_bullets.push(EnemyBullet {
            pos: world.player.pos + Vec2::new(PLAYER_HIT_RADIUS + ENEMY_BULLET_RADIUS + 0.5, 0.0),
            vel: Vec2::ZERO,
            radius: ENEMY_BULLET_RADIUS,
        });
        world.update(0.0);
        assert!(world.running());
        assert_eq!(world.enemy_bullets.len(), 1);
    }

    #[test]
    fn three_hits_remove_an_enemy_two_do_not() {
        let mut world = running_world();
        let enemy_pos = Vec2::new(100.0, 300.0);
        world.enemies.push(inert_enemy(enemy_pos));

        for expected_health in [2, 1] {
            world.player_bullets.push(stationary_bullet_at(enemy_pos));
            world.update(0.0);
            assert_eq!(world.enemies.len(), 1);
            assert_eq!(world.enemies[0].health, expected_health);
            // the bullet is spent even though the enemy survives
            assert!(world.player_bullets.is_empty());
        }

        world.player_bullets.push(stationary_bullet_at(enemy_pos));
        world.update(0.0);
        assert!(world.enemies.is_empty());
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn bullet_damages_the_first_enemy_in_sequence_order() {
        let mut world = running_world();
        world.enemies.push(inert_enemy(Vec2::new(100.0, 300.0)));
        world.enemies.push(inert_enemy(Vec2::new(110.0, 300.0)));
        world
            .player_bullets
            .push(stationary_bullet_at(Vec2::new(105.0, 300.0)));

        world.update(0.0);
        // first in order takes the hit, not the nearest
        assert_eq!(world.enemies[0].health, ENEMY_HEALTH - 1);
        assert_eq!(world.enemies[1].health, ENEMY_HEALTH);
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn two_bullets_can_wear_down_the_same_enemy_in_one_tick() {
        let mut world = running_world();
        let enemy_pos = Vec2::new(100.0, 300.0);
        world.enemies.push(inert_enemy(enemy_pos));
        world.player_bullets.push(stationary_bullet_at(enemy_pos));
        world
            .player_bullets
            .push(stationary_bullet_at(enemy_pos + Vec2::new(5.0, 0.0)));

        world.update(0.0);
        assert_eq!(world.enemies[0].health, ENEMY_HEALTH - 2);
        assert!(world.player_bullets.is_empty());
    }
}
