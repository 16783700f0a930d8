//! Enemy spawn scheduling
//!
//! The host may run spawn timers as real sleeping tasks (the demo driver
//! does); this module is the deterministic in-core equivalent: three
//! independent countdowns advanced by the frame clock. Every `start` bumps
//! the world's spawn generation, and the scheduler re-arms all timers with
//! fresh random delays when it notices the change — cancellation as a
//! checked generation token rather than an explicit signal.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::WorldState;

/// Three periodic spawn timers with generation-checked re-arming.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    deadlines: [f32; SPAWN_TIMERS],
    generation: u64,
    rng: Pcg32,
}

impl SpawnScheduler {
    /// A scheduler armed against generation 0, i.e. a world that has not
    /// started yet.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let deadlines =
            std::array::from_fn(|_| rng.random_range(SPAWN_DELAY_MIN..SPAWN_DELAY_MAX));
        Self {
            deadlines,
            generation: 0,
            rng,
        }
    }

    /// Advance the timers by `dt` seconds and request spawns from `world`.
    ///
    /// Call once per frame alongside `world.update`. Timers only count down
    /// while the world runs; each timer spawns at most one enemy per call.
    pub fn advance(&mut self, world: &mut WorldState, dt: f32) {
        if world.spawn_generation() != self.generation {
            self.generation = world.spawn_generation();
            for deadline in &mut self.deadlines {
                *deadline = self.rng.random_range(SPAWN_DELAY_MIN..SPAWN_DELAY_MAX);
            }
        }
        if !world.running() {
            return;
        }
        for deadline in &mut self.deadlines {
            *deadline -= dt;
            if *deadline <= 0.0 {
                world.spawn_enemy();
                *deadline = self.rng.random_range(SPAWN_DELAY_MIN..SPAWN_DELAY_MAX);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_spawns_while_the_world_is_ready() {
        let mut world = WorldState::new(400.0, 800.0, 21);
        let mut scheduler = SpawnScheduler::new(1);
        for _ in 0..1_000 {
            scheduler.advance(&mut world, 0.5);
        }
        assert!(world.enemies.is_empty());
        assert!(world.show_ready());
    }

    #[test]
    fn every_timer_fires_within_its_maximum_delay() {
        let mut world = WorldState::new(400.0, 800.0, 22);
        let mut scheduler = SpawnScheduler::new(2);
        world.start();

        let mut elapsed = 0.0;
        while elapsed < SPAWN_DELAY_MAX {
            scheduler.advance(&mut world, 0.1);
            elapsed += 0.1;
        }
        assert!(world.enemies.len() >= SPAWN_TIMERS);
    }

    #[test]
    fn timers_rearm_when_a_new_run_begins() {
        let mut world = WorldState::new(400.0, 800.0, 23);
        let mut scheduler = SpawnScheduler::new(3);
        world.start();

        // burn most of the first delays
        for _ in 0..29 {
            scheduler.advance(&mut world, 0.1);
        }

        // a new run re-arms every timer to at least the minimum delay
        world.restart();
        world.start();
        for _ in 0..29 {
            scheduler.advance(&mut world, 0.1);
        }
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn spawning_keeps_pace_over_a_long_run() {
        let mut world = WorldState::new(400.0, 800.0, 24);
        let mut scheduler = SpawnScheduler::new(4);
        world.start();

        for _ in 0..600 {
            scheduler.advance(&mut world, 0.1);
        }
        // 60 seconds, three timers, at most 10 seconds between spawns each
        assert!(world.enemies.len() >= 18);
        assert!(world.enemies.len() <= 60);
    }
}
