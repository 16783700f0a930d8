//! Skyweave headless demo driver
//!
//! Runs the simulation the way a host would: an explicit frame loop computing
//! real deltas, spawn-timer threads requesting enemies, and scripted input
//! standing in for the joystick/fire collaborators. Emits a JSON snapshot
//! once a second; run with `RUST_LOG=debug` to see individual spawns.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::Rng;

use skyweave::consts::*;
use skyweave::sim::WorldState;

const VIEW_WIDTH: f32 = 480.0;
const VIEW_HEIGHT: f32 = 864.0;
/// Wall-clock length of the demo run
const DEMO_SECONDS: f32 = 15.0;

fn main() {
    env_logger::init();

    let world = Arc::new(Mutex::new(WorldState::new(VIEW_WIDTH, VIEW_HEIGHT, 0x5EED)));
    start_run(&world);

    let demo_start = Instant::now();
    let mut last_frame = Instant::now();
    let mut last_snapshot = Instant::now();

    while demo_start.elapsed().as_secs_f32() < DEMO_SECONDS {
        thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        let needs_restart = {
            let mut world = world.lock().expect("world mutex poisoned");
            // scripted input: sweep the stick, hold fire
            let t = demo_start.elapsed().as_secs_f32();
            world.joystick_direction =
                Vec2::new((t * 0.9).sin(), (t * 0.4).cos()).normalize_or_zero();
            world.shoot_pressed = true;
            world.update(dt);
            world.show_ready()
        };
        if needs_restart {
            // player went down; begin the next run with a fresh timer trio
            start_run(&world);
        }

        if last_snapshot.elapsed().as_secs_f32() >= 1.0 {
            last_snapshot = Instant::now();
            let snap = world.lock().expect("world mutex poisoned").snapshot();
            match serde_json::to_string(&snap) {
                Ok(json) => log::info!("snapshot: {json}"),
                Err(err) => log::warn!("snapshot serialization failed: {err}"),
            }
        }
    }

    log::info!("demo finished");
}

/// Start (or restart) a run and launch its trio of spawn-timer threads.
///
/// Each thread captures the generation of the run it belongs to and exits
/// once the world stops running or a newer run has begun. Polling around the
/// sleep is all the cancellation the timers need at this granularity.
fn start_run(world: &Arc<Mutex<WorldState>>) {
    let generation = {
        let mut world = world.lock().expect("world mutex poisoned");
        world.start();
        world.spawn_generation()
    };

    for _ in 0..SPAWN_TIMERS {
        let world = Arc::clone(world);
        thread::spawn(move || {
            let mut rng = rand::rng();
            loop {
                {
                    let world = world.lock().expect("world mutex poisoned");
                    if !world.running() || world.spawn_generation() != generation {
                        break;
                    }
                }
                let delay = rng.random_range(SPAWN_DELAY_MIN..SPAWN_DELAY_MAX);
                thread::sleep(Duration::from_secs_f32(delay));

                let mut world = world.lock().expect("world mutex poisoned");
                if !world.running() || world.spawn_generation() != generation {
                    break;
                }
                world.spawn_enemy();
            }
        });
    }
}
