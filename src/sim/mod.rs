//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order, single writer)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod noise;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use noise::organic_noise;
pub use state::{Enemy, EnemyBullet, Phase, Player, PlayerBullet, RenderSnapshot, WorldState};
