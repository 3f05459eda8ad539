//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Seeded RNG only
//! - Mark dead, compact at frame end
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    Collectible, CollectibleKind, GamePhase, GameState, Obstacle, ObstacleKind, Particle,
    Player, PowerUps, Rgb,
};
pub use tick::{TickInput, collectible_kind_for_roll, tick};
