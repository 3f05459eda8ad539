//! macroquad presentation layer
//!
//! Pure drawing over [`GameState`](crate::sim::GameState) - reads state, never
//! mutates it. `scene` renders the world, `hud` renders text overlays.

pub mod hud;
pub mod scene;
