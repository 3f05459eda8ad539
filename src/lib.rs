//! Relic Rush - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `renderer`: macroquad presentation layer (scene + HUD)
//! - `highscores`: Persisted high score record
//! - `settings`: Presentation preferences

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one frame per tick)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per render frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Canvas dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Lane geometry - three tracks across the canvas
    pub const LANE_COUNT: usize = 3;
    pub const LANE_WIDTH: f32 = SCREEN_WIDTH / LANE_COUNT as f32;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SLIDE_HEIGHT: f32 = 40.0;
    /// Baseline the player stands on (feet y)
    pub const PLAYER_GROUND_Y: f32 = SCREEN_HEIGHT - 150.0;
    /// Gravity per frame² while airborne
    pub const GRAVITY: f32 = 0.8;
    /// Upward impulse applied on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -15.0;
    pub const SLIDE_FRAMES: u32 = 30;
    /// Lane transition easing: fraction of remaining distance per frame
    pub const LANE_EASE: f32 = 0.2;
    /// Snap to the lane center when within this distance
    pub const LANE_SNAP_DISTANCE: f32 = 5.0;
    /// Run-cycle animation: 4 frames, advanced every 10 ticks
    pub const ANIM_FRAMES: u8 = 4;
    pub const ANIM_PERIOD_TICKS: u8 = 10;

    /// Scroll speed
    pub const BASE_SPEED: f32 = 8.0;
    /// Base speed gain at each distance milestone
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_MILESTONE_DISTANCE: f32 = 500.0;
    /// Scroll multiplier while the speed power-up is active
    pub const SPEED_MULTIPLIER: f32 = 1.5;

    /// Session
    pub const STARTING_LIVES: u8 = 3;
    pub const COMBO_WINDOW_FRAMES: u32 = 120;
    pub const SHAKE_FRAMES: u32 = 20;

    /// Invincibility window granted after taking a hit
    pub const HIT_INVINCIBILITY_FRAMES: u32 = 120;
    /// Power-up durations
    pub const MAGNET_FRAMES: u32 = 600;
    pub const SPEED_FRAMES: u32 = 300;
    pub const INVINCIBILITY_FRAMES: u32 = 300;

    /// Magnet attraction
    pub const MAGNET_RADIUS: f32 = 150.0;
    /// Fraction of the remaining distance covered per frame while attracted
    pub const MAGNET_PULL: f32 = 0.1;

    /// Spawn timer ranges (frames, inclusive)
    pub const OBSTACLE_SPAWN_MIN: u32 = 60;
    pub const OBSTACLE_SPAWN_MAX: u32 = 120;
    pub const COLLECTIBLE_SPAWN_MIN: u32 = 30;
    pub const COLLECTIBLE_SPAWN_MAX: u32 = 90;

    /// Entities are culled once fully past the left edge
    pub const CULL_X: f32 = -100.0;

    /// Collectible values
    pub const COIN_VALUE: u64 = 10;
    pub const GEM_VALUE: u64 = 50;
    /// Collectibles ride above the ground band
    pub const COLLECTIBLE_Y: f32 = SCREEN_HEIGHT - 200.0;

    /// Lateral drift per frame for the moving obstacle variant
    pub const MOVING_DRIFT: f32 = 2.0;

    /// Particle burst sizes
    pub const DAMAGE_BURST: usize = 10;
    pub const COLLECT_BURST: usize = 5;
    pub const PARTICLE_LIFE: u32 = 60;
}

/// Center x of a lane (0 is leftmost)
#[inline]
pub fn lane_center_x(lane: usize) -> f32 {
    consts::LANE_WIDTH / 2.0 + lane as f32 * consts::LANE_WIDTH
}
