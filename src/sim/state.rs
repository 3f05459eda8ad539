//! Game state and core simulation types
//!
//! Every entity collection and session scalar is owned by [`GameState`];
//! entities hold no back-references and the sim performs no I/O.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::lane_center_x;

/// Sim-level color, mapped to a canvas color by the renderer
pub type Rgb = (u8, u8, u8);

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended, score settled
    GameOver,
}

/// The runner character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Occupied lane, always in [0, LANE_COUNT)
    pub lane: usize,
    /// Horizontal center, eased toward the lane center mid-transition
    pub x: f32,
    pub target_x: f32,
    /// True while easing between lanes; blocks further lane changes
    pub moving: bool,
    /// Feet y; PLAYER_GROUND_Y when grounded
    pub y: f32,
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    pub jumping: bool,
    pub sliding: bool,
    pub slide_timer: u32,
    pub invincible: bool,
    pub invincible_timer: u32,
    pub anim_frame: u8,
    anim_timer: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let lane = 1;
        let x = lane_center_x(lane);
        Self {
            lane,
            x,
            target_x: x,
            moving: false,
            y: PLAYER_GROUND_Y,
            vel_y: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            jumping: false,
            sliding: false,
            slide_timer: 0,
            invincible: false,
            invincible_timer: 0,
            anim_frame: 0,
            anim_timer: 0,
        }
    }

    /// Start a jump. No-op while jumping or sliding.
    pub fn jump(&mut self) {
        if !self.jumping && !self.sliding {
            self.jumping = true;
            self.vel_y = JUMP_IMPULSE;
        }
    }

    /// Start a slide (shrunk hitbox). No-op while jumping or sliding.
    pub fn slide(&mut self) {
        if !self.jumping && !self.sliding {
            self.sliding = true;
            self.slide_timer = SLIDE_FRAMES;
            self.height = PLAYER_SLIDE_HEIGHT;
        }
    }

    /// Begin a transition one lane left. No-op at the boundary or mid-transition.
    pub fn move_left(&mut self) {
        if self.lane > 0 && !self.moving {
            self.lane -= 1;
            self.target_x = lane_center_x(self.lane);
            self.moving = true;
        }
    }

    /// Begin a transition one lane right. No-op at the boundary or mid-transition.
    pub fn move_right(&mut self) {
        if self.lane < LANE_COUNT - 1 && !self.moving {
            self.lane += 1;
            self.target_x = lane_center_x(self.lane);
            self.moving = true;
        }
    }

    /// Advance one frame: lane easing, jump physics, timers, animation
    pub fn advance_frame(&mut self) {
        if self.moving {
            if (self.x - self.target_x).abs() > LANE_SNAP_DISTANCE {
                self.x += (self.target_x - self.x) * LANE_EASE;
            } else {
                self.x = self.target_x;
                self.moving = false;
            }
        }

        if self.jumping {
            self.vel_y += GRAVITY;
            self.y += self.vel_y;
            if self.y >= PLAYER_GROUND_Y {
                self.y = PLAYER_GROUND_Y;
                self.vel_y = 0.0;
                self.jumping = false;
            }
        }

        if self.sliding {
            self.slide_timer = self.slide_timer.saturating_sub(1);
            if self.slide_timer == 0 {
                self.sliding = false;
                self.height = PLAYER_HEIGHT;
            }
        }

        if self.invincible {
            self.invincible_timer = self.invincible_timer.saturating_sub(1);
            if self.invincible_timer == 0 {
                self.invincible = false;
            }
        }

        self.anim_timer += 1;
        if self.anim_timer >= ANIM_PERIOD_TICKS {
            self.anim_timer = 0;
            self.anim_frame = (self.anim_frame + 1) % ANIM_FRAMES;
        }
    }

    /// Collision box: current (possibly shrunk) size, feet-anchored, centered on x
    pub fn hitbox(&self) -> Aabb {
        Aabb::anchored(self.x, self.y, self.width, self.height)
    }
}

/// Obstacle variants; each carries its own geometry and behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Tall spiked wall, must be dodged sideways
    Barrier,
    /// Knee-high block
    Low,
    /// Wide dark gap in the ground
    Pit,
    /// Drifts laterally while scrolling, bouncing off the screen edges
    Moving { dir: f32 },
}

impl ObstacleKind {
    pub fn width(&self) -> f32 {
        match self {
            ObstacleKind::Pit => 120.0,
            _ => 60.0,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            ObstacleKind::Barrier => 100.0,
            ObstacleKind::Low => 40.0,
            ObstacleKind::Pit => 50.0,
            ObstacleKind::Moving { .. } => 80.0,
        }
    }

    /// Ground line the variant sits on
    pub fn baseline_y(&self) -> f32 {
        match self {
            ObstacleKind::Pit => SCREEN_HEIGHT - 50.0,
            _ => SCREEN_HEIGHT - 100.0,
        }
    }

    /// Horizontal shift applied at spawn (pits are widened leftward)
    pub fn spawn_x_offset(&self) -> f32 {
        match self {
            ObstacleKind::Pit => -60.0,
            _ => 0.0,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            ObstacleKind::Barrier => (139, 69, 19),
            ObstacleKind::Low => (128, 128, 128),
            ObstacleKind::Pit => (0, 0, 0),
            ObstacleKind::Moving { .. } => (255, 0, 0),
        }
    }
}

/// A scrolling hazard
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge x, baseline y
    pub pos: Vec2,
    /// Marked on collision or cull; compacted at frame end
    pub dead: bool,
}

impl Obstacle {
    /// Spawn off the right edge, staggered by the chosen lane's center
    pub fn spawn(kind: ObstacleKind, lane: usize) -> Self {
        let x = SCREEN_WIDTH + lane_center_x(lane) + kind.spawn_x_offset();
        Self {
            kind,
            pos: Vec2::new(x, kind.baseline_y()),
            dead: false,
        }
    }

    /// Scroll left one frame; the moving variant also drifts laterally
    pub fn advance_frame(&mut self, scroll_speed: f32) {
        self.pos.x -= scroll_speed;

        if let ObstacleKind::Moving { dir } = &mut self.kind {
            self.pos.x += *dir * MOVING_DRIFT;
            let max_x = SCREEN_WIDTH - 60.0;
            if self.pos.x <= 0.0 {
                *dir = 1.0;
            } else if self.pos.x >= max_x {
                *dir = -1.0;
            }
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(
            self.pos.x,
            self.pos.y - self.kind.height(),
            self.kind.width(),
            self.kind.height(),
        )
    }
}

/// Collectible variants: scoring items and power-up pickups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Coin,
    Gem,
    Magnet,
    Speed,
    Invincibility,
}

impl CollectibleKind {
    /// Points granted on pickup (0 for power-ups)
    pub fn value(&self) -> u64 {
        match self {
            CollectibleKind::Coin => COIN_VALUE,
            CollectibleKind::Gem => GEM_VALUE,
            _ => 0,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            CollectibleKind::Gem => 25.0,
            _ => 20.0,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            CollectibleKind::Coin => (255, 215, 0),
            CollectibleKind::Gem => (128, 0, 128),
            CollectibleKind::Magnet => (255, 0, 0),
            CollectibleKind::Speed => (0, 255, 0),
            CollectibleKind::Invincibility => (255, 255, 0),
        }
    }
}

/// A scrolling pickup
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Left edge x, baseline y
    pub pos: Vec2,
    pub collected: bool,
    /// Counter for the float animation, wraps at 60
    pub anim: u8,
    /// Marked on cull; compacted at frame end
    pub dead: bool,
}

impl Collectible {
    /// Spawn off the right edge, staggered by the chosen lane's center
    pub fn spawn(kind: CollectibleKind, lane: usize) -> Self {
        Self {
            kind,
            pos: Vec2::new(SCREEN_WIDTH + lane_center_x(lane), COLLECTIBLE_Y),
            collected: false,
            anim: 0,
            dead: false,
        }
    }

    pub fn advance_frame(&mut self, scroll_speed: f32) {
        self.pos.x -= scroll_speed;
        self.anim = (self.anim + 1) % 60;
    }

    pub fn hitbox(&self) -> Aabb {
        let size = self.kind.size();
        Aabb::new(self.pos.x, self.pos.y - size, size, size)
    }
}

/// A short-lived visual spark
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, size: f32) -> Self {
        Self {
            pos,
            vel,
            color,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
            size,
        }
    }

    /// Drift under light gravity, burn one frame of life
    pub fn advance_frame(&mut self) {
        self.pos += self.vel;
        self.vel.y += 0.1;
        self.life = self.life.saturating_sub(1);
    }

    /// Fade factor in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Remaining frames per timed rule modifier; each decays independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerUps {
    pub magnet: u32,
    pub speed: u32,
    pub invincibility: u32,
    pub double_coins: u32,
}

impl PowerUps {
    /// Name/frames view for the HUD
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("magnet", self.magnet),
            ("speed", self.speed),
            ("invincibility", self.invincibility),
            ("double_coins", self.double_coins),
        ]
    }
}

/// Complete session state, owned by the controller
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub powerups: PowerUps,

    pub score: u64,
    pub coins: u64,
    pub lives: u8,
    /// Scroll speed without power-up scaling; grows at distance milestones
    pub base_speed: f32,
    /// Effective scroll speed this frame
    pub scroll_speed: f32,
    pub distance: f32,
    pub next_speed_milestone: f32,
    pub combo: u32,
    pub combo_timer: u32,
    /// Frames of screen shake remaining
    pub screen_shake: u32,
    pub obstacle_timer: u32,
    pub collectible_timer: u32,
    /// Best score across sessions; persisted by the event loop
    pub high_score: u64,
    /// Monotonic tick counter (drives render-side jitter)
    pub time_ticks: u64,

    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh state at the menu with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            player: Player::new(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            particles: Vec::new(),
            powerups: PowerUps::default(),
            score: 0,
            coins: 0,
            lives: STARTING_LIVES,
            base_speed: BASE_SPEED,
            scroll_speed: BASE_SPEED,
            distance: 0.0,
            next_speed_milestone: SPEED_MILESTONE_DISTANCE,
            combo: 0,
            combo_timer: 0,
            screen_shake: 0,
            obstacle_timer: 0,
            collectible_timer: 0,
            high_score: 0,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full session reset into Playing. High score and RNG stream are kept.
    pub fn start_run(&mut self) {
        log::info!("starting run (high score {})", self.high_score);
        self.phase = GamePhase::Playing;
        self.player = Player::new();
        self.obstacles.clear();
        self.collectibles.clear();
        self.particles.clear();
        self.powerups = PowerUps::default();
        self.score = 0;
        self.coins = 0;
        self.lives = STARTING_LIVES;
        self.base_speed = BASE_SPEED;
        self.scroll_speed = BASE_SPEED;
        self.distance = 0.0;
        self.next_speed_milestone = SPEED_MILESTONE_DISTANCE;
        self.combo = 0;
        self.combo_timer = 0;
        self.screen_shake = 0;
        self.obstacle_timer = 0;
        self.collectible_timer = 0;
    }
}
