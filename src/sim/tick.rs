//! Fixed timestep simulation tick
//!
//! One `tick` advances exactly one 60 Hz frame: the state machine, spawning,
//! movement, power-up decay, and collision resolution all happen here.

use glam::Vec2;
use rand::Rng;

use super::state::{
    Collectible, CollectibleKind, GamePhase, GameState, Obstacle, ObstacleKind, Particle, PowerUps,
    Rgb,
};
use crate::consts::*;

/// Input actions for a single tick. All flags are one-shot key presses;
/// the event loop clears them after each consumed tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub slide: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Back out to the menu
    pub cancel: bool,
    /// Start or restart a run
    pub start: bool,
}

impl TickInput {
    /// Reset every one-shot flag
    pub fn clear(&mut self) {
        *self = TickInput::default();
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.start_run();
            }
        }

        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            } else if input.cancel {
                state.phase = GamePhase::Menu;
            }
        }

        GamePhase::GameOver => {
            if input.start {
                state.start_run();
            } else if input.cancel {
                state.phase = GamePhase::Menu;
            }
        }

        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
            if input.cancel {
                state.phase = GamePhase::Menu;
                return;
            }

            if input.jump {
                state.player.jump();
            }
            if input.slide {
                state.player.slide();
            }
            if input.move_left {
                state.player.move_left();
            }
            if input.move_right {
                state.player.move_right();
            }

            advance_playing(state);
        }
    }
}

/// One frame of active gameplay
fn advance_playing(state: &mut GameState) {
    state.time_ticks += 1;
    state.player.advance_frame();

    state.distance += state.scroll_speed;
    state.score += 1;

    // Difficulty ramps at every crossed distance milestone
    while state.distance >= state.next_speed_milestone {
        state.base_speed += SPEED_STEP;
        state.next_speed_milestone += SPEED_MILESTONE_DISTANCE;
        if state.powerups.speed == 0 {
            state.scroll_speed = state.base_speed;
        }
        log::debug!(
            "distance {:.0}: base speed now {:.1}",
            state.distance,
            state.base_speed
        );
    }

    if state.combo_timer > 0 {
        state.combo_timer -= 1;
    } else {
        state.combo = 0;
    }

    spawn_obstacles(state);
    spawn_collectibles(state);

    for ob in &mut state.obstacles {
        ob.advance_frame(state.scroll_speed);
        if ob.pos.x < CULL_X {
            ob.dead = true;
        }
    }
    for c in &mut state.collectibles {
        c.advance_frame(state.scroll_speed);
        if c.pos.x < CULL_X {
            c.dead = true;
        }
    }

    attract_collectibles(state);

    for p in &mut state.particles {
        p.advance_frame();
    }

    decay_powerups(state);
    resolve_collisions(state);

    state.screen_shake = state.screen_shake.saturating_sub(1);

    // Compact everything marked dead this frame
    state.obstacles.retain(|o| !o.dead);
    state.collectibles.retain(|c| !c.dead && !c.collected);
    state.particles.retain(|p| p.life > 0);
}

/// Timer-gated obstacle spawning: uniform lane, uniform variant
fn spawn_obstacles(state: &mut GameState) {
    if state.obstacle_timer == 0 {
        let lane = state.rng.random_range(0..LANE_COUNT);
        let kind = match state.rng.random_range(0..4) {
            0 => ObstacleKind::Barrier,
            1 => ObstacleKind::Low,
            2 => ObstacleKind::Pit,
            _ => ObstacleKind::Moving {
                dir: if state.rng.random::<bool>() { 1.0 } else { -1.0 },
            },
        };
        state.obstacles.push(Obstacle::spawn(kind, lane));
        state.obstacle_timer = state
            .rng
            .random_range(OBSTACLE_SPAWN_MIN..=OBSTACLE_SPAWN_MAX);
    } else {
        state.obstacle_timer -= 1;
    }
}

/// Timer-gated collectible spawning: uniform lane, rarity-weighted variant
fn spawn_collectibles(state: &mut GameState) {
    if state.collectible_timer == 0 {
        let lane = state.rng.random_range(0..LANE_COUNT);
        let kind = collectible_kind_for_roll(state.rng.random::<f32>());
        state.collectibles.push(Collectible::spawn(kind, lane));
        state.collectible_timer = state
            .rng
            .random_range(COLLECTIBLE_SPAWN_MIN..=COLLECTIBLE_SPAWN_MAX);
    } else {
        state.collectible_timer -= 1;
    }
}

/// Map a uniform roll in [0, 1) onto the collectible rarity table:
/// coin 60%, gem 20%, magnet 10%, speed 5%, invincibility 5%
pub fn collectible_kind_for_roll(roll: f32) -> CollectibleKind {
    if roll < 0.60 {
        CollectibleKind::Coin
    } else if roll < 0.80 {
        CollectibleKind::Gem
    } else if roll < 0.90 {
        CollectibleKind::Magnet
    } else if roll < 0.95 {
        CollectibleKind::Speed
    } else {
        CollectibleKind::Invincibility
    }
}

/// While the magnet is active, home coins and gems onto the player
fn attract_collectibles(state: &mut GameState) {
    if state.powerups.magnet == 0 {
        return;
    }
    let target = Vec2::new(state.player.x, state.player.y);
    for c in &mut state.collectibles {
        if !matches!(c.kind, CollectibleKind::Coin | CollectibleKind::Gem) {
            continue;
        }
        let delta = target - c.pos;
        if delta.length() < MAGNET_RADIUS {
            c.pos += delta * MAGNET_PULL;
        }
    }
}

/// Decrement each power-up timer; expiry reverts its effect
fn decay_powerups(state: &mut GameState) {
    let p = &mut state.powerups;
    if p.magnet > 0 {
        p.magnet -= 1;
    }
    if p.double_coins > 0 {
        p.double_coins -= 1;
    }
    if p.speed > 0 {
        p.speed -= 1;
        state.scroll_speed = if p.speed == 0 {
            state.base_speed
        } else {
            state.base_speed * SPEED_MULTIPLIER
        };
    }
    if p.invincibility > 0 {
        p.invincibility -= 1;
        if p.invincibility == 0 {
            state.player.invincible = false;
            state.player.invincible_timer = 0;
        }
    }
}

/// Player-vs-world AABB checks. At most one obstacle is resolved per frame,
/// and the colliding obstacle is removed whether or not it dealt damage.
fn resolve_collisions(state: &mut GameState) {
    let player_box = state.player.hitbox();

    if let Some(idx) = state
        .obstacles
        .iter()
        .position(|o| !o.dead && o.hitbox().intersects(&player_box))
    {
        state.obstacles[idx].dead = true;
        if !state.player.invincible {
            apply_damage(state);
        }
    }

    for idx in 0..state.collectibles.len() {
        let c = &state.collectibles[idx];
        if c.collected || c.dead {
            continue;
        }
        if c.hitbox().intersects(&player_box) {
            collect(state, idx);
        }
    }
}

fn apply_damage(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.screen_shake = SHAKE_FRAMES;
    let at = Vec2::new(state.player.x, state.player.y);
    spawn_burst(state, at, (255, 0, 0), DAMAGE_BURST);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        if state.score > state.high_score {
            state.high_score = state.score;
            log::info!("new high score: {}", state.high_score);
        }
        log::info!(
            "run over: score {}, coins {}, distance {:.0}",
            state.score,
            state.coins,
            state.distance
        );
    } else {
        state.player.invincible = true;
        state.player.invincible_timer = HIT_INVINCIBILITY_FRAMES;
    }
}

fn collect(state: &mut GameState, idx: usize) {
    let (kind, pos) = {
        let c = &mut state.collectibles[idx];
        c.collected = true;
        (c.kind, c.pos)
    };

    match kind {
        CollectibleKind::Coin => {
            let value = scaled_value(kind.value(), &state.powerups);
            state.coins += value;
            state.score += value;
            state.combo += 1;
            state.combo_timer = COMBO_WINDOW_FRAMES;
        }
        CollectibleKind::Gem => {
            let value = scaled_value(kind.value(), &state.powerups);
            state.coins += value;
            state.score += value;
        }
        CollectibleKind::Magnet => state.powerups.magnet = MAGNET_FRAMES,
        CollectibleKind::Speed => state.powerups.speed = SPEED_FRAMES,
        CollectibleKind::Invincibility => {
            state.powerups.invincibility = INVINCIBILITY_FRAMES;
            state.player.invincible = true;
            state.player.invincible_timer = INVINCIBILITY_FRAMES;
        }
    }

    spawn_burst(state, pos, kind.color(), COLLECT_BURST);
}

/// Coin and gem value under the double_coins modifier
fn scaled_value(base: u64, powerups: &PowerUps) -> u64 {
    if powerups.double_coins > 0 { base * 2 } else { base }
}

fn spawn_burst(state: &mut GameState, at: Vec2, color: Rgb, count: usize) {
    for _ in 0..count {
        let vel = Vec2::new(
            state.rng.random_range(-3.0..3.0),
            state.rng.random_range(-5.0..-1.0),
        );
        let size = state.rng.random_range(2..=5) as f32;
        state.particles.push(Particle::new(at, vel, color, size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_center_x;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// State mid-run with spawning pushed far into the future
    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        state.start_run();
        state.obstacle_timer = 10_000;
        state.collectible_timer = 10_000;
        state
    }

    fn obstacle_on_player(state: &GameState) -> Obstacle {
        let mut ob = Obstacle::spawn(ObstacleKind::Barrier, 1);
        ob.pos = Vec2::new(state.player.x - 30.0, SCREEN_HEIGHT - 100.0);
        ob
    }

    fn coin_on_player(state: &GameState) -> Collectible {
        let mut c = Collectible::spawn(CollectibleKind::Coin, 1);
        c.pos = Vec2::new(state.player.x, state.player.y - 10.0);
        c
    }

    #[test]
    fn test_menu_start_begins_run() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_pause_toggle_freezes_world() {
        let mut state = playing_state();
        tick(&mut state, &TickInput::default());
        let score = state.score;

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Frozen: nothing advances while paused
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, score);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_cancel_paths_to_menu() {
        let mut state = playing_state();
        let cancel = TickInput {
            cancel: true,
            ..Default::default()
        };

        tick(&mut state, &cancel);
        assert_eq!(state.phase, GamePhase::Menu);

        let mut state = playing_state();
        state.phase = GamePhase::Paused;
        tick(&mut state, &cancel);
        assert_eq!(state.phase, GamePhase::Menu);

        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        tick(&mut state, &cancel);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_restart_from_game_over_resets_session() {
        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        state.score = 900;
        state.high_score = 900;
        state.lives = 0;

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.high_score, 900, "high score survives the reset");
    }

    #[test]
    fn test_score_accrues_per_frame() {
        let mut state = playing_state();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.distance, 80.0);
    }

    #[test]
    fn test_obstacle_hit_costs_a_life_and_grants_mercy_window() {
        let mut state = playing_state();
        let ob = obstacle_on_player(&state);
        state.obstacles.push(ob);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.player.invincible);
        assert_eq!(state.player.invincible_timer, HIT_INVINCIBILITY_FRAMES);
        assert_eq!(state.screen_shake, SHAKE_FRAMES - 1);
        assert!(state.obstacles.is_empty(), "colliding obstacle is removed");
        assert!(!state.particles.is_empty(), "damage emits a burst");
    }

    #[test]
    fn test_single_obstacle_resolution_per_frame() {
        let mut state = playing_state();
        state.obstacles.push(obstacle_on_player(&state));
        state.obstacles.push(obstacle_on_player(&state));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.obstacles.len(), 1, "only the first overlap resolves");
    }

    #[test]
    fn test_final_hit_ends_run_and_records_high_score() {
        let mut state = playing_state();
        state.lives = 1;
        state.score = 4999;
        state.high_score = 100;
        state.obstacles.push(obstacle_on_player(&state));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, state.score);
    }

    #[test]
    fn test_invincibility_suppresses_damage_until_expiry() {
        let mut state = playing_state();
        state.obstacles.push(obstacle_on_player(&state));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, STARTING_LIVES - 1);

        // The timer decrements ahead of collision checks each frame, so the
        // window suppresses damage while any of it remains
        for frame in 0..HIT_INVINCIBILITY_FRAMES - 1 {
            state.obstacles.clear();
            state.obstacles.push(obstacle_on_player(&state));
            state.obstacle_timer = 10_000;
            tick(&mut state, &TickInput::default());
            assert_eq!(
                state.lives,
                STARTING_LIVES - 1,
                "damaged again at frame {frame}"
            );
        }
        assert!(state.player.invincible);
        assert_eq!(state.player.invincible_timer, 1);

        // The frame that burns the last of the window also reopens damage
        state.obstacles.clear();
        state.obstacles.push(obstacle_on_player(&state));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, STARTING_LIVES - 2);
        assert_eq!(
            state.player.invincible_timer, HIT_INVINCIBILITY_FRAMES,
            "a fresh mercy window follows the new hit"
        );
    }

    #[test]
    fn test_coin_pickup_scores_and_extends_combo() {
        let mut state = playing_state();
        state.collectibles.push(coin_on_player(&state));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.coins, COIN_VALUE);
        assert_eq!(state.score, 1 + COIN_VALUE);
        assert_eq!(state.combo, 1);
        assert_eq!(state.combo_timer, COMBO_WINDOW_FRAMES);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_double_coins_doubles_coin_and_gem_value() {
        let mut state = playing_state();
        state.powerups.double_coins = 50;
        state.collectibles.push(coin_on_player(&state));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.coins, COIN_VALUE * 2);
        assert_eq!(state.score, 1 + COIN_VALUE * 2);

        let mut gem = Collectible::spawn(CollectibleKind::Gem, 1);
        gem.pos = Vec2::new(state.player.x, state.player.y - 10.0);
        state.collectibles.push(gem);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.coins, COIN_VALUE * 2 + GEM_VALUE * 2);
    }

    #[test]
    fn test_gem_does_not_extend_combo() {
        let mut state = playing_state();
        let mut gem = Collectible::spawn(CollectibleKind::Gem, 1);
        gem.pos = Vec2::new(state.player.x, state.player.y - 10.0);
        state.collectibles.push(gem);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.coins, GEM_VALUE);
        assert_eq!(state.combo, 0);
    }

    #[test]
    fn test_combo_resets_after_decay_window() {
        let mut state = playing_state();
        state.collectibles.push(coin_on_player(&state));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.combo, 1);

        for _ in 0..=COMBO_WINDOW_FRAMES {
            state.obstacles.clear();
            state.obstacle_timer = 10_000;
            state.collectible_timer = 10_000;
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.combo, 0);
    }

    #[test]
    fn test_power_pickups_arm_their_timers() {
        let mut state = playing_state();
        let mut pickup = Collectible::spawn(CollectibleKind::Invincibility, 1);
        pickup.pos = Vec2::new(state.player.x, state.player.y - 10.0);
        state.collectibles.push(pickup);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.powerups.invincibility, INVINCIBILITY_FRAMES);
        assert!(state.player.invincible);
        assert_eq!(state.player.invincible_timer, INVINCIBILITY_FRAMES);
        assert_eq!(state.coins, 0, "power-ups are worth no points");

        let mut magnet = Collectible::spawn(CollectibleKind::Magnet, 1);
        magnet.pos = Vec2::new(state.player.x, state.player.y - 10.0);
        state.collectibles.push(magnet);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.powerups.magnet, MAGNET_FRAMES);
    }

    #[test]
    fn test_speed_powerup_scales_and_reverts() {
        let mut state = playing_state();
        state.powerups.speed = 2;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.scroll_speed, BASE_SPEED * SPEED_MULTIPLIER);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.powerups.speed, 0);
        assert_eq!(state.scroll_speed, BASE_SPEED);
    }

    #[test]
    fn test_distance_milestone_raises_base_speed() {
        let mut state = playing_state();
        state.distance = 496.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.base_speed, BASE_SPEED + SPEED_STEP);
        assert_eq!(state.scroll_speed, BASE_SPEED + SPEED_STEP);
        assert_eq!(
            state.next_speed_milestone,
            SPEED_MILESTONE_DISTANCE * 2.0
        );
    }

    #[test]
    fn test_milestone_with_speed_powerup_active() {
        let mut state = playing_state();
        state.distance = 496.0;
        state.powerups.speed = 100;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.base_speed, BASE_SPEED + SPEED_STEP);
        // Current speed stays scaled off the new base
        assert_eq!(
            state.scroll_speed,
            (BASE_SPEED + SPEED_STEP) * SPEED_MULTIPLIER
        );
    }

    #[test]
    fn test_magnet_pulls_nearby_coins() {
        let mut state = playing_state();
        state.powerups.magnet = 100;
        let mut coin = Collectible::spawn(CollectibleKind::Coin, 1);
        coin.pos = Vec2::new(state.player.x + 100.0, COLLECTIBLE_Y);
        state.collectibles.push(coin);

        tick(&mut state, &TickInput::default());
        let coin = &state.collectibles[0];
        assert!(
            coin.pos.y > COLLECTIBLE_Y,
            "attracted coins home on the player, not just the scroll"
        );
    }

    #[test]
    fn test_magnet_ignores_power_pickups() {
        let mut state = playing_state();
        state.powerups.magnet = 100;
        let mut pickup = Collectible::spawn(CollectibleKind::Speed, 1);
        pickup.pos = Vec2::new(state.player.x + 100.0, COLLECTIBLE_Y);
        state.collectibles.push(pickup);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.collectibles[0].pos.y, COLLECTIBLE_Y);
    }

    #[test]
    fn test_spawn_timers_reset_within_range() {
        let mut state = GameState::new(7);
        state.start_run();

        // Both timers start expired, so the first frame spawns
        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.collectibles.len(), 1);
        assert!((OBSTACLE_SPAWN_MIN..=OBSTACLE_SPAWN_MAX).contains(&state.obstacle_timer));
        assert!(
            (COLLECTIBLE_SPAWN_MIN..=COLLECTIBLE_SPAWN_MAX).contains(&state.collectible_timer)
        );
    }

    #[test]
    fn test_entities_cull_past_left_edge() {
        let mut state = playing_state();
        let mut ob = Obstacle::spawn(ObstacleKind::Low, 0);
        ob.pos.x = CULL_X + 1.0;
        state.obstacles.push(ob);
        let mut c = Collectible::spawn(CollectibleKind::Coin, 0);
        c.pos.x = CULL_X + 1.0;
        state.collectibles.push(c);

        tick(&mut state, &TickInput::default());
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_weighted_draw_thresholds() {
        assert_eq!(collectible_kind_for_roll(0.0), CollectibleKind::Coin);
        assert_eq!(collectible_kind_for_roll(0.599), CollectibleKind::Coin);
        assert_eq!(collectible_kind_for_roll(0.60), CollectibleKind::Gem);
        assert_eq!(collectible_kind_for_roll(0.799), CollectibleKind::Gem);
        assert_eq!(collectible_kind_for_roll(0.80), CollectibleKind::Magnet);
        assert_eq!(collectible_kind_for_roll(0.899), CollectibleKind::Magnet);
        assert_eq!(collectible_kind_for_roll(0.90), CollectibleKind::Speed);
        assert_eq!(collectible_kind_for_roll(0.949), CollectibleKind::Speed);
        assert_eq!(
            collectible_kind_for_roll(0.95),
            CollectibleKind::Invincibility
        );
        assert_eq!(
            collectible_kind_for_roll(0.999),
            CollectibleKind::Invincibility
        );
    }

    #[test]
    fn test_weighted_draw_converges_to_rarity_table() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut counts = [0u32; 5];
        let trials = 100_000;
        for _ in 0..trials {
            let slot = match collectible_kind_for_roll(rng.random::<f32>()) {
                CollectibleKind::Coin => 0,
                CollectibleKind::Gem => 1,
                CollectibleKind::Magnet => 2,
                CollectibleKind::Speed => 3,
                CollectibleKind::Invincibility => 4,
            };
            counts[slot] += 1;
        }

        let expected = [0.60, 0.20, 0.10, 0.05, 0.05];
        for (count, expected) in counts.iter().zip(expected) {
            let observed = *count as f32 / trials as f32;
            assert!(
                (observed - expected).abs() < 0.02,
                "observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_same_seed_same_inputs_same_run() {
        let mut a = GameState::new(99_999);
        let mut b = GameState::new(99_999);
        a.start_run();
        b.start_run();

        for frame in 0..300u32 {
            let input = TickInput {
                jump: frame % 37 == 0,
                slide: frame % 53 == 0,
                move_left: frame % 29 == 0,
                move_right: frame % 41 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.coins, b.coins);
        assert_eq!(a.distance, b.distance);
        assert_eq!(a.player, b.player);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.collectibles, b.collectibles);
        assert_eq!(a.particles, b.particles);
    }

    proptest! {
        #[test]
        fn prop_player_invariants_hold_under_any_inputs(
            actions in proptest::collection::vec(0u8..8, 1..400)
        ) {
            let mut state = GameState::new(7);
            state.start_run();

            for a in actions {
                let mut input = TickInput::default();
                match a {
                    0 => input.jump = true,
                    1 => input.slide = true,
                    2 => input.move_left = true,
                    3 => input.move_right = true,
                    4 => input.pause = true,
                    _ => {}
                }
                tick(&mut state, &input);

                prop_assert!(state.player.lane < LANE_COUNT);
                prop_assert!(state.player.x >= 0.0);
                prop_assert!(state.player.y >= 0.0);
                prop_assert!(!(state.player.jumping && state.player.sliding));
                prop_assert!(
                    !state.player.moving
                        || state.player.target_x == lane_center_x(state.player.lane)
                );
            }
        }
    }
}
