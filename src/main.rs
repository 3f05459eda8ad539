//! Relic Rush entry point
//!
//! Owns the platform loop: input polling, fixed-timestep simulation, drawing,
//! and persistence triggers. Everything else lives in the library crate.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::input::{KeyCode, is_key_pressed};
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use relic_rush::consts::{FRAME_DT, MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH};
use relic_rush::highscores::HighScore;
use relic_rush::renderer::{hud, scene};
use relic_rush::settings::Settings;
use relic_rush::sim::{GamePhase, GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Relic Rush".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Fold this display frame's key presses into the pending tick input.
/// Flags accumulate until a tick consumes them, so presses landing between
/// simulation steps are never dropped.
fn poll_input(input: &mut TickInput) {
    input.jump |= is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up);
    input.slide |= is_key_pressed(KeyCode::Down);
    input.move_left |= is_key_pressed(KeyCode::Left);
    input.move_right |= is_key_pressed(KeyCode::Right);
    input.pause |= is_key_pressed(KeyCode::P);
    input.cancel |= is_key_pressed(KeyCode::Escape);
    input.start |= is_key_pressed(KeyCode::Space);
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load();
    let record = HighScore::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("session seed {seed}");

    let mut state = GameState::new(seed);
    state.high_score = record.high_score;
    let mut saved_high_score = record.high_score;

    let mut input = TickInput::default();
    let mut accumulator = 0.0_f32;

    loop {
        if is_key_pressed(KeyCode::Q) {
            break;
        }
        poll_input(&mut input);

        // Fixed 60 Hz simulation, decoupled from the display rate
        accumulator += get_frame_time().min(0.25);
        let mut substeps = 0;
        while accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            input.clear();
            accumulator -= FRAME_DT;
            substeps += 1;
        }

        // Persist a freshly beaten high score as the run ends
        if state.phase == GamePhase::GameOver && state.high_score > saved_high_score {
            HighScore::new(state.high_score).save();
            saved_high_score = state.high_score;
        }

        match state.phase {
            GamePhase::Menu => hud::draw_menu(&state),
            GamePhase::Playing => {
                scene::draw_scene(&state, &settings);
                hud::draw_hud(&state, &settings);
            }
            GamePhase::Paused => {
                scene::draw_scene(&state, &settings);
                hud::draw_hud(&state, &settings);
                hud::draw_pause_overlay();
            }
            GamePhase::GameOver => {
                scene::draw_scene(&state, &settings);
                hud::draw_game_over(&state);
            }
        }

        next_frame().await;
    }

    log::info!("quit requested, exiting");
}
