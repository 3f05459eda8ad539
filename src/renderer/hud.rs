//! HUD and screen overlays: pure presentation of session state
//!
//! Text layout only - every number shown here is read straight off the
//! [`GameState`](crate::sim::GameState).

use macroquad::color::{BLACK, Color, GOLD, RED, WHITE, YELLOW};
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::time::get_fps;
use macroquad::window::clear_background;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

const FONT_SMALL: f32 = 24.0;
const FONT_REGULAR: f32 = 36.0;
const FONT_BIG: f32 = 72.0;

/// In-game readout: score, coins, lives, speed, active power-ups, combo
pub fn draw_hud(state: &GameState, settings: &Settings) {
    draw_text(&format!("Score: {}", state.score), 10.0, 40.0, FONT_REGULAR, WHITE);
    draw_text(&format!("Coins: {}", state.coins), 10.0, 80.0, FONT_REGULAR, GOLD);

    for i in 0..state.lives {
        draw_circle(20.0 + i as f32 * 30.0, 110.0, 10.0, RED);
    }

    draw_text(
        &format!("Speed: {:.1}", state.scroll_speed),
        10.0,
        150.0,
        FONT_SMALL,
        WHITE,
    );

    let mut y = 180.0;
    for (name, frames) in state.powerups.entries() {
        if frames > 0 {
            draw_text(&powerup_label(name, frames), 10.0, y, FONT_SMALL, WHITE);
            y += 25.0;
        }
    }

    if state.combo > 1 {
        draw_text(
            &format!("COMBO x{}", state.combo),
            SCREEN_WIDTH - 200.0,
            40.0,
            FONT_REGULAR,
            YELLOW,
        );
    }

    if settings.show_fps {
        draw_text(
            &format!("{} fps", get_fps()),
            SCREEN_WIDTH - 100.0,
            SCREEN_HEIGHT - 20.0,
            FONT_SMALL,
            WHITE,
        );
    }
}

/// Title screen with key bindings
pub fn draw_menu(state: &GameState) {
    clear_background(BLACK);
    draw_text_centered("RELIC RUSH", 220.0, FONT_BIG, GOLD);

    let lines = [
        "SPACE/UP: Jump",
        "DOWN: Slide",
        "LEFT/RIGHT: Switch lanes",
        "P: Pause",
        "ESC: Menu",
        "Q: Quit",
        "",
        "Press SPACE to start!",
    ];
    let mut y = 320.0;
    for line in lines {
        draw_text_centered(line, y, FONT_REGULAR, WHITE);
        y += 40.0;
    }

    if state.high_score > 0 {
        draw_text_centered(
            &format!("High Score: {}", state.high_score),
            y + 40.0,
            FONT_REGULAR,
            GOLD,
        );
    }
}

/// Translucent freeze-frame overlay
pub fn draw_pause_overlay() {
    overlay();
    draw_text_centered("PAUSED", SCREEN_HEIGHT / 2.0, FONT_BIG, WHITE);
}

/// End-of-run overlay with final and best score
pub fn draw_game_over(state: &GameState) {
    overlay();
    draw_text_centered("GAME OVER", 300.0, FONT_BIG, RED);
    draw_text_centered(&format!("Final Score: {}", state.score), 400.0, FONT_REGULAR, WHITE);
    draw_text_centered(
        &format!("High Score: {}", state.high_score),
        450.0,
        FONT_REGULAR,
        GOLD,
    );
    draw_text_centered(
        "Press SPACE to restart or ESC for menu",
        550.0,
        FONT_REGULAR,
        WHITE,
    );
}

/// Remaining power-up time, shown in whole seconds
fn powerup_label(name: &str, frames: u32) -> String {
    format!("{name}: {}s", frames / 60)
}

fn overlay() {
    draw_rectangle(
        0.0,
        0.0,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        Color::from_rgba(0, 0, 0, 128),
    );
}

fn draw_text_centered(text: &str, baseline_y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, baseline_y, font_size, color);
}
