//! World rendering: background, entities, particles
//!
//! Everything is drawn with a shared shake offset so damage pulses perturb the
//! whole scene. The jitter is hashed off the tick counter - the renderer never
//! touches an RNG.

use macroquad::color::{BLACK, BLUE, Color, GOLD, ORANGE, RED, WHITE, YELLOW};
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle, draw_triangle};
use macroquad::window::clear_background;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Collectible, CollectibleKind, GameState, Obstacle, ObstacleKind, Player, Rgb};

/// Parallax bands: (scroll speed, color, top y, bottom y)
const BG_LAYERS: [(f32, Rgb, f32, f32); 3] = [
    (2.0, (50, 50, 100), 0.0, 280.0),
    (4.0, (70, 70, 120), 280.0, 480.0),
    (6.0, (90, 90, 140), 480.0, SCREEN_HEIGHT - 100.0),
];

/// Background tiling interval
const BG_TILE: f32 = 100.0;

const GROUND_COLOR: Rgb = (139, 69, 19);

fn rgb(c: Rgb) -> Color {
    Color::from_rgba(c.0, c.1, c.2, 255)
}

fn rgba(c: Rgb, alpha: f32) -> Color {
    Color::from_rgba(c.0, c.1, c.2, (alpha * 255.0) as u8)
}

/// Draw the full world for the current frame
pub fn draw_scene(state: &GameState, settings: &Settings) {
    let (sx, sy) = if settings.effective_screen_shake() {
        shake_offset(state)
    } else {
        (0.0, 0.0)
    };

    clear_background(BLACK);
    draw_background(state, sx, sy);

    if settings.particles {
        for p in &state.particles {
            draw_circle(p.pos.x + sx, p.pos.y + sy, p.size, rgba(p.color, p.alpha()));
        }
    }

    for ob in &state.obstacles {
        draw_obstacle(ob, sx, sy);
    }
    for c in &state.collectibles {
        draw_collectible(c, sx, sy);
    }
    draw_player(&state.player, sx, sy);
}

/// Deterministic jitter in [-shake, shake], hashed off the tick counter
fn shake_offset(state: &GameState) -> (f32, f32) {
    if state.screen_shake == 0 {
        return (0.0, 0.0);
    }
    let magnitude = state.screen_shake as f32;
    let hash = state.time_ticks.wrapping_mul(2654435761);
    let jx = (hash % 1000) as f32 / 1000.0 * 2.0 - 1.0;
    let jy = ((hash >> 10) % 1000) as f32 / 1000.0 * 2.0 - 1.0;
    (jx * magnitude, jy * magnitude)
}

fn draw_background(state: &GameState, sx: f32, sy: f32) {
    // Parallax bands, each tiled and scrolled at its own speed
    for (speed, color, top, bottom) in BG_LAYERS {
        draw_rectangle(sx, top + sy, SCREEN_WIDTH, bottom - top, rgb(color));

        let seam = rgb((color.0 / 2, color.1 / 2, color.2 / 2));
        let offset = -((state.time_ticks as f32 * speed) % BG_TILE);
        let mut x = offset;
        while x < SCREEN_WIDTH {
            draw_line(x + sx, top + sy, x + sx, bottom + sy, 2.0, seam);
            x += BG_TILE;
        }
    }

    // Ground band and lane dividers
    let ground_y = SCREEN_HEIGHT - 100.0;
    draw_rectangle(sx, ground_y + sy, SCREEN_WIDTH, 100.0, rgb(GROUND_COLOR));
    for lane in 1..LANE_COUNT {
        let x = lane as f32 * LANE_WIDTH + sx;
        draw_line(x, ground_y + sy, x, SCREEN_HEIGHT + sy, 2.0, WHITE);
    }
}

fn draw_obstacle(ob: &Obstacle, sx: f32, sy: f32) {
    let b = ob.hitbox();
    let (x, y) = (b.x + sx, b.y + sy);
    draw_rectangle(x, y, b.w, b.h, rgb(ob.kind.color()));

    if matches!(ob.kind, ObstacleKind::Barrier) {
        // Spikes along the top edge
        let mut i = 0.0;
        while i + 10.0 <= b.w {
            draw_triangle(
                vec2(x + i, y),
                vec2(x + i + 5.0, y - 10.0),
                vec2(x + i + 10.0, y),
                BLACK,
            );
            i += 10.0;
        }
    }
}

fn draw_collectible(c: &Collectible, sx: f32, sy: f32) {
    if c.collected {
        return;
    }
    let b = c.hitbox();
    let float = (c.anim as f32 * 0.1).sin() * 3.0;
    let (x, y) = (b.x + sx, b.y + sy + float);
    let (cx, cy) = (x + b.w / 2.0, y + b.h / 2.0);

    match c.kind {
        CollectibleKind::Coin => {
            draw_circle(cx, cy, 10.0, GOLD);
            draw_circle(cx, cy, 6.0, YELLOW);
        }
        CollectibleKind::Gem => {
            let color = rgb(c.kind.color());
            draw_triangle(vec2(cx, y), vec2(x + b.w, cy), vec2(cx, y + b.h), color);
            draw_triangle(vec2(cx, y), vec2(x, cy), vec2(cx, y + b.h), color);
        }
        CollectibleKind::Magnet => {
            draw_rectangle(x, y, b.w, b.h, RED);
            draw_rectangle(x + 5.0, y + 5.0, 10.0, 10.0, WHITE);
        }
        CollectibleKind::Speed => {
            draw_triangle(
                vec2(x, y + b.h),
                vec2(x + b.w, cy),
                vec2(x, y),
                rgb(c.kind.color()),
            );
        }
        CollectibleKind::Invincibility => {
            draw_circle(cx, cy, 12.0, YELLOW);
            draw_circle(cx, cy, 8.0, ORANGE);
        }
    }
}

fn draw_player(player: &Player, sx: f32, sy: f32) {
    let b = player.hitbox();
    let (x, y) = (b.x + sx, b.y + sy);

    // Flash while the mercy window is open
    let color = if player.invincible && (player.invincible_timer / 5) % 2 == 0 {
        YELLOW
    } else {
        BLUE
    };
    draw_rectangle(x, y, b.w, b.h, color);

    draw_circle(x + 15.0, y + 15.0, 5.0, BLACK);
    draw_circle(x + 45.0, y + 15.0, 5.0, BLACK);

    // Leg stride on the first half of the run cycle
    if player.anim_frame < 2 && !player.sliding {
        draw_line(x + 10.0, y + 50.0, x + 20.0, y + 70.0, 3.0, BLACK);
        draw_line(x + 40.0, y + 50.0, x + 50.0, y + 70.0, 3.0, BLACK);
    }
}
