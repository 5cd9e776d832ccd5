//! Drawing contract between the game and a backend.
//!
//! [`paint`] turns a [`GameState`] into a handful of primitive calls on a
//! [`Canvas`]. Coordinates are playfield pixels; backends decide how pixels map
//! to whatever they rasterize onto.

use crate::game::{GameConfig, GameState};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Font request for text primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Point size; also the baseline offset of the score line
    pub size: i32,
    pub bold: bool,
}

pub const APPLE_COLOR: Rgb = Rgb::RED;
pub const HEAD_COLOR: Rgb = Rgb::GREEN;
pub const BODY_COLOR: Rgb = Rgb(45, 180, 0);
pub const TEXT_COLOR: Rgb = Rgb::RED;

pub const SCORE_FONT: Font = Font {
    size: 40,
    bold: true,
};
pub const BANNER_FONT: Font = Font {
    size: 75,
    bold: true,
};

pub const GAME_OVER_TEXT: &str = "Game Over";

/// Drawing primitives a backend provides
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);

    /// Draw `text` with its left edge at `x` and its baseline at `y`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Rgb);

    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str, font: Font) -> i32;
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Draw the current frame: the board while running, the game over screen after
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, config: &GameConfig) {
    if state.running {
        paint_board(canvas, state, config);
    } else {
        paint_game_over(canvas, state, config);
    }
}

fn paint_board<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, config: &GameConfig) {
    let unit = config.unit_size;

    canvas.fill_oval(state.apple.x, state.apple.y, unit, unit, APPLE_COLOR);

    for (i, segment) in state.snake.body().iter().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        canvas.fill_rect(segment.x, segment.y, unit, unit, color);
    }

    paint_score(canvas, state.score, config);
}

fn paint_game_over<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, config: &GameConfig) {
    paint_score(canvas, state.score, config);

    let width = canvas.text_width(GAME_OVER_TEXT, BANNER_FONT);
    canvas.draw_text(
        GAME_OVER_TEXT,
        (config.screen_width - width) / 2,
        config.screen_height / 2,
        BANNER_FONT,
        TEXT_COLOR,
    );
}

fn paint_score<C: Canvas + ?Sized>(canvas: &mut C, score: u32, config: &GameConfig) {
    let text = score_text(score);
    let width = canvas.text_width(&text, SCORE_FONT);
    canvas.draw_text(
        &text,
        (config.screen_width - width) / 2,
        SCORE_FONT.size,
        SCORE_FONT,
        TEXT_COLOR,
    );
}
