//! Rendering module
//!
//! The simulation never draws. Each tick the game loop captures a [`Frame`]
//! from the state and hands it to a [`Renderer`], which only paints what it
//! is given.

pub mod canvas;
pub mod terminal;

pub use canvas::Canvas;
pub use terminal::TerminalRenderer;

use std::io;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect, Score};

/// 24-bit color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const GREY: Color = Color(195, 195, 195);
    pub const DARK: Color = Color(50, 50, 50);
}

/// Which color each element is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub paddle: Color,
    pub ball: Color,
    pub score: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BLACK,
            paddle: colors::GREY,
            ball: colors::WHITE,
            score: colors::DARK,
        }
    }
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Board size in pixels
    pub board: IVec2,
    pub background: Color,
    /// Top (AI) paddle first, then bottom (human)
    pub paddles: [(Rect, Color); 2],
    /// Bounding box of the ball; drawn as the inscribed circle
    pub ball: Rect,
    pub ball_color: Color,
    pub score: Score,
    pub score_color: Color,
    pub phase: GamePhase,
}

impl Frame {
    pub fn capture(state: &GameState, palette: &Palette) -> Self {
        Self {
            board: state.bounds,
            background: palette.background,
            paddles: [
                (state.opponent.rect, palette.paddle),
                (state.player.rect, palette.paddle),
            ],
            ball: state.ball.rect,
            ball_color: palette.ball,
            score: state.score,
            score_color: palette.score,
            phase: state.phase,
        }
    }
}

/// Presents frames
pub trait Renderer {
    /// Draw and present one frame
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Show the end-of-match banner; called once when a winner is decided
    fn announce_winner(&mut self, message: &str, color: Color) -> io::Result<()>;

    /// Output area changed size (in terminal cells)
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

/// Keeps every frame and announcement instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
    pub announcements: Vec<(String, Color)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn announce_winner(&mut self, message: &str, color: Color) -> io::Result<()> {
        self.announcements.push((message.to_string(), color));
        Ok(())
    }
}
