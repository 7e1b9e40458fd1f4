//! Crossterm renderer
//!
//! Draws each frame into a [`Canvas`] sized to the terminal and writes it in
//! one flush. While a winner is shown the board is replaced by the banner.

use std::io::{self, Write};

use crossterm::style::{self, Color as TermColor};
use crossterm::{cursor, queue};

use super::{Canvas, Color, Frame, Renderer};
use crate::consts::PADDLE_HEIGHT;
use crate::sim::GamePhase;

/// Height of a score digit, in board pixels
const SCORE_DIGIT_HEIGHT: f32 = 60.0;
/// Vertical distance from the paddle to its score, in board pixels
const SCORE_OFFSET: i32 = 120;

pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Canvas,
    banner: Option<(String, Color)>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            canvas: Canvas::for_terminal(cols, rows),
            banner: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint_board(&mut self, frame: &Frame) {
        self.canvas.clear(frame.background);
        for (rect, color) in &frame.paddles {
            self.canvas.fill_board_rect(frame.board, rect, *color);
        }
        self.canvas
            .fill_board_ellipse(frame.board, &frame.ball, frame.ball_color);

        let scale = self.canvas.scale(frame.board);
        let digit_scale = ((SCORE_DIGIT_HEIGHT * scale.y) / 5.0).round() as i32;
        let center_x = frame.board.x / 2;
        let player_at = self.canvas.board_to_canvas(
            frame.board,
            glam::IVec2::new(center_x, frame.board.y - PADDLE_HEIGHT - SCORE_OFFSET),
        );
        let opponent_at = self.canvas.board_to_canvas(
            frame.board,
            glam::IVec2::new(center_x, PADDLE_HEIGHT + SCORE_OFFSET),
        );
        self.canvas.draw_number(
            player_at.x,
            player_at.y,
            frame.score.player,
            frame.score_color,
            digit_scale,
        );
        self.canvas.draw_number(
            opponent_at.x,
            opponent_at.y,
            frame.score.opponent,
            frame.score_color,
            digit_scale,
        );
    }

    /// Banner text centered on the screen, on top of the already written canvas
    fn write_banner(&mut self, text: &str, color: Color, background: Color) -> io::Result<()> {
        let cols = self.canvas.width() as u16;
        let rows = (self.canvas.height() / 2) as u16;
        let len = text.chars().count() as u16;
        let col = cols.saturating_sub(len) / 2;
        let row = rows / 2;
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(TermColor::Rgb {
                r: color.0,
                g: color.1,
                b: color.2
            }),
            style::SetBackgroundColor(TermColor::Rgb {
                r: background.0,
                g: background.1,
                b: background.2
            }),
            style::SetAttribute(style::Attribute::Bold),
            style::Print(text),
            style::SetAttribute(style::Attribute::Reset),
            style::ResetColor,
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        match (frame.phase, self.banner.clone()) {
            // Banner replaces the board until the frame says play resumed
            (GamePhase::ShowingWinner, Some((text, color))) => {
                self.canvas.clear(frame.background);
                self.canvas.render(&mut self.out)?;
                self.write_banner(&text, color, frame.background)?;
            }
            (phase, _) => {
                if phase == GamePhase::Playing {
                    self.banner = None;
                }
                self.paint_board(frame);
                self.canvas.render(&mut self.out)?;
            }
        }
        self.out.flush()
    }

    fn announce_winner(&mut self, message: &str, color: Color) -> io::Result<()> {
        self.banner = Some((message.to_string(), color));
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols as usize, rows as usize * 2);
        log::debug!("Renderer resized to {cols}x{rows}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Palette;
    use crate::sim::{GameState, Score, Side};

    #[test]
    fn test_draw_paints_paddles_and_ball() {
        let state = GameState::new(1);
        let palette = Palette::default();
        let frame = Frame::capture(&state, &palette);
        // 80x30 cells -> 80x60 pixels, one pixel per 10 board pixels
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 30);
        renderer.draw(&frame).unwrap();

        let canvas = renderer.canvas();
        assert_eq!(canvas.get(40, 1), palette.paddle);
        assert_eq!(canvas.get(40, 58), palette.paddle);
        assert_eq!(canvas.get(40, 30), palette.ball);
        assert_eq!(canvas.get(5, 30), palette.background);
        assert!(!renderer.into_inner().is_empty());
    }

    #[test]
    fn test_scores_are_drawn() {
        let mut state = GameState::new(1);
        state.score = Score { player: 7, opponent: 8 };
        let palette = Palette::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 30);
        renderer.draw(&Frame::capture(&state, &palette)).unwrap();

        let canvas = renderer.canvas();
        let score_pixels = (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) == palette.score)
            .count();
        assert!(score_pixels > 0);
    }

    #[test]
    fn test_banner_lives_until_play_resumes() {
        let mut state = GameState::new(1);
        let palette = Palette::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 30);

        state.announce_winner(Side::Player, 0);
        renderer
            .announce_winner(Side::Player.victory_message(), palette.ball)
            .unwrap();
        renderer.draw(&Frame::capture(&state, &palette)).unwrap();
        assert_eq!(renderer.banner(), Some("Player Wins!"));
        // Board is blanked behind the banner
        assert_eq!(renderer.canvas().get(40, 1), palette.background);

        state.restart_match(3001);
        renderer.draw(&Frame::capture(&state, &palette)).unwrap();
        assert_eq!(renderer.banner(), None);
        assert_eq!(renderer.canvas().get(40, 1), palette.paddle);
    }

    #[test]
    fn test_resize_changes_canvas() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 30);
        renderer.resize(100, 40);
        assert_eq!(renderer.canvas().width(), 100);
        assert_eq!(renderer.canvas().height(), 80);
    }
}
