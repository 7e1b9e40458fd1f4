//! Pixel buffer with half-block terminal output
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph: foreground paints the top pixel, background the bottom.
//! Board-space shapes are scaled onto the buffer by the `*_board_*` helpers.

use std::io::{self, Write};

use crossterm::style::{self, Color as TermColor};
use crossterm::{cursor, queue};
use glam::{IVec2, Vec2};

use super::Color;
use crate::sim::Rect;

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

const GLYPH_W: i32 = 3;
const GLYPH_H: i32 = 5;

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    w: usize,
    /// Pixel height = terminal rows * 2
    h: usize,
    px: Vec<Color>,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![Color::default(); w * h],
        }
    }

    /// Canvas covering a terminal of `cols` x `rows` cells
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows as usize * 2)
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, Color::default());
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn clear(&mut self, c: Color) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Canvas pixels per board pixel on each axis
    pub fn scale(&self, board: IVec2) -> Vec2 {
        Vec2::new(
            self.w as f32 / board.x.max(1) as f32,
            self.h as f32 / board.y.max(1) as f32,
        )
    }

    /// Map a board point to the canvas pixel containing it
    pub fn board_to_canvas(&self, board: IVec2, p: IVec2) -> IVec2 {
        (p.as_vec2() * self.scale(board)).floor().as_ivec2()
    }

    /// Fill the canvas pixels covered by a board rectangle (at least one pixel)
    pub fn fill_board_rect(&mut self, board: IVec2, rect: &Rect, c: Color) {
        let s = self.scale(board);
        let x0 = (rect.left() as f32 * s.x).floor() as i32;
        let y0 = (rect.top() as f32 * s.y).floor() as i32;
        let x1 = ((rect.right() as f32 * s.x).ceil() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() as f32 * s.y).ceil() as i32).max(y0 + 1);
        self.fill_rect(x0, y0, x1 - x0, y1 - y0, c);
    }

    /// Fill the ellipse inscribed in a board rectangle
    pub fn fill_board_ellipse(&mut self, board: IVec2, rect: &Rect, c: Color) {
        let s = self.scale(board);
        let center = rect.pos.as_vec2() + rect.size.as_vec2() / 2.0;
        let radii = (rect.size.as_vec2() / 2.0).max(Vec2::splat(0.5));
        let x0 = (rect.left() as f32 * s.x).floor() as i32;
        let y0 = (rect.top() as f32 * s.y).floor() as i32;
        let x1 = (rect.right() as f32 * s.x).ceil() as i32;
        let y1 = (rect.bottom() as f32 * s.y).ceil() as i32;

        let mut painted = false;
        for py in y0..y1 {
            for px in x0..x1 {
                // Sample at the pixel center, in board space
                let p = (Vec2::new(px as f32, py as f32) + 0.5) / s;
                let d = (p - center) / radii;
                if d.length_squared() <= 1.0 {
                    self.set(px, py, c);
                    painted = true;
                }
            }
        }
        // Shapes smaller than a canvas pixel still show up
        if !painted {
            let p = (center * s).floor().as_ivec2();
            self.set(p.x, p.y, c);
        }
    }

    /// Draw `n` in 3x5 bitmap digits, each digit pixel `scale` canvas pixels wide,
    /// centered on (`cx`, `cy`)
    pub fn draw_number(&mut self, cx: i32, cy: i32, n: u32, c: Color, scale: i32) {
        let scale = scale.max(1);
        let digits = n.to_string();
        let pitch = (GLYPH_W + 1) * scale;
        let total_w = digits.len() as i32 * pitch - scale;
        let start_x = cx - total_w / 2;
        let top = cy - GLYPH_H * scale / 2;

        for (i, ch) in digits.bytes().enumerate() {
            let glyph = &DIGITS[(ch - b'0') as usize];
            let gx = start_x + i as i32 * pitch;
            for row in 0..GLYPH_H {
                for col in 0..GLYPH_W {
                    if glyph[(row * GLYPH_W + col) as usize] == 1 {
                        self.fill_rect(gx + col * scale, top + row * scale, scale, scale, c);
                    }
                }
            }
        }
    }

    /// Write the whole buffer starting at the top-left cell
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = None;
        let mut prev_bg = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if prev_bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        prev_fg = Some(top);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev_fg = None;
                prev_bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        Ok(())
    }
}
