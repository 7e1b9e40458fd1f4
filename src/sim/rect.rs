//! Axis-aligned rectangle geometry for paddles and the ball's bounding box
//!
//! Board coordinates are integer pixels with the origin at the top-left
//! corner and y growing downward.

use glam::IVec2;

/// An axis-aligned rectangle in board pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Rectangle of the given size whose center is `center`
    pub fn centered_at(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Move so that the center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
