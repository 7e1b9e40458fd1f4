//! Ball/paddle collision response
//!
//! Contact is decided by which paddle face the ball's box sits against,
//! within `CONTACT_TOLERANCE` pixels. Candidate faces are tried in a fixed
//! order and the first match wins; vertical faces come first so a corner hit
//! reflects vy rather than vx.

use super::rect::Rect;
use super::state::{Ball, Paddle};
use crate::consts::CONTACT_TOLERANCE;

/// Paddle face the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball came down onto the paddle's top edge
    Top,
    /// Ball came up into the paddle's bottom edge
    Bottom,
    /// Ball moving right met the paddle's left edge
    Left,
    /// Ball moving left met the paddle's right edge
    Right,
}

/// Resolution order for ambiguous (corner) contacts
pub const CONTACT_PRIORITY: [Contact; 4] = [Contact::Top, Contact::Bottom, Contact::Left, Contact::Right];

impl Contact {
    /// Whether the ball box sits against this face and travels into it
    pub fn matches(self, ball: &Ball, paddle: &Rect) -> bool {
        let b = &ball.rect;
        match self {
            Contact::Top => near(b.bottom(), paddle.top()) && ball.vel.y > 0,
            Contact::Bottom => near(b.top(), paddle.bottom()) && ball.vel.y < 0,
            Contact::Left => near(b.right(), paddle.left()) && ball.vel.x > 0,
            Contact::Right => near(b.left(), paddle.right()) && ball.vel.x < 0,
        }
    }

    /// Reflect the matching velocity component and snap the ball flush with the face
    pub fn apply(self, ball: &mut Ball, paddle: &Rect) {
        match self {
            Contact::Top => {
                ball.vel.y = -ball.vel.y;
                ball.rect.set_bottom(paddle.top());
            }
            Contact::Bottom => {
                ball.vel.y = -ball.vel.y;
                ball.rect.set_top(paddle.bottom());
            }
            Contact::Left => {
                ball.vel.x = -ball.vel.x;
                ball.rect.set_right(paddle.left());
            }
            Contact::Right => {
                ball.vel.x = -ball.vel.x;
                ball.rect.set_left(paddle.right());
            }
        }
    }
}

#[inline]
fn near(a: i32, b: i32) -> bool {
    (a - b).abs() < CONTACT_TOLERANCE
}

/// Bounce the ball off `paddle` if their boxes overlap.
///
/// Returns the face that was hit, or `None` when the boxes don't overlap or
/// the overlap matches no face (e.g. ball deep inside the paddle).
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> Option<Contact> {
    if !ball.rect.intersects(&paddle.rect) {
        return None;
    }
    let contact = CONTACT_PRIORITY
        .into_iter()
        .find(|contact| contact.matches(ball, &paddle.rect))?;
    contact.apply(ball, &paddle.rect);
    Some(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::IVec2;

    fn paddle_at(x: i32, y: i32) -> Paddle {
        Paddle::new(Side::Player, x, y, 5)
    }

    /// Ball whose box has its top-left at (x, y)
    fn ball_at(x: i32, y: i32, vel: IVec2) -> Ball {
        let mut ball = Ball::new(IVec2::ZERO, 10, vel);
        ball.rect.pos = IVec2::new(x, y);
        ball
    }

    #[test]
    fn test_no_overlap_no_contact() {
        let paddle = paddle_at(350, 570);
        let mut ball = ball_at(100, 100, IVec2::new(4, 4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), None);
        assert_eq!(ball.vel, IVec2::new(4, 4));
    }

    #[test]
    fn test_touching_without_overlap_is_ignored() {
        let paddle = paddle_at(350, 570);
        let mut ball = ball_at(390, 550, IVec2::new(4, 4));
        assert_eq!(ball.rect.bottom(), paddle.rect.top());
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), None);
    }

    #[test]
    fn test_ball_landing_on_bottom_paddle() {
        let paddle = paddle_at(350, 570);
        let mut ball = ball_at(390, 554, IVec2::new(4, 4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Top));
        assert_eq!(ball.vel, IVec2::new(4, -4));
        assert_eq!(ball.rect.bottom(), paddle.rect.top());
    }

    #[test]
    fn test_ball_rising_into_top_paddle() {
        let paddle = paddle_at(350, 10);
        let mut ball = ball_at(390, 26, IVec2::new(-4, -4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Bottom));
        assert_eq!(ball.vel, IVec2::new(-4, 4));
        assert_eq!(ball.rect.top(), paddle.rect.bottom());
    }

    #[test]
    fn test_side_hits_reflect_vx() {
        // Ball vertically inside the paddle band, entering its left face
        let paddle = paddle_at(350, 300);
        let mut ball = ball_at(334, 300, IVec2::new(4, 4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Left));
        assert_eq!(ball.vel, IVec2::new(-4, 4));
        assert_eq!(ball.rect.right(), paddle.rect.left());

        let mut ball = ball_at(446, 300, IVec2::new(-4, 4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Right));
        assert_eq!(ball.vel, IVec2::new(4, 4));
        assert_eq!(ball.rect.left(), paddle.rect.right());
    }

    #[test]
    fn test_corner_prefers_vertical_reflection() {
        // Bottom-right of the ball clips the paddle's top-left corner; both the
        // top face and the left face are within tolerance.
        let paddle = paddle_at(350, 570);
        let mut ball = ball_at(334, 554, IVec2::new(4, 4));
        assert!(Contact::Top.matches(&ball, &paddle.rect));
        assert!(Contact::Left.matches(&ball, &paddle.rect));

        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Top));
        assert_eq!(ball.vel, IVec2::new(4, -4));
        assert_eq!(ball.rect.bottom(), 570);
        assert_eq!(ball.rect.left(), 334);
    }

    #[test]
    fn test_wrong_direction_falls_through_to_side() {
        // Near the top face but moving up: top is skipped, left face matches
        let paddle = paddle_at(350, 570);
        let mut ball = ball_at(334, 554, IVec2::new(4, -4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), Some(Contact::Left));
        assert_eq!(ball.vel, IVec2::new(-4, -4));
        assert_eq!(ball.rect.right(), 350);
    }

    #[test]
    fn test_deep_overlap_matches_no_face() {
        let mut paddle = paddle_at(300, 300);
        paddle.rect.size = IVec2::new(200, 100);
        let mut ball = ball_at(380, 340, IVec2::new(4, 4));
        assert_eq!(resolve_paddle_collision(&mut ball, &paddle), None);
        assert_eq!(ball.vel, IVec2::new(4, 4));
    }
}
