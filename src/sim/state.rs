//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`], which the game
//! loop owns and hands to [`super::tick`] by mutable reference.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Contact;
use super::rect::Rect;
use super::timer::Pause;
use crate::consts::*;

/// Which competitor a paddle, goal or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human player, defending the bottom edge
    Player,
    /// Scripted opponent, defending the top edge
    Opponent,
}

impl Side {
    /// True when a ball with vertical velocity `vy` is heading at this side's paddle
    pub fn is_approached_by(self, vy: i32) -> bool {
        match self {
            Side::Player => vy > 0,
            Side::Opponent => vy < 0,
        }
    }

    /// Banner shown when this side wins the match
    pub fn victory_message(self) -> &'static str {
        match self {
            Side::Player => "Player Wins!",
            Side::Opponent => "Opponent Wins!",
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Match decided, winner banner on screen until the restart delay passes
    ShowingWinner,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left its reset pause with a fresh velocity
    BallServed { vel: IVec2 },
    /// Ball bounced off the left or right edge
    WallBounce,
    /// Ball struck a paddle on the given face
    PaddleHit { side: Side, contact: Contact },
    /// `scorer` gained a point
    Goal { scorer: Side },
    /// Target score reached
    WinnerDecided { winner: Side },
    /// Winner display ended and a fresh match began
    MatchRestarted,
}

/// A paddle sliding along the x axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    /// Pixels per tick
    pub speed: i32,
}

impl Paddle {
    pub fn new(side: Side, x: i32, y: i32, speed: i32) -> Self {
        Self {
            side,
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed,
        }
    }

    /// Human paddle at its starting spot above the bottom edge
    pub fn player() -> Self {
        Self::new(Side::Player, PADDLE_HOME_X, BOTTOM_PADDLE_Y, PLAYER_PADDLE_SPEED)
    }

    /// AI paddle at its starting spot below the top edge
    pub fn opponent() -> Self {
        Self::new(Side::Opponent, PADDLE_HOME_X, TOP_PADDLE_Y, AI_PADDLE_SPEED)
    }

    /// Shift one speed increment per pressed direction, never leaving `[0, bounds_width]`
    pub fn move_horizontal(&mut self, left: bool, right: bool, bounds_width: i32) {
        let max_x = (bounds_width - self.rect.width()).max(0);
        if left {
            self.rect.pos.x = (self.rect.pos.x - self.speed).max(0);
        }
        if right {
            self.rect.pos.x = (self.rect.pos.x + self.speed).min(max_x);
        }
    }

    /// Scripted policy: chase the ball's x while it travels toward this paddle.
    ///
    /// Holds still when the ball moves away or is within the dead zone.
    pub fn ai_move(&mut self, ball: &Ball, bounds_width: i32) {
        if !self.side.is_approached_by(ball.vel.y) {
            return;
        }
        let dx = ball.rect.center_x() - self.rect.center_x();
        if dx.abs() > AI_DEAD_ZONE {
            self.move_horizontal(dx < 0, dx > 0, bounds_width);
        }
    }

    /// Put the paddle back at the horizontal center of a board `bounds_width` wide
    pub fn recenter(&mut self, bounds_width: i32) {
        self.rect.pos.x = bounds_width / 2 - self.rect.width() / 2;
    }
}

/// What a single [`Ball::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallOutcome {
    /// Velocity assigned when leaving the reset pause
    pub served: Option<IVec2>,
    pub wall_bounce: bool,
    pub goal: Option<Side>,
}

/// The ball, modeled as its square bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: IVec2,
    /// Active while the ball waits at the center after a goal
    pub reset_pause: Pause,
}

impl Ball {
    pub fn new(center: IVec2, radius: i32, vel: IVec2) -> Self {
        Self {
            rect: Rect::centered_at(center, IVec2::splat(radius * 2)),
            vel,
            reset_pause: Pause::default(),
        }
    }

    /// Opening ball: board center, already moving
    pub fn opening(bounds: IVec2) -> Self {
        Self::new(
            bounds / 2,
            BALL_RADIUS,
            IVec2::splat(BALL_OPENING_SPEED),
        )
    }

    pub fn is_resetting(&self) -> bool {
        self.reset_pause.is_active()
    }

    pub fn center(&self) -> IVec2 {
        self.rect.center()
    }

    /// Advance one tick inside a `bounds` sized board
    pub fn update(&mut self, bounds: IVec2, now_ms: u64, rng: &mut impl Rng) -> BallOutcome {
        let mut outcome = BallOutcome::default();

        if self.is_resetting() {
            if let Some(vel) = self.reset_pause.resume_if_due(now_ms, || serve_velocity(rng)) {
                self.vel = vel;
                outcome.served = Some(vel);
            }
            return outcome;
        }

        self.rect.pos += self.vel;

        // No position correction: the ball may overlap the side edge for a tick.
        if self.rect.left() <= 0 || self.rect.right() >= bounds.x {
            self.vel.x = -self.vel.x;
            outcome.wall_bounce = true;
        }

        if self.rect.top() <= 0 {
            outcome.goal = Some(Side::Player);
        } else if self.rect.bottom() >= bounds.y {
            outcome.goal = Some(Side::Opponent);
        }
        if outcome.goal.is_some() {
            self.reset(bounds / 2, now_ms);
        }

        outcome
    }

    /// Recenter at `center` and wait out the reset delay. Velocity is left as is.
    pub fn reset(&mut self, center: IVec2, now_ms: u64) {
        self.rect.set_center(center);
        self.reset_pause.begin(now_ms, BALL_RESET_DELAY_MS);
    }
}

/// Each component independently and uniformly `+BALL_SERVE_SPEED` or `-BALL_SERVE_SPEED`
pub fn serve_velocity(rng: &mut impl Rng) -> IVec2 {
    let mut component = || {
        if rng.random_bool(0.5) {
            BALL_SERVE_SPEED
        } else {
            -BALL_SERVE_SPEED
        }
    };
    let x = component();
    let y = component();
    IVec2::new(x, y)
}

/// Points for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Player is checked first, so a tie at the target goes to the player
    pub fn winner(&self, target: u32) -> Option<Side> {
        if self.player >= target {
            Some(Side::Player)
        } else if self.opponent >= target {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state (deterministic for a given seed, inputs and clock readings)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Drives serve directions
    pub rng: Pcg32,
    /// Board size in pixels
    pub bounds: IVec2,
    pub phase: GamePhase,
    /// Set while `phase` is `ShowingWinner`
    pub winner: Option<Side>,
    /// Counts down the winner display
    pub winner_pause: Pause,
    pub score: Score,
    /// Human paddle (bottom)
    pub player: Paddle,
    /// AI paddle (top)
    pub opponent: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let bounds = IVec2::new(BOARD_WIDTH, BOARD_HEIGHT);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            phase: GamePhase::Playing,
            winner: None,
            winner_pause: Pause::default(),
            score: Score::new(),
            player: Paddle::player(),
            opponent: Paddle::opponent(),
            ball: Ball::opening(bounds),
            time_ticks: 0,
        }
    }

    /// Enter the winner display at `now_ms`
    pub fn announce_winner(&mut self, winner: Side, now_ms: u64) {
        self.phase = GamePhase::ShowingWinner;
        self.winner = Some(winner);
        self.winner_pause.begin(now_ms, WINNER_DISPLAY_MS);
    }

    /// Zero the score, park the ball at the center and recenter both paddles
    pub fn restart_match(&mut self, now_ms: u64) {
        self.phase = GamePhase::Playing;
        self.winner = None;
        self.score.clear();
        self.ball.reset(self.bounds / 2, now_ms);
        self.player.recenter(self.bounds.x);
        self.opponent.recenter(self.bounds.x);
    }
}
