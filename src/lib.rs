//! Terminal Pong - one human paddle against a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, round state)
//! - `app`: Fixed-tick game loop wiring the simulation to its collaborators
//! - `renderer`: Frame description and the crossterm renderer
//! - `platform`: Clock, frame pacing and keyboard input
//! - `settings`: Presentation/session settings loaded from JSON

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target tick rate of the game loop
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: i32 = 800;
    pub const BOARD_HEIGHT: i32 = 600;

    /// Paddle geometry
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    /// Top edge of the human (bottom) paddle
    pub const BOTTOM_PADDLE_Y: i32 = BOARD_HEIGHT - 30;
    /// Top edge of the AI (top) paddle
    pub const TOP_PADDLE_Y: i32 = 10;
    /// Pixels per tick
    pub const PLAYER_PADDLE_SPEED: i32 = 5;
    pub const AI_PADDLE_SPEED: i32 = 4;
    /// AI ignores horizontal offsets up to this many pixels
    pub const AI_DEAD_ZONE: i32 = 10;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 10;
    /// Velocity of the opening serve (pixels/tick)
    pub const BALL_OPENING_SPEED: i32 = 5;
    /// Magnitude of each velocity component after a reset
    pub const BALL_SERVE_SPEED: i32 = 4;
    /// Pause after a goal before the ball moves again
    pub const BALL_RESET_DELAY_MS: u64 = 2000;

    /// Face-detection threshold for ball/paddle contact
    pub const CONTACT_TOLERANCE: i32 = 10;

    /// Score
    pub const TARGET_SCORE: u32 = 10;
    /// How long the winner stays on screen before the next match
    pub const WINNER_DISPLAY_MS: u64 = 3000;

    /// Paddle x that centers it horizontally on the board
    pub const PADDLE_HOME_X: i32 = BOARD_WIDTH / 2 - PADDLE_WIDTH / 2;
}
