//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `tick` per frame
//! - Time arrives as an argument, never read from the system
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{CONTACT_PRIORITY, Contact, resolve_paddle_collision};
pub use rect::Rect;
pub use state::{Ball, BallOutcome, GameEvent, GamePhase, GameState, Paddle, Score, Side, serve_velocity};
pub use tick::{TickInput, tick};
pub use timer::{Countdown, Pause};
