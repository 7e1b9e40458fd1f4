//! Platform abstraction layer
//!
//! Everything the game loop needs from the outside world besides drawing:
//! - Time and frame pacing (`clock`)
//! - Keyboard input (`input`)
//! - Raw-mode terminal lifetime (`terminal`)

pub mod clock;
pub mod input;
pub mod terminal;

pub use clock::{Clock, FrameLimiter, ManualClock, SystemClock};
pub use input::{InputSource, InputState, ScriptedInput, TerminalInput};
pub use terminal::TerminalSession;
