//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame. Time enters only through the
//! `now_ms` argument so that tests can drive the clock by hand.

use super::collision::resolve_paddle_collision;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::TARGET_SCORE;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Human paddle left key held
    pub move_left: bool,
    /// Human paddle right key held
    pub move_right: bool,
    /// Demo mode - AI plays the bottom paddle too, keys are ignored
    pub autopilot: bool,
}

/// Advance the game state by one tick at wall-clock time `now_ms`.
///
/// Returns the events that happened, in order.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Playing => play(state, input, now_ms, &mut events),
        GamePhase::ShowingWinner => {
            // Everything but the winner countdown is frozen here
            if state.winner_pause.resume_if_due(now_ms, || ()).is_some() {
                state.restart_match(now_ms);
                events.push(GameEvent::MatchRestarted);
            }
        }
    }

    events
}

fn play(state: &mut GameState, input: &TickInput, now_ms: u64, events: &mut Vec<GameEvent>) {
    let width = state.bounds.x;

    if input.autopilot {
        state.player.ai_move(&state.ball, width);
    } else {
        state
            .player
            .move_horizontal(input.move_left, input.move_right, width);
    }

    let outcome = state.ball.update(state.bounds, now_ms, &mut state.rng);
    if let Some(vel) = outcome.served {
        events.push(GameEvent::BallServed { vel });
    }
    if outcome.wall_bounce {
        events.push(GameEvent::WallBounce);
    }
    if let Some(scorer) = outcome.goal {
        state.score.award(scorer);
        events.push(GameEvent::Goal { scorer });
    }

    for side in [Side::Player, Side::Opponent] {
        let paddle = match side {
            Side::Player => &state.player,
            Side::Opponent => &state.opponent,
        };
        if let Some(contact) = resolve_paddle_collision(&mut state.ball, paddle) {
            events.push(GameEvent::PaddleHit { side, contact });
        }
    }

    state.opponent.ai_move(&state.ball, width);

    if let Some(winner) = state.score.winner(TARGET_SCORE) {
        state.announce_winner(winner, now_ms);
        events.push(GameEvent::WinnerDecided { winner });
    }
}
