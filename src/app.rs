//! Fixed-tick game loop
//!
//! Owns the [`GameState`] and wires it to the input, clock and renderer
//! collaborators. One iteration: pace, poll input, tick, report events, draw.

use std::io;

use crate::platform::{Clock, InputSource};
use crate::renderer::{Frame, Palette, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Side, TickInput, tick};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub goals: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
}

pub struct App<R, I, C> {
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
    palette: Palette,
    autopilot: bool,
    stats: RunStats,
}

impl<R: Renderer, I: InputSource, C: Clock> App<R, I, C> {
    pub fn new(state: GameState, renderer: R, input: I, clock: C, settings: &Settings) -> Self {
        Self {
            state,
            renderer,
            input,
            clock,
            palette: settings.palette,
            autopilot: settings.demo,
            stats: RunStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Run one tick. Returns `Ok(false)` when quit was requested; that tick
    /// is still simulated and drawn.
    pub fn step(&mut self) -> io::Result<bool> {
        let sampled = self.input.poll()?;
        if let Some((cols, rows)) = sampled.resized {
            self.renderer.resize(cols, rows);
        }

        let input = TickInput {
            move_left: sampled.left,
            move_right: sampled.right,
            autopilot: self.autopilot,
        };
        let now_ms = self.clock.now_ms();
        let events = tick(&mut self.state, &input, now_ms);
        self.stats.ticks += 1;

        for event in events {
            self.report(event)?;
        }

        self.renderer
            .draw(&Frame::capture(&self.state, &self.palette))?;

        if sampled.quit {
            log::info!("Quit requested after {} ticks", self.stats.ticks);
        }
        Ok(!sampled.quit)
    }

    /// Tick at the clock's pace until quit or an I/O error
    pub fn run(&mut self) -> io::Result<RunStats> {
        log::info!(
            "Session started (seed {}, demo: {})",
            self.state.seed,
            self.autopilot
        );
        loop {
            self.clock.wait_for_next_tick();
            if !self.step()? {
                break;
            }
        }
        log::info!("Session ended: {:?}", self.stats);
        Ok(self.stats)
    }

    fn report(&mut self, event: GameEvent) -> io::Result<()> {
        match event {
            GameEvent::Goal { scorer } => {
                self.stats.goals += 1;
                log::debug!(
                    "Goal for {:?}, score {} - {}",
                    scorer,
                    self.state.score.player,
                    self.state.score.opponent
                );
            }
            GameEvent::WinnerDecided { winner } => {
                let message = winner.victory_message();
                match winner {
                    Side::Player => self.stats.matches_won += 1,
                    Side::Opponent => self.stats.matches_lost += 1,
                }
                log::info!(
                    "{} ({} - {})",
                    message,
                    self.state.score.player,
                    self.state.score.opponent
                );
                self.renderer.announce_winner(message, self.palette.ball)?;
            }
            GameEvent::MatchRestarted => log::info!("New match"),
            GameEvent::BallServed { vel } => log::debug!("Ball served at {vel}"),
            GameEvent::PaddleHit { side, contact } => {
                log::debug!("Ball hit {:?} paddle ({:?} face)", side, contact)
            }
            GameEvent::WallBounce => log::trace!("Wall bounce"),
        }
        Ok(())
    }
}
