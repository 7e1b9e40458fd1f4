//! Keyboard input
//!
//! The game needs "is the key down right now", but most terminals only
//! report presses and auto-repeats. When the terminal cannot report key
//! releases, a fresh press counts as held for `PRESS_HOLD_WINDOW`, long
//! enough to bridge the OS auto-repeat delay, and each repeat extends the
//! hold by the shorter `HOLD_WINDOW`.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Hold after a fresh press when releases are not reported; covers the usual
/// 250-500 ms auto-repeat delay
pub const PRESS_HOLD_WINDOW: Duration = Duration::from_millis(550);
/// Hold after an auto-repeat when releases are not reported
pub const HOLD_WINDOW: Duration = Duration::from_millis(120);

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Quit requested; the loop ends after this tick
    pub quit: bool,
    /// New terminal size in cells, when it changed since the last poll
    pub resized: Option<(u16, u16)>,
}

/// Source of per-tick input
pub trait InputSource {
    fn poll(&mut self) -> io::Result<InputState>;
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    down: bool,
    expires: Option<Instant>,
}

impl HeldKey {
    fn press(&mut self, now: Instant, window: Option<Duration>) {
        match window {
            Some(window) => self.expires = Some(now + window),
            None => self.down = true,
        }
    }

    fn release(&mut self) {
        self.down = false;
        self.expires = None;
    }

    fn is_held(&self, now: Instant) -> bool {
        self.down || self.expires.is_some_and(|t| now < t)
    }
}

/// Arrow keys or `a`/`d` steer, `q`, `Esc` or Ctrl-C quit
#[derive(Debug)]
pub struct TerminalInput {
    left: HeldKey,
    right: HeldKey,
    reports_release: bool,
    quit: bool,
    resized: Option<(u16, u16)>,
}

impl TerminalInput {
    /// `reports_release` should be true only when the terminal sends key release events
    pub fn new(reports_release: bool) -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            reports_release,
            quit: false,
            resized: None,
        }
    }

    /// Fold one terminal event into the key state
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Resize(cols, rows) => self.resized = Some((cols, rows)),
            Event::FocusLost => {
                self.left.release();
                self.right.release();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let is_ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            if key.kind != KeyEventKind::Release {
                self.quit = true;
            }
            return;
        }

        let held = match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => &mut self.left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => &mut self.right,
            _ => return,
        };
        let window = match key.kind {
            KeyEventKind::Release => {
                held.release();
                return;
            }
            _ if self.reports_release => None,
            KeyEventKind::Press => Some(PRESS_HOLD_WINDOW),
            KeyEventKind::Repeat => Some(HOLD_WINDOW),
        };
        held.press(now, window);
    }

    /// Current state at `now`; clears the one-shot fields
    pub fn sample(&mut self, now: Instant) -> InputState {
        let state = InputState {
            left: self.left.is_held(now),
            right: self.right.is_held(now),
            quit: self.quit,
            resized: self.resized.take(),
        };
        self.quit = false;
        state
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<InputState> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        let state = self.sample(Instant::now());
        log::trace!("input {:?}", state);
        Ok(state)
    }
}

/// Replays a fixed sequence of inputs. The last one also requests quit, as
/// does every poll after the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        let mut frames: VecDeque<_> = frames.into_iter().collect();
        if let Some(last) = frames.back_mut() {
            last.quit = true;
        }
        Self { frames }
    }

    /// `ticks` idle frames, quitting on the last
    pub fn idle(ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(InputState::default(), ticks))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<InputState> {
        Ok(self.frames.pop_front().unwrap_or(InputState {
            quit: true,
            ..Default::default()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_press_holds_for_window_without_release_events() {
        let mut input = TerminalInput::new(false);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Left, KeyEventKind::Press), t0);

        assert!(input.sample(t0).left);
        assert!(input.sample(t0 + HOLD_WINDOW / 2).left);
        assert!(!input.sample(t0 + PRESS_HOLD_WINDOW).left);
    }

    #[test]
    fn test_press_bridges_auto_repeat_delay() {
        // Held key: press, nothing until the OS starts repeating at 500 ms, then every 33 ms
        let mut input = TerminalInput::new(false);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Left, KeyEventKind::Press), t0);
        for ms in (0..500).step_by(16) {
            assert!(input.sample(t0 + Duration::from_millis(ms)).left, "dropped at {ms} ms");
        }
        for ms in (500..1000).step_by(33) {
            let at = t0 + Duration::from_millis(ms);
            input.handle_event(key(KeyCode::Left, KeyEventKind::Repeat), at);
            assert!(input.sample(at + Duration::from_millis(16)).left);
        }
    }

    #[test]
    fn test_repeat_extends_hold_by_short_window() {
        let mut input = TerminalInput::new(false);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Char('d'), KeyEventKind::Press), t0);
        let t1 = t0 + Duration::from_millis(500);
        input.handle_event(key(KeyCode::Char('d'), KeyEventKind::Repeat), t1);
        assert!(input.sample(t1 + HOLD_WINDOW / 2).right);
        // Once repeats stop the key lets go quickly
        assert!(!input.sample(t1 + HOLD_WINDOW).right);
    }

    #[test]
    fn test_release_events_are_authoritative() {
        let mut input = TerminalInput::new(true);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Right, KeyEventKind::Press), t0);
        assert!(input.sample(t0 + Duration::from_secs(5)).right);
        input.handle_event(key(KeyCode::Right, KeyEventKind::Release), t0);
        assert!(!input.sample(t0).right);
    }

    #[test]
    fn test_both_directions_can_be_held() {
        let mut input = TerminalInput::new(true);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Left, KeyEventKind::Press), t0);
        input.handle_event(key(KeyCode::Right, KeyEventKind::Press), t0);
        let state = input.sample(t0);
        assert!(state.left && state.right);
    }

    #[test]
    fn test_quit_keys() {
        let t0 = Instant::now();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut input = TerminalInput::new(false);
            input.handle_event(key(code, KeyEventKind::Press), t0);
            assert!(input.sample(t0).quit);
            assert!(!input.sample(t0).quit);
        }

        let mut input = TerminalInput::new(false);
        input.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            t0,
        );
        assert!(input.sample(t0).quit);
    }

    #[test]
    fn test_resize_reported_once() {
        let mut input = TerminalInput::new(false);
        let t0 = Instant::now();
        input.handle_event(Event::Resize(120, 40), t0);
        assert_eq!(input.sample(t0).resized, Some((120, 40)));
        assert_eq!(input.sample(t0).resized, None);
    }

    #[test]
    fn test_focus_lost_releases_keys() {
        let mut input = TerminalInput::new(true);
        let t0 = Instant::now();
        input.handle_event(key(KeyCode::Left, KeyEventKind::Press), t0);
        input.handle_event(Event::FocusLost, t0);
        assert!(!input.sample(t0).left);
    }

    #[test]
    fn test_scripted_input_quits_on_last_frame() {
        let mut input = ScriptedInput::new([InputState {
            left: true,
            ..Default::default()
        }]);
        let last = input.poll().unwrap();
        assert!(last.left && last.quit);
        assert!(input.poll().unwrap().quit);
    }
}
