//! Raw-mode terminal lifetime
//!
//! Entering puts the terminal into raw mode on the alternate screen; dropping
//! the session restores it, including on early returns and panics that unwind.

use std::io::{self, Write, stdout};

use crossterm::event::{
    DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};

#[derive(Debug)]
pub struct TerminalSession {
    reports_release: bool,
}

impl TerminalSession {
    /// Take over the terminal and set its title
    pub fn enter(title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        let entered = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::SetTitle(title),
            EnableFocusChange,
        );
        if let Err(e) = entered {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        // Key release events are only available with the kitty keyboard protocol
        let reports_release = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
            && execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        let (cols, rows) = terminal::size().unwrap_or((0, 0));
        log::info!("Terminal ready ({cols}x{rows}), key release events: {reports_release}");

        Ok(Self { reports_release })
    }

    /// Whether the terminal reports key releases
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Current size in cells (columns, rows)
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.reports_release {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            DisableFocusChange,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}
