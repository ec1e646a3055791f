//! Terminal mode setup that undoes itself on drop

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Raw mode plus alternate screen for as long as the guard lives
///
/// Dropping the guard leaves the alternate screen, shows the cursor and, if
/// it was enabled, turns raw mode off again. This also happens when setup
/// fails halfway, so an error never leaves the shell in raw mode.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Switch `out` to the alternate screen, enabling raw mode first if asked
    pub fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let mut guard = TerminalGuard { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Best effort; there is nowhere left to report a failure
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}
