//! Terminal handle — raw mode, alternate screen, mouse capture.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Owns the terminal for the lifetime of the TUI. `enter` switches to the
/// alternate screen with mouse capture enabled (the spotlight pauses on
/// hover); `exit` restores the terminal, and `Drop` restores it again in
/// case of an early bail-out.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        crossterm::execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut ratatui::Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> Option<(u16, u16)> {
        self.terminal
            .size()
            .ok()
            .map(|size| (size.width, size.height))
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = crossterm::execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
