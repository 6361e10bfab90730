//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management, and
//! event polling for the shell's single-threaded loop.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Event delivered to the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// The tick interval elapsed; animations advance on this
    Tick,
}

/// Terminal wrapper that manages the crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with the given tick rate
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Initialize terminal with raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Block until the next key press or tick, whichever comes first.
    ///
    /// Non-key events (resize, focus) inside the interval are drained
    /// without consuming the tick, so animations never advance faster
    /// than the tick rate.
    pub fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    return Ok(TuiEvent::Key(key));
                }
                continue;
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(TuiEvent::Tick);
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_creation() {
        // Creation alone must not touch terminal modes
        let tui = Tui::new(Duration::from_millis(50));
        assert!(tui.is_ok());
    }

    #[test]
    fn test_tick_rate_is_respected() {
        let tui = Tui::new(Duration::from_millis(75)).unwrap();
        assert_eq!(tui.tick_rate, Duration::from_millis(75));
    }

    #[test]
    fn test_tick_waits_out_the_full_interval() {
        // With no key input, a tick must never arrive early
        let mut tui = Tui::new(Duration::from_millis(30)).unwrap();
        let start = Instant::now();
        let event = tui.next_event().unwrap();
        assert_eq!(event, TuiEvent::Tick);
        assert!(start.elapsed() >= Duration::from_millis(30));

        // And the next interval starts fresh after the tick
        let start = Instant::now();
        assert_eq!(tui.next_event().unwrap(), TuiEvent::Tick);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
