//! Spin pacing shared by the line animation and the TUI
//!
//! A spin is a fixed number of cosmetic ticks followed by one commit tick.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};
use rand::Rng;

use crate::domain::{DrawEngine, DrawError};
use crate::storage::DrawConfig;

/// Counts down the cosmetic ticks of one spin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinClock {
    remaining: u32,
}

impl SpinClock {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Consumes one tick. Returns false once it is time to commit.
    pub fn advance(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Runs one animated draw on the current terminal line
///
/// The outer error is a terminal failure; the inner one is the draw outcome.
pub fn animate<R: Rng>(
    engine: &mut DrawEngine<R>,
    config: &DrawConfig,
) -> Result<Result<String, DrawError>> {
    if let Err(e) = engine.begin_spin() {
        return Ok(Err(e));
    }

    match render_ticks(engine, config) {
        Ok(()) => Ok(engine.finish_spin()),
        Err(e) => {
            engine.abandon_spin();
            Err(e)
        }
    }
}

fn render_ticks<R: Rng>(engine: &mut DrawEngine<R>, config: &DrawConfig) -> Result<()> {
    let mut stdout = io::stdout();
    let interval = Duration::from_millis(config.spin_interval_ms);
    let mut clock = SpinClock::new(config.spin_ticks);

    while clock.advance() {
        if let Some(candidate) = engine.spin_tick() {
            queue!(
                stdout,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(format!("  {}", candidate).dim())
            )?;
            stdout.flush()?;
        }
        thread::sleep(interval);
    }

    queue!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_down_then_stops() {
        let mut clock = SpinClock::new(3);
        assert!(clock.advance());
        assert!(clock.advance());
        assert!(clock.advance());
        assert!(!clock.advance());
        assert!(!clock.advance());
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn zero_tick_clock_commits_immediately() {
        let mut clock = SpinClock::new(0);
        assert!(!clock.advance());
    }
}
