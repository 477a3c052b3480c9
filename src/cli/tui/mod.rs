//! Interactive TUI session
//!
//! One lucky draw and one grouping engine share the loaded name list for the
//! lifetime of the session. Nothing is saved on exit.

mod app;
mod event;
mod ui;
mod utils;
mod views;

use std::io::{self, stdout, Stdout};
use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use super::app::InputArgs;
use super::Output;
use crate::storage::Settings;
use app::App;
use event::EventHandler;

/// Terminal type alias
pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Launch the TUI
pub fn run(output: &Output, settings: &Settings, input: &InputArgs, seed: Option<u64>) -> Result<()> {
    let names = input.load(output)?;
    let mut app = App::new(names, input.source(), input.forced_format(), settings, seed);

    let mut terminal = init_terminal()?;

    // Spin ticks are paced by the event loop
    let event_handler = EventHandler::new(settings.draw.spin_interval_ms);

    // Restore the terminal even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    let restore_result = restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            output.verbose_ctx(
                "tui",
                &format!("Session ended after {} draws", app.draw_engine().history().len()),
            );
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}

fn init_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
