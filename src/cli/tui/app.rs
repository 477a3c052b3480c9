//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::views;
use super::Terminal;
use crate::cli::spin::SpinClock;
use crate::domain::{DrawEngine, DrawError, GroupEngine, NameList};
use crate::storage::{NameFormat, NameSource, Settings};

/// Largest group size reachable with `+`
const MAX_GROUP_SIZE: usize = 999;

/// Which tab is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Draw,
    Group,
}

impl Tab {
    fn next(self) -> Self {
        match self {
            Tab::Draw => Tab::Group,
            Tab::Group => Tab::Draw,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Draw => 0,
            Tab::Group => 1,
        }
    }
}

/// Application state
pub struct App {
    /// Where names were loaded from (for reload)
    source: NameSource,

    /// Import format override
    format: Option<NameFormat>,

    draw: DrawEngine,

    groups: GroupEngine,

    /// Names per group for the next regroup
    group_size: usize,

    /// Cosmetic spin ticks per draw
    spin_ticks: u32,

    /// Running spin, if any
    spin: Option<SpinClock>,

    tab: Tab,

    /// Notice that must be dismissed before anything else
    notice: Option<String>,

    /// Status message to display
    status_message: Option<String>,

    /// Whether to quit
    should_quit: bool,
}

impl App {
    /// Create a new application
    pub fn new(
        names: NameList,
        source: NameSource,
        format: Option<NameFormat>,
        settings: &Settings,
        seed: Option<u64>,
    ) -> Self {
        let (mut draw, groups) = match seed {
            Some(seed) => (
                DrawEngine::seeded(names, seed),
                GroupEngine::seeded(seed.wrapping_add(1)),
            ),
            None => (DrawEngine::new(names), GroupEngine::new()),
        };
        draw.set_allow_repeat(settings.draw.allow_repeat);

        Self {
            source,
            format,
            draw,
            groups,
            group_size: settings.group.size.clamp(1, MAX_GROUP_SIZE),
            spin_ticks: settings.draw.spin_ticks,
            spin: None,
            tab: Tab::Draw,
            notice: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize => {} // Redrawn on the next pass
                Event::Tick => self.on_tick(),
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        match self.tab {
            Tab::Draw => views::draw::render(frame, self),
            Tab::Group => views::group::render(frame, self),
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // A notice blocks everything until dismissed
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Tab | KeyCode::BackTab => {
                self.tab = self.tab.next();
            }
            KeyCode::Char('1') => {
                self.tab = Tab::Draw;
            }
            KeyCode::Char('2') => {
                self.tab = Tab::Group;
            }

            KeyCode::Char(' ') | KeyCode::Enter => match self.tab {
                Tab::Draw => self.start_draw(),
                Tab::Group => self.regroup(),
            },

            KeyCode::Esc => {
                if self.spin.take().is_some() {
                    self.draw.abandon_spin();
                    self.status_message = Some("Draw cancelled".to_string());
                }
            }

            KeyCode::Char('a') => {
                let allow = self.draw.toggle_allow_repeat();
                self.status_message = Some(format!(
                    "Repeat winners {}",
                    if allow { "allowed" } else { "not allowed" }
                ));
            }
            KeyCode::Char('x') => {
                self.draw.reset();
                self.status_message = Some("History cleared".to_string());
            }

            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.group_size = (self.group_size + 1).min(MAX_GROUP_SIZE);
            }
            KeyCode::Char('-') | KeyCode::Left => {
                self.group_size = self.group_size.saturating_sub(1).max(1);
            }

            KeyCode::Char('r') => {
                self.reload_names();
            }

            KeyCode::Char('?') => {
                self.status_message = Some(
                    "space:draw/group a:repeat x:reset +/-:size r:reload tab:switch q:quit"
                        .to_string(),
                );
            }

            _ => {}
        }
    }

    /// Advance a running spin by one tick
    pub fn on_tick(&mut self) {
        let Some(clock) = self.spin.as_mut() else {
            return;
        };

        if clock.advance() {
            self.draw.spin_tick();
            return;
        }

        self.spin = None;
        match self.draw.finish_spin() {
            Ok(winner) => {
                self.status_message = Some(format!("Winner: {}", winner));
            }
            Err(e) => self.show_draw_error(e),
        }
    }

    fn start_draw(&mut self) {
        match self.draw.begin_spin() {
            Ok(()) => {
                self.spin = Some(SpinClock::new(self.spin_ticks));
                self.status_message = None;
            }
            Err(e) => self.show_draw_error(e),
        }
    }

    fn show_draw_error(&mut self, error: DrawError) {
        match error {
            DrawError::ExhaustedPool => self.notice = Some(error.to_string()),
            DrawError::DrawInProgress => self.status_message = Some(error.to_string()),
        }
    }

    fn regroup(&mut self) {
        match self.groups.partition(self.draw.names(), self.group_size) {
            Ok(partition) => {
                self.status_message = Some(format!(
                    "{} names in {} groups",
                    partition.member_count(),
                    partition.len()
                ));
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn reload_names(&mut self) {
        if self.source == NameSource::Stdin {
            self.status_message = Some("Names came from stdin; nothing to reload".to_string());
            return;
        }

        match self.source.load(self.format) {
            Ok(names) => {
                let count = names.len();
                self.draw.set_names(names);
                self.status_message = Some(format!("Reloaded {} names", count));
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    // Accessors for views

    pub fn draw_engine(&self) -> &DrawEngine {
        &self.draw
    }

    pub fn group_engine(&self) -> &GroupEngine {
        &self.groups
    }

    pub fn names(&self) -> &NameList {
        self.draw.names()
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn spin_remaining(&self) -> Option<u32> {
        self.spin.map(|clock| clock.remaining())
    }
}
