//! Lucky draw tab: current pick on the left, history on the right

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::cli::tui::app::App;
use crate::cli::tui::ui;
use crate::cli::tui::utils::{fit_name, on_off};
use crate::domain::WinnerState;

pub fn render(frame: &mut Frame, app: &App) {
    let body = ui::frame_chrome(frame, app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(body);

    draw_stage(frame, app, columns[0]);
    draw_history(frame, app, columns[1]);
}

fn draw_stage(frame: &mut Frame, app: &App, area: Rect) {
    let engine = app.draw_engine();
    let width = area.width.saturating_sub(4) as usize;

    let headline = match engine.winner_state() {
        WinnerState::Idle if app.names().is_empty() => {
            Line::from("Load some names to start".dark_gray())
        }
        WinnerState::Idle => Line::from("Press space to draw".dark_gray()),
        WinnerState::Spinning { candidate } => {
            let shown = candidate.as_deref().unwrap_or("...");
            Line::from(fit_name(shown, width).yellow())
        }
        WinnerState::Winner { name } => Line::from(
            format!("★ {} ★", fit_name(name, width.saturating_sub(4)))
                .green()
                .bold(),
        ),
    };

    let subtitle = if engine.is_spinning() {
        "Drawing...".to_string()
    } else {
        format!(
            "Eligible {}/{}  Repeat [a]: {}",
            engine.pool_size(),
            app.names().len(),
            on_off(engine.allow_repeat())
        )
    };

    let text = vec![Line::from(""), headline, Line::from(""), Line::from(subtitle)];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Lucky Draw").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect) {
    let history = app.draw_engine().history();
    let width = area.width.saturating_sub(8) as usize;
    let total = history.len();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No winners yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .iter()
            .enumerate()
            .map(|(i, name)| ListItem::new(format!("{:>3}. {}", total - i, fit_name(name, width))))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!("History ({}) [x]reset", total))
            .borders(Borders::ALL),
    );

    frame.render_widget(list, area);
}
