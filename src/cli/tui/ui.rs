//! Layout pieces shared by both tabs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use super::app::App;

/// Splits the screen into header, body and status bar; draws header and
/// status bar and returns the body area
pub fn frame_chrome(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice);
    }

    chunks[1]
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("Lucky Draw ({} names)", app.names().len());
    let tabs = Tabs::new(vec!["1 Lucky Draw", "2 Auto Grouping"])
        .select(app.tab().index())
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let msg = app
        .status_message()
        .unwrap_or("[space]go [tab]switch [r]eload [?]help [q]uit");

    let paragraph = Paragraph::new(msg.to_string()).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Centered modal box; stays until dismissed with Enter/Esc/Space
fn draw_notice(frame: &mut Frame, notice: &str) {
    let area = centered(frame.area(), 50, 7);
    let paragraph = Paragraph::new(format!("{}\n\n[Enter] OK", notice))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Notice").borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside() {
        let outer = Rect::new(0, 0, 80, 24);
        let inner = centered(outer, 50, 7);
        assert_eq!(inner, Rect::new(15, 8, 50, 7));
    }

    #[test]
    fn centered_clamps_to_small_area() {
        let outer = Rect::new(2, 2, 20, 4);
        let inner = centered(outer, 50, 7);
        assert_eq!(inner, Rect::new(2, 2, 20, 4));
    }
}
