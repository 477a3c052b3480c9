//! Auto grouping tab: one box per group, laid out in a grid

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::cli::tui::app::App;
use crate::cli::tui::ui;
use crate::cli::tui::utils::fit_name;

/// Width of one group box
const CELL_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &App) {
    let body = ui::frame_chrome(frame, app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(body);

    let settings = Paragraph::new(format!(
        "Group size [-/+]: {}   Names: {}   [space] regroup",
        app.group_size(),
        app.names().len()
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(settings, chunks[0]);

    draw_groups(frame, app, chunks[1]);
}

fn draw_groups(frame: &mut Frame, app: &App, area: Rect) {
    let partition = app.group_engine().last();

    if partition.is_empty() {
        let empty = Paragraph::new("No groups yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let per_row = (area.width / CELL_WIDTH).max(1) as usize;
    let tallest = partition.iter().map(Vec::len).max().unwrap_or(0);
    let row_height = row_height(tallest);

    let rows: Vec<_> = partition.groups().chunks(per_row).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(row_height); rows.len()])
        .split(area);

    for (row_idx, (row, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); per_row])
            .split(*row_area);

        for (col_idx, (group, cell)) in row.iter().zip(cells.iter()).enumerate() {
            let number = row_idx * per_row + col_idx + 1;
            let items: Vec<ListItem> = group
                .iter()
                .map(|name| ListItem::new(fit_name(name, CELL_WIDTH as usize - 2)))
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .title(format!("Group {} ({})", number, group.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
            frame.render_widget(list, *cell);
        }
    }
}

/// Height of a row of group cards, borders included
fn row_height(tallest: usize) -> u16 {
    u16::try_from(tallest).unwrap_or(u16::MAX).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_height_adds_borders() {
        assert_eq!(row_height(0), 2);
        assert_eq!(row_height(3), 5);
    }

    #[test]
    fn row_height_saturates_on_huge_groups() {
        assert_eq!(row_height(70_000), u16::MAX);
        assert_eq!(row_height(usize::from(u16::MAX) - 1), u16::MAX);
    }
}
