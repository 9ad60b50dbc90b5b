//! Shared widgets: header, stat cards, grid tables, and the advisory toast.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::grid::{GridField, GridState};
use crate::engine::{Advisory, Editable};
use crate::types::OrgProfile;

/// Top bar: product name, organization, active view.
pub struct HeaderBar<'a> {
    pub profile: Option<&'a OrgProfile>,
    pub view_title: &'a str,
}

impl HeaderBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let org = self
            .profile
            .map(|p| format!("{} / {}", p.industry, p.sub_industry))
            .unwrap_or_else(|| "unconfigured".to_string());
        let line = Line::from(vec![
            Span::styled(
                "Skore",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(org, Style::default().fg(Color::Gray)),
            Span::raw("  |  "),
            Span::styled(self.view_title, Style::default().fg(Color::White)),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }
}

/// One labelled number on the dashboard.
pub fn render_stat_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}

/// Editable table over the grid cursor. The cell under the cursor is
/// highlighted; an open session shows the draft with a trailing caret.
pub fn render_grid_table<R, F>(
    frame: &mut Frame,
    area: Rect,
    title: String,
    records: &[&R],
    grid: &GridState<F>,
    focused: bool,
) where
    R: Editable<Field = F>,
    F: GridField,
{
    let columns = F::columns();

    let header = Row::new(
        columns
            .iter()
            .map(|f| Cell::from(f.title()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(row_idx, record)| {
            let cells: Vec<Cell> = columns
                .iter()
                .enumerate()
                .map(|(col_idx, field)| {
                    let editing = grid.slot.is_editing(record.id(), *field);
                    let text = if editing {
                        let pending = grid
                            .slot
                            .session()
                            .map(|s| s.pending.clone())
                            .unwrap_or_default();
                        format!("{}_", pending)
                    } else {
                        record.get(*field)
                    };

                    let style = if editing {
                        Style::default().fg(Color::Black).bg(Color::Cyan)
                    } else if focused && row_idx == grid.row && col_idx == grid.col {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    Cell::from(text).style(style)
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            }),
    );
    frame.render_widget(table, area);
}

/// Bottom-right advisory toast. Informational only; it never blocks input
/// and the app drops it after the configured number of seconds.
pub fn render_toast(frame: &mut Frame, advisory: &Advisory) {
    let full = frame.area();
    let width = (full.width / 3).max(30).min(full.width);
    let height = 5;
    let area = Rect {
        x: full.width.saturating_sub(width + 1),
        y: full.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let toast = Paragraph::new(advisory.message.as_str())
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .title(" Heads up ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(toast, area);
}

/// Popup-centering helper shared across overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
