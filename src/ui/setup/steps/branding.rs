//! Branding step: optional logo path input.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::setup::ProfileWizard;

impl ProfileWizard {
    pub(crate) fn render_branding_step(&mut self, frame: &mut Frame) {
        let body = self.step_frame(frame, "Type a path or leave blank  Enter next  Esc back");

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(body);

        let input = Paragraph::new(Line::from(vec![
            Span::raw(self.profile.logo_path.as_str()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .title("Logo path (optional)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(input, rows[0]);

        let note = Paragraph::new(
            "PNG or SVG works best. The logo appears on reports and shared scorecards.",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(note, rows[2]);
    }
}
