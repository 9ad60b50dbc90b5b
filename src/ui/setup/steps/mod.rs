//! Per-step rendering for the onboarding wizard.

mod branding;
mod coadmins;
mod industry;
mod leadership;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use super::ProfileWizard;
use crate::ui::centered_rect;

impl ProfileWizard {
    /// Shared chrome: cleared popup, titled border, progress gauge, tip, and
    /// footer. Returns the area left for the step body.
    pub(crate) fn step_frame(&self, frame: &mut Frame, footer: &str) -> Rect {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let step = self.step();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Welcome to "),
                Span::styled(
                    "Skore",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " | Step {}/{}: {} ",
                    self.sequencer.position() + 1,
                    self.sequencer.step_count(),
                    step.title()
                )),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Hint
                Constraint::Min(6),    // Step body
                Constraint::Length(2), // Tip
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .percent(self.progress_percent())
            .label(format!("{}%", self.progress_percent()));
        frame.render_widget(gauge, chunks[0]);

        let hint = Paragraph::new(step.hint()).style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, chunks[1]);

        let tip = Paragraph::new(Line::from(vec![
            Span::styled("Tip: ", Style::default().fg(Color::Yellow)),
            Span::styled(self.tip(), Style::default().fg(Color::DarkGray)),
        ]))
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(tip, chunks[3]);

        let footer = Paragraph::new(footer).alignment(Alignment::Center).style(
            if self.can_advance() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        );
        frame.render_widget(footer, chunks[4]);

        chunks[2]
    }
}
