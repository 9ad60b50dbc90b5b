//! Co-admin step: invite list plus a three-field draft form.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::setup::{CoAdminFocus, ProfileWizard};

impl ProfileWizard {
    pub(crate) fn render_coadmins_step(&mut self, frame: &mut Frame) {
        let body = self.step_frame(
            frame,
            "Tab switch field  + add  - remove last  Enter finish  Esc back",
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);

        let field = |label: &str, value: &str, focused: bool| {
            let border = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mut spans = vec![Span::raw(value.to_string())];
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
            }
            Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .title(label.to_string())
                    .borders(Borders::ALL)
                    .border_style(border),
            )
        };

        let form_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(columns[0]);

        frame.render_widget(
            field(
                "Name",
                &self.coadmin_draft.name,
                self.coadmin_focus == CoAdminFocus::Name,
            ),
            form_rows[0],
        );
        frame.render_widget(
            field(
                "Email",
                &self.coadmin_draft.email,
                self.coadmin_focus == CoAdminFocus::Email,
            ),
            form_rows[1],
        );
        frame.render_widget(
            field(
                "Title (optional)",
                &self.coadmin_draft.title,
                self.coadmin_focus == CoAdminFocus::Title,
            ),
            form_rows[2],
        );

        if let Some(err) = &self.coadmin_error {
            let error = Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(error, form_rows[3]);
        }

        let invited: Vec<ListItem> = self
            .profile
            .co_admins
            .iter()
            .map(|admin| {
                ListItem::new(Line::from(vec![
                    Span::styled(admin.name.clone(), Style::default().fg(Color::Green)),
                    Span::styled(
                        format!(" <{}>", admin.email),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();
        let invited_list = List::new(invited).block(
            Block::default()
                .title(format!("Invited ({})", self.profile.co_admins.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
        frame.render_widget(invited_list, columns[1]);
    }
}
