//! Industry step: paired industry / sub-industry lists.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::types::{sub_industries_for, INDUSTRIES};
use crate::ui::setup::{IndustryFocus, ProfileWizard};

impl ProfileWizard {
    pub(crate) fn render_industry_step(&mut self, frame: &mut Frame) {
        let body = self.step_frame(frame, "Tab switch list  Enter next  Esc quit");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);

        let border = |focused: bool| {
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let industries: Vec<ListItem> = INDUSTRIES
            .iter()
            .map(|name| {
                let style = if *name == self.profile.industry {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(*name).style(style)
            })
            .collect();
        let industry_list = List::new(industries)
            .block(
                Block::default()
                    .title("Industry")
                    .borders(Borders::ALL)
                    .border_style(border(self.industry_focus == IndustryFocus::Industry)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(industry_list, columns[0], &mut self.industry_state);

        let subs = sub_industries_for(&self.profile.industry);
        let sub_items: Vec<ListItem> = subs
            .iter()
            .map(|name| {
                let style = if *name == self.profile.sub_industry {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(*name).style(style)
            })
            .collect();
        let sub_title = if self.profile.industry.is_empty() {
            "Sub-Industry (pick an industry first)".to_string()
        } else {
            format!("Sub-Industry of {}", self.profile.industry)
        };
        let sub_list = List::new(sub_items)
            .block(
                Block::default()
                    .title(sub_title)
                    .borders(Borders::ALL)
                    .border_style(border(self.industry_focus == IndustryFocus::SubIndustry)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(sub_list, columns[1], &mut self.sub_industry_state);
    }
}
