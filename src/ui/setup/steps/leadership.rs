//! Leadership step: title, organization size, and region lists.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::types::{LEADERSHIP_TITLES, ORG_SIZES, REGIONS};
use crate::ui::setup::{LeadershipFocus, ProfileWizard};

impl ProfileWizard {
    pub(crate) fn render_leadership_step(&mut self, frame: &mut Frame) {
        let body = self.step_frame(frame, "Tab switch list  Enter next  Esc back");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(body);

        let border = |focused: bool| {
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let picked = |current: &str, name: &str| {
            if current == name {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }
        };

        let titles: Vec<ListItem> = LEADERSHIP_TITLES
            .iter()
            .map(|t| ListItem::new(*t).style(picked(&self.profile.leadership_title, t)))
            .collect();
        let title_list = List::new(titles)
            .block(
                Block::default()
                    .title("Leadership Title")
                    .borders(Borders::ALL)
                    .border_style(border(self.leadership_focus == LeadershipFocus::Title)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(title_list, columns[0], &mut self.title_state);

        let sizes: Vec<ListItem> = ORG_SIZES
            .iter()
            .map(|s| ListItem::new(*s).style(picked(&self.profile.org_size, s)))
            .collect();
        let size_list = List::new(sizes)
            .block(
                Block::default()
                    .title("Organization Size")
                    .borders(Borders::ALL)
                    .border_style(border(self.leadership_focus == LeadershipFocus::OrgSize)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(size_list, columns[1], &mut self.size_state);

        let regions: Vec<ListItem> = REGIONS
            .iter()
            .map(|r| ListItem::new(*r).style(picked(&self.profile.region, r)))
            .collect();
        let region_list = List::new(regions)
            .block(
                Block::default()
                    .title("Region")
                    .borders(Borders::ALL)
                    .border_style(border(self.leadership_focus == LeadershipFocus::Region)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(region_list, columns[2], &mut self.region_state);
    }
}
