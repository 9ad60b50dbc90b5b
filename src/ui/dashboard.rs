//! View routing and per-view rendering for the main dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::grid::GridState;
use super::panels::{render_grid_table, render_stat_card};
use crate::store::{DashboardStats, PlanBoard, PlanFilter, ScorecardBoard, SurveyBoard, SwotBoard};
use crate::types::{
    ActionField, ObjectiveField, Perspective, SurveyStatus, SwotCategory, SwotField,
};

/// Top-level screens, switched with the number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Scorecard,
    ActionPlan,
    Swot,
    Surveys,
    Reports,
    Admin,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Scorecard,
            View::ActionPlan,
            View::Swot,
            View::Surveys,
            View::Reports,
            View::Admin,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Scorecard => "Balanced Scorecard",
            View::ActionPlan => "Action Plans",
            View::Swot => "SWOT Analysis",
            View::Surveys => "Surveys",
            View::Reports => "Reports",
            View::Admin => "Admin",
        }
    }

    /// View for a number key, 1-based.
    pub fn from_key(c: char) -> Option<View> {
        let index = c.to_digit(10)? as usize;
        Self::all().get(index.checked_sub(1)?).copied()
    }
}

pub fn render_dashboard_view(frame: &mut Frame, area: Rect, stats: &DashboardStats) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(2)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);

    render_stat_card(
        frame,
        top[0],
        "Objectives on track",
        format!("{}/{}", stats.objectives_on_track, stats.objectives_total),
        Color::Green,
    );
    render_stat_card(
        frame,
        top[1],
        "Average progress",
        format!("{}%", stats.average_progress),
        Color::Cyan,
    );
    render_stat_card(
        frame,
        top[2],
        "Actions completed",
        format!("{}%", stats.completion_percent()),
        Color::Yellow,
    );
    render_stat_card(
        frame,
        top[3],
        "Survey responses",
        format!("{}%", stats.survey_response_rate),
        Color::Magenta,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    render_stat_card(
        frame,
        bottom[0],
        "Objectives at risk",
        stats.objectives_at_risk.to_string(),
        Color::Yellow,
    );
    render_stat_card(
        frame,
        bottom[1],
        "Actions off track",
        stats.actions_off_track.to_string(),
        Color::Red,
    );
    render_stat_card(
        frame,
        bottom[2],
        "High-impact SWOT",
        stats.high_impact_swot.to_string(),
        Color::Cyan,
    );

    let help = Paragraph::new(
        "1-7 switch views  a add  d delete  Enter edit cell  / search  ? assistant  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[2]);
}

pub fn render_scorecard_view(
    frame: &mut Frame,
    area: Rect,
    board: &ScorecardBoard,
    perspective: Option<Perspective>,
    grid: &GridState<ObjectiveField>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let tabs: Vec<Span> = std::iter::once(Span::styled(
        if perspective.is_none() { "[All] " } else { "All " },
        Style::default().fg(if perspective.is_none() {
            Color::Cyan
        } else {
            Color::Gray
        }),
    ))
    .chain(Perspective::all().iter().map(|p| {
        let active = perspective == Some(*p);
        Span::styled(
            if active {
                format!("[{}] ", p.label())
            } else {
                format!("{} ", p.label())
            },
            Style::default().fg(if active { Color::Cyan } else { Color::Gray }),
        )
    }))
    .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let filter = crate::store::ScorecardFilter {
        search: String::new(),
        perspective,
    };
    let visible = board.filtered(&filter);
    render_grid_table(
        frame,
        chunks[1],
        format!("Objectives ({})", visible.len()),
        &visible,
        grid,
        true,
    );
}

pub fn render_plan_view(
    frame: &mut Frame,
    area: Rect,
    board: &PlanBoard,
    filter: &PlanFilter,
    grid: &GridState<ActionField>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let mut facets = Vec::new();
    if !filter.search.is_empty() {
        facets.push(format!("search: {}", filter.search));
    }
    if let Some(status) = filter.status {
        facets.push(format!("status: {}", status.label()));
    }
    if let Some(risk) = filter.risk {
        facets.push(format!("risk: {}", risk.label()));
    }
    let facet_line = if facets.is_empty() {
        "no filters ( / search, s status, k risk )".to_string()
    } else {
        facets.join("  ")
    };
    frame.render_widget(
        Paragraph::new(facet_line).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );

    let visible = board.filtered(filter);
    render_grid_table(
        frame,
        chunks[1],
        format!("Action Items ({})", visible.len()),
        &visible,
        grid,
        true,
    );
}

pub fn render_swot_view(
    frame: &mut Frame,
    area: Rect,
    board: &SwotBoard,
    active_category: SwotCategory,
    grid: &GridState<SwotField>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let quadrants = [
        (SwotCategory::Strengths, top[0]),
        (SwotCategory::Weaknesses, top[1]),
        (SwotCategory::Opportunities, bottom[0]),
        (SwotCategory::Threats, bottom[1]),
    ];

    for (category, quadrant_area) in quadrants {
        let entries = board.in_category(category);
        let focused = category == active_category;
        render_grid_table(
            frame,
            quadrant_area,
            format!("{} ({})", category.label(), entries.len()),
            &entries,
            grid,
            focused,
        );
    }
}

pub fn render_surveys_view(frame: &mut Frame, area: Rect, board: &SurveyBoard, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = board
        .surveys
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let status_color = match s.status {
                SurveyStatus::Active => Color::Green,
                SurveyStatus::Draft => Color::Yellow,
                SurveyStatus::Closed => Color::Gray,
            };
            let style = if i == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", s.status.label()), Style::default().fg(status_color)),
                Span::raw(s.title.clone()),
            ]))
            .style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!("Surveys ({} active)", board.active_count()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, chunks[0]);

    let detail_block = Block::default()
        .title("Detail")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    if let Some(survey) = board.surveys.get(selected) {
        let inner = detail_block.inner(chunks[1]);
        frame.render_widget(detail_block, chunks[1]);

        let detail_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(2),
            ])
            .split(inner);

        let meta = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Audience: ", Style::default().fg(Color::Gray)),
                Span::raw(survey.audience.clone()),
                Span::styled("   Created: ", Style::default().fg(Color::Gray)),
                Span::raw(survey.created_date.clone()),
            ]),
            Line::from(vec![
                Span::styled("Responses: ", Style::default().fg(Color::Gray)),
                Span::raw(format!(
                    "{}/{}",
                    survey.response_count(),
                    survey.recipients.len()
                )),
            ]),
        ]);
        frame.render_widget(meta, detail_rows[0]);

        let rate = survey.response_rate();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .percent(rate)
            .label(format!("{}% responded", rate));
        frame.render_widget(gauge, detail_rows[1]);

        let questions: Vec<ListItem> = survey
            .questions
            .iter()
            .map(|q| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", q.kind.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(q.prompt.clone()),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(questions).block(Block::default().title("Questions")),
            detail_rows[2],
        );
    } else {
        frame.render_widget(detail_block, chunks[1]);
    }
}

pub fn render_reports_view(frame: &mut Frame, area: Rect, stats: &DashboardStats) {
    let lines = vec![
        Line::from(Span::styled(
            "Quarterly Snapshot",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Objectives: {} total, {} on track, {} at risk, {} behind",
            stats.objectives_total,
            stats.objectives_on_track,
            stats.objectives_at_risk,
            stats.objectives_behind
        )),
        Line::from(format!(
            "Average objective progress: {}%",
            stats.average_progress
        )),
        Line::from(""),
        Line::from(format!(
            "Action items: {} total, {} completed ({}%), {} off track",
            stats.actions_total,
            stats.actions_completed,
            stats.completion_percent(),
            stats.actions_off_track
        )),
        Line::from(""),
        Line::from(format!(
            "Surveys: {} active, {}% overall response rate",
            stats.active_surveys, stats.survey_response_rate
        )),
        Line::from(format!(
            "High-impact SWOT entries: {}",
            stats.high_impact_swot
        )),
    ];
    let report = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Reports")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(report, area);
}
