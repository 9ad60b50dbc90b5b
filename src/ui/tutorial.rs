//! Guided tour shown after onboarding completes.
//!
//! Ten fixed stops walk through the dashboard. Every stop is always valid,
//! so advancing never blocks; stops walked past are remembered as completed
//! even after backing up. The tour can be skipped at any point and never
//! re-opens once finished or skipped.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::engine::{Advance, StepSequencer};

/// One stop on the tour.
pub struct TourStop {
    pub title: &'static str,
    pub body: &'static str,
}

const STOPS: &[TourStop] = &[
    TourStop {
        title: "Welcome",
        body: "This is your strategy performance dashboard. The tour takes about a \
minute; press S at any time to skip it.",
    },
    TourStop {
        title: "Navigation",
        body: "The number keys 1-7 switch between views: dashboard, scorecard, action \
plans, SWOT, surveys, reports, and admin.",
    },
    TourStop {
        title: "Quick Stats",
        body: "The dashboard header shows objectives on track, action completion, and \
survey response rates at a glance. The numbers recompute live as you edit.",
    },
    TourStop {
        title: "Quick Actions",
        body: "From most views, 'a' adds a record and 'd' deletes the selected one. \
New records start blank and get the next free id.",
    },
    TourStop {
        title: "Surveys",
        body: "The surveys view tracks who has responded. Draft surveys can be edited \
freely; active ones accumulate responses.",
    },
    TourStop {
        title: "Balanced Scorecard",
        body: "Objectives are grouped into four perspectives. Press Enter on any cell \
to edit it inline; Enter commits, Esc discards.",
    },
    TourStop {
        title: "Action Plans",
        body: "Each action pairs a strategic priority with a lead, target, and due \
date. Unrealistic targets and tight deadlines get a gentle advisory toast; your \
value is always saved either way.",
    },
    TourStop {
        title: "Reports",
        body: "The reports view derives completion and risk summaries from your boards. \
Nothing there is stored; it always reflects the current data.",
    },
    TourStop {
        title: "Assistant",
        body: "Press '?' to open the assistant panel and ask about scorecards, SWOT, \
action plans, or surveys.",
    },
    TourStop {
        title: "All Set",
        body: "That's the tour. Your workspace is saved automatically on exit. Press \
Enter to start working.",
    },
];

fn always(_: &()) -> bool {
    true
}

/// Outcome of a tour key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourResult {
    Continue,
    /// Walked through every stop, or skipped out.
    Done,
}

pub struct GuidedTour {
    sequencer: StepSequencer<()>,
    completed: Vec<bool>,
}

impl GuidedTour {
    pub fn new() -> Self {
        Self {
            sequencer: StepSequencer::new(vec![always; STOPS.len()]),
            completed: vec![false; STOPS.len()],
        }
    }

    pub fn stop(&self) -> &'static TourStop {
        &STOPS[self.sequencer.position()]
    }

    pub fn position(&self) -> usize {
        self.sequencer.position()
    }

    pub fn stop_count(&self) -> usize {
        self.sequencer.step_count()
    }

    /// Whether a stop has been walked past.
    pub fn is_completed(&self, stop: usize) -> bool {
        self.completed.get(stop).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|c| **c).count()
    }

    /// Advance to the next stop (Enter / Right), marking the current one
    /// completed.
    pub fn next(&mut self) -> TourResult {
        self.completed[self.sequencer.position()] = true;
        match self.sequencer.advance(&()) {
            Advance::Completed => TourResult::Done,
            _ => TourResult::Continue,
        }
    }

    /// Go back a stop (Left). Stays on the first stop.
    pub fn previous(&mut self) {
        self.sequencer.retreat();
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let stop = self.stop();
        // Revisited stops get a check mark.
        let seen = if self.is_completed(self.position()) {
            " ✓"
        } else {
            ""
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Tour "),
                Span::styled(
                    format!("{}/{}{}", self.position() + 1, self.stop_count(), seen),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            stop.title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let body = Paragraph::new(stop.body).wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[2]);

        let percent = ((self.completed_count() * 100) / self.stop_count()) as u16;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .percent(percent);
        frame.render_widget(gauge, chunks[3]);

        let footer = Paragraph::new("Enter next  Left back  S skip")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[4]);
    }
}

impl Default for GuidedTour {
    fn default() -> Self {
        Self::new()
    }
}
