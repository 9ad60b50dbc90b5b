//! Assistant chat panel.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::assistant::{Author, ChatMessage, GREETING};

/// Transcript plus the input line. Reply scheduling lives in the app so the
/// panel stays synchronous and testable.
pub struct ChatPanel {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub thinking: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            thinking: false,
        }
    }

    /// Take the typed question, appending it to the transcript.
    /// Returns `None` for empty input or while a reply is pending.
    pub fn submit(&mut self) -> Option<String> {
        let question = self.input.trim().to_string();
        if question.is_empty() || self.thinking {
            return None;
        }
        self.input.clear();
        self.messages.push(ChatMessage::user(question.clone()));
        self.thinking = true;
        Some(question)
    }

    pub fn receive_reply(&mut self, reply: String) {
        self.messages.push(ChatMessage::assistant(reply));
        self.thinking = false;
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Assistant ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(inner);

        let mut items: Vec<ListItem> = self
            .messages
            .iter()
            .map(|m| {
                let (prefix, color) = match m.author {
                    Author::User => ("you", Color::Green),
                    Author::Assistant => ("assistant", Color::Cyan),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}: ", prefix), Style::default().fg(color)),
                    Span::raw(m.text.clone()),
                ]))
            })
            .collect();
        if self.thinking {
            items.push(ListItem::new(Span::styled(
                "assistant is typing...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(List::new(items), chunks[0]);

        let input = Paragraph::new(Line::from(vec![
            Span::raw(self.input.as_str()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Ask about scorecards, SWOT, plans, surveys")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
        frame.render_widget(input, chunks[1]);
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}
