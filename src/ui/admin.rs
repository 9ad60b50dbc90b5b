//! Admin console: business user management over the backend store.
//!
//! The panel is a plain state machine. The app fires backend calls and
//! feeds results back through [`AdminPanel::apply`]; a failed call leaves
//! the last good listing on screen with an inline error.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::backend::{BackendError, BusinessUser, RowQuery, SignUpRequest, UserPatch};

/// Result of a finished backend call, delivered over the app's channel.
#[derive(Debug)]
pub enum AdminEvent {
    Listed(Result<Vec<BusinessUser>, BackendError>),
    Created(Result<BusinessUser, BackendError>),
    Updated(Result<BusinessUser, BackendError>),
    Deleted(u64, Result<(), BackendError>),
}

/// Backend call the app should dispatch next.
#[derive(Debug, PartialEq)]
pub enum AdminAction {
    List(RowQuery),
    Create(SignUpRequest),
    Update(u64, UserPatch),
    Delete(u64),
}

/// Which input has focus on the new-user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpFocus {
    Name,
    Email,
    Company,
}

/// Draft for a new business user, filled in the sign-up form.
#[derive(Debug)]
pub struct SignUpDraft {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub focus: SignUpFocus,
    pub error: Option<String>,
}

impl SignUpDraft {
    fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            company: String::new(),
            focus: SignUpFocus::Name,
            error: None,
        }
    }
}

pub struct AdminPanel {
    pub users: Vec<BusinessUser>,
    pub state: ListState,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Role draft while editing the selected user's role.
    pub role_draft: Option<String>,
    /// New-user form while it is open.
    pub signup: Option<SignUpDraft>,
    pub configured: bool,
}

impl AdminPanel {
    pub fn new(configured: bool) -> Self {
        Self {
            users: Vec::new(),
            state: ListState::default(),
            search: String::new(),
            loading: false,
            error: None,
            success: None,
            role_draft: None,
            signup: None,
            configured,
        }
    }

    pub fn selected_user(&self) -> Option<&BusinessUser> {
        self.state.selected().and_then(|i| self.users.get(i))
    }

    pub fn select_next(&mut self) {
        let len = self.users.len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
        self.state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let len = self.users.len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.state.select(Some(i));
    }

    /// Request the listing for the current search. `None` when the panel is
    /// unconfigured or already waiting on a call.
    pub fn refresh(&mut self) -> Option<AdminAction> {
        if !self.configured {
            self.error = Some(BackendError::NotConfigured.display_message());
            return None;
        }
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success = None;
        Some(AdminAction::List(RowQuery {
            search: self.search.clone(),
            order_by: Some("full_name".to_string()),
            descending: false,
        }))
    }

    /// Start editing the selected user's role.
    pub fn begin_role_edit(&mut self) {
        if let Some(user) = self.selected_user() {
            self.role_draft = Some(user.role.clone());
        }
    }

    /// Cycle the role draft through the known roles.
    pub fn cycle_role(&mut self) {
        const ROLES: &[&str] = &["member", "manager", "admin"];
        if let Some(draft) = self.role_draft.as_mut() {
            let i = ROLES.iter().position(|r| r == draft).unwrap_or(0);
            *draft = ROLES[(i + 1) % ROLES.len()].to_string();
        }
    }

    /// Commit the role draft as a patch for the selected user.
    pub fn commit_role_edit(&mut self) -> Option<AdminAction> {
        let draft = self.role_draft.take()?;
        let user = self.selected_user()?;
        if user.role == draft {
            return None;
        }
        let id = user.id;
        self.loading = true;
        Some(AdminAction::Update(
            id,
            UserPatch {
                role: Some(draft),
                ..Default::default()
            },
        ))
    }

    pub fn cancel_role_edit(&mut self) {
        self.role_draft = None;
    }

    /// Request deletion of the selected user.
    pub fn delete_selected(&mut self) -> Option<AdminAction> {
        if self.loading {
            return None;
        }
        let id = self.selected_user()?.id;
        self.loading = true;
        Some(AdminAction::Delete(id))
    }

    /// Open the new-user form.
    pub fn begin_signup(&mut self) {
        if !self.configured {
            self.error = Some(BackendError::NotConfigured.display_message());
            return;
        }
        if self.loading {
            return;
        }
        self.error = None;
        self.success = None;
        self.signup = Some(SignUpDraft::new());
    }

    pub fn signup_cycle_focus(&mut self) {
        if let Some(draft) = self.signup.as_mut() {
            draft.focus = match draft.focus {
                SignUpFocus::Name => SignUpFocus::Email,
                SignUpFocus::Email => SignUpFocus::Company,
                SignUpFocus::Company => SignUpFocus::Name,
            };
        }
    }

    pub fn signup_input_char(&mut self, c: char) {
        if let Some(draft) = self.signup.as_mut() {
            draft.error = None;
            match draft.focus {
                SignUpFocus::Name => draft.full_name.push(c),
                SignUpFocus::Email => draft.email.push(c),
                SignUpFocus::Company => draft.company.push(c),
            }
        }
    }

    pub fn signup_backspace(&mut self) {
        if let Some(draft) = self.signup.as_mut() {
            match draft.focus {
                SignUpFocus::Name => {
                    draft.full_name.pop();
                }
                SignUpFocus::Email => {
                    draft.email.pop();
                }
                SignUpFocus::Company => {
                    draft.company.pop();
                }
            }
        }
    }

    pub fn cancel_signup(&mut self) {
        self.signup = None;
    }

    /// Validate the form and turn it into a create call. Name and a
    /// plausible email are required; an invalid form stays open with an
    /// inline error.
    pub fn commit_signup(&mut self) -> Option<AdminAction> {
        let draft = self.signup.as_mut()?;
        if draft.full_name.trim().is_empty() {
            draft.error = Some("Name is required".to_string());
            return None;
        }
        if !draft.email.contains('@') || draft.email.trim().len() < 3 {
            draft.error = Some("Enter a valid email address".to_string());
            return None;
        }
        let draft = self.signup.take()?;
        self.loading = true;
        Some(AdminAction::Create(SignUpRequest {
            email: draft.email.trim().to_string(),
            full_name: draft.full_name.trim().to_string(),
            company: draft.company.trim().to_string(),
            role: "member".to_string(),
        }))
    }

    /// Flip the selected user's active flag.
    pub fn toggle_active(&mut self) -> Option<AdminAction> {
        if self.loading {
            return None;
        }
        let user = self.selected_user()?;
        let (id, active) = (user.id, user.active);
        self.loading = true;
        Some(AdminAction::Update(
            id,
            UserPatch {
                active: Some(!active),
                ..Default::default()
            },
        ))
    }

    /// Fold a finished backend call into the panel.
    pub fn apply(&mut self, event: AdminEvent) {
        self.loading = false;
        match event {
            AdminEvent::Listed(Ok(users)) => {
                self.users = users;
                if self.state.selected().is_none() && !self.users.is_empty() {
                    self.state.select(Some(0));
                }
                if let Some(i) = self.state.selected() {
                    if i >= self.users.len() {
                        self.state.select(self.users.len().checked_sub(1));
                    }
                }
            }
            AdminEvent::Created(Ok(user)) => {
                self.success = Some(format!("Created {}", user.email));
                self.users.push(user);
            }
            AdminEvent::Updated(Ok(user)) => {
                self.success = Some(format!("Updated {}", user.email));
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *existing = user;
                }
            }
            AdminEvent::Deleted(id, Ok(())) => {
                self.success = Some("User deleted".to_string());
                self.users.retain(|u| u.id != id);
                if let Some(i) = self.state.selected() {
                    if i >= self.users.len() {
                        self.state.select(self.users.len().checked_sub(1));
                    }
                }
            }
            AdminEvent::Listed(Err(e))
            | AdminEvent::Created(Err(e))
            | AdminEvent::Updated(Err(e)) => {
                self.error = Some(e.display_message());
            }
            AdminEvent::Deleted(_, Err(e)) => {
                self.error = Some(e.display_message());
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Min(4),    // Users
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let search = Paragraph::new(Line::from(vec![
            Span::raw(self.search.as_str()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .title("Search (name or email), r refresh")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
        frame.render_widget(search, chunks[0]);

        let items: Vec<ListItem> = self
            .users
            .iter()
            .enumerate()
            .map(|(i, u)| {
                let role = if self.state.selected() == Some(i) {
                    self.role_draft.clone().unwrap_or_else(|| u.role.clone())
                } else {
                    u.role.clone()
                };
                let active = if u.active { "" } else { " (inactive)" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        u.full_name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" <{}>", u.email), Style::default().fg(Color::Gray)),
                    Span::styled(format!(" [{}]", role), Style::default().fg(Color::Cyan)),
                    Span::styled(active, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let title = if self.loading {
            format!("Business Users ({}) - loading...", self.users.len())
        } else {
            format!("Business Users ({})", self.users.len())
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.state);

        let status = if let Some(err) = &self.error {
            Span::styled(err.clone(), Style::default().fg(Color::Red))
        } else if let Some(ok) = &self.success {
            Span::styled(ok.clone(), Style::default().fg(Color::Green))
        } else if self.role_draft.is_some() {
            Span::styled(
                "Space cycle role  Enter save  Esc cancel",
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(
                "a add  e edit role  t toggle active  d delete  r refresh",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(status)), chunks[2]);

        if self.signup.is_some() {
            self.render_signup_form(frame);
        }
    }

    fn render_signup_form(&self, frame: &mut Frame) {
        let Some(draft) = &self.signup else {
            return;
        };
        let area = centered_rect(50, 45, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" New Business User ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        let input = |label: &'static str, value: &str, focused: bool| {
            let border = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(Line::from(vec![
                Span::raw(value.to_string()),
                Span::styled("_", Style::default().fg(Color::Cyan)),
            ]))
            .block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_style(border),
            )
        };

        frame.render_widget(
            input("Full name", &draft.full_name, draft.focus == SignUpFocus::Name),
            rows[0],
        );
        frame.render_widget(
            input("Email", &draft.email, draft.focus == SignUpFocus::Email),
            rows[1],
        );
        frame.render_widget(
            input("Company", &draft.company, draft.focus == SignUpFocus::Company),
            rows[2],
        );

        let footer = if let Some(err) = &draft.error {
            Span::styled(err.clone(), Style::default().fg(Color::Red))
        } else {
            Span::styled(
                "Tab switch field  Enter create  Esc cancel",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(footer)), rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, role: &str) -> BusinessUser {
        BusinessUser {
            id,
            email: format!("{}@example.com", name.to_lowercase()),
            full_name: name.to_string(),
            company: "Acme".to_string(),
            role: role.to_string(),
            active: true,
        }
    }

    #[test]
    fn test_unconfigured_panel_never_issues_calls() {
        let mut panel = AdminPanel::new(false);
        assert!(panel.refresh().is_none());
        assert!(panel.error.as_deref().unwrap().contains("SKORE_BACKEND_URL"));
    }

    #[test]
    fn test_refresh_guards_against_concurrent_loads() {
        let mut panel = AdminPanel::new(true);
        assert!(panel.refresh().is_some());
        assert!(panel.refresh().is_none());

        panel.apply(AdminEvent::Listed(Ok(vec![user(1, "Ana", "member")])));
        assert!(!panel.loading);
        assert_eq!(panel.users.len(), 1);
        assert_eq!(panel.state.selected(), Some(0));
    }

    #[test]
    fn test_failed_list_keeps_previous_rows() {
        let mut panel = AdminPanel::new(true);
        panel.refresh();
        panel.apply(AdminEvent::Listed(Ok(vec![user(1, "Ana", "member")])));

        panel.refresh();
        panel.apply(AdminEvent::Listed(Err(BackendError::Status {
            code: 500,
            body: "boom".to_string(),
        })));

        assert_eq!(panel.users.len(), 1);
        assert!(panel.error.as_deref().unwrap().contains("500"));
    }

    #[test]
    fn test_role_edit_produces_patch_only_on_change() {
        let mut panel = AdminPanel::new(true);
        panel.apply(AdminEvent::Listed(Ok(vec![user(7, "Ana", "member")])));

        panel.begin_role_edit();
        // Committing an unchanged draft is a no-op.
        assert!(panel.commit_role_edit().is_none());

        panel.begin_role_edit();
        panel.cycle_role();
        let action = panel.commit_role_edit().unwrap();
        match action {
            AdminAction::Update(id, patch) => {
                assert_eq!(id, 7);
                assert_eq!(patch.role.as_deref(), Some("manager"));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_signup_form_validates_before_creating() {
        let mut panel = AdminPanel::new(true);
        panel.begin_signup();
        assert!(panel.signup.is_some());

        // Empty form stays open with an inline error.
        assert!(panel.commit_signup().is_none());
        assert_eq!(
            panel.signup.as_ref().unwrap().error.as_deref(),
            Some("Name is required")
        );

        for c in "Dana".chars() {
            panel.signup_input_char(c);
        }
        panel.signup_cycle_focus();
        for c in "not-an-email".chars() {
            panel.signup_input_char(c);
        }
        assert!(panel.commit_signup().is_none());
        assert!(panel.signup.as_ref().unwrap().error.is_some());

        for _ in 0.."not-an-email".len() {
            panel.signup_backspace();
        }
        for c in "dana@acme.test".chars() {
            panel.signup_input_char(c);
        }
        panel.signup_cycle_focus();
        for c in "Acme".chars() {
            panel.signup_input_char(c);
        }

        let action = panel.commit_signup().unwrap();
        match action {
            AdminAction::Create(req) => {
                assert_eq!(req.full_name, "Dana");
                assert_eq!(req.email, "dana@acme.test");
                assert_eq!(req.company, "Acme");
                assert_eq!(req.role, "member");
            }
            other => panic!("unexpected action {:?}", other),
        }
        assert!(panel.signup.is_none());
        assert!(panel.loading);

        panel.apply(AdminEvent::Created(Ok(user(9, "Dana", "member"))));
        assert_eq!(panel.users.len(), 1);
        assert!(panel.success.as_deref().unwrap().contains("dana"));
    }

    #[test]
    fn test_signup_needs_a_configured_backend() {
        let mut panel = AdminPanel::new(false);
        panel.begin_signup();
        assert!(panel.signup.is_none());
        assert!(panel.error.as_deref().unwrap().contains("SKORE_BACKEND_URL"));
    }

    #[test]
    fn test_cancel_discards_the_signup_draft() {
        let mut panel = AdminPanel::new(true);
        panel.begin_signup();
        panel.signup_input_char('x');
        panel.cancel_signup();
        assert!(panel.signup.is_none());
        assert!(panel.commit_signup().is_none());
        assert!(!panel.loading);
    }

    #[test]
    fn test_toggle_active_patches_selected_user() {
        let mut panel = AdminPanel::new(true);
        panel.apply(AdminEvent::Listed(Ok(vec![user(3, "Ana", "member")])));

        let action = panel.toggle_active().unwrap();
        match action {
            AdminAction::Update(id, patch) => {
                assert_eq!(id, 3);
                assert_eq!(patch.active, Some(false));
                assert!(patch.role.is_none());
            }
            other => panic!("unexpected action {:?}", other),
        }

        let mut deactivated = user(3, "Ana", "member");
        deactivated.active = false;
        panel.apply(AdminEvent::Updated(Ok(deactivated)));
        assert!(!panel.users[0].active);

        // Toggling again brings the user back.
        match panel.toggle_active().unwrap() {
            AdminAction::Update(_, patch) => assert_eq!(patch.active, Some(true)),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_delete_removes_row_and_fixes_selection() {
        let mut panel = AdminPanel::new(true);
        panel.apply(AdminEvent::Listed(Ok(vec![
            user(1, "Ana", "member"),
            user(2, "Bo", "admin"),
        ])));
        panel.state.select(Some(1));

        let action = panel.delete_selected().unwrap();
        assert_eq!(action, AdminAction::Delete(2));
        panel.apply(AdminEvent::Deleted(2, Ok(())));

        assert_eq!(panel.users.len(), 1);
        assert_eq!(panel.state.selected(), Some(0));
    }
}
