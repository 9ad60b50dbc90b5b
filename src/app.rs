use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::{Constraint, Direction, Layout}, Frame, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::assistant::Responder;
use crate::backend::{BackendStore, HttpBackend};
use crate::config::Config;
use crate::engine::{Advisory, AdvisoryEngine};
use crate::store::{DashboardStats, PlanFilter, Workspace};
use crate::types::{ActionField, ActionStatus, ObjectiveField, Perspective, RiskLevel, SwotCategory, SwotField};
use crate::ui::dashboard::{
    render_dashboard_view, render_plan_view, render_reports_view, render_scorecard_view,
    render_surveys_view, render_swot_view,
};
use crate::ui::setup::WizardResult;
use crate::ui::{
    render_toast, AdminAction, AdminEvent, AdminPanel, ChatPanel, GridOutcome, GridState,
    GuidedTour, HeaderBar, ProfileWizard, TourResult, View,
};

pub struct App {
    config: Config,
    workspace: Workspace,
    advisory_engine: AdvisoryEngine,
    view: View,
    wizard: Option<ProfileWizard>,
    tour: Option<GuidedTour>,
    // Per-view grid cursors
    plan_grid: GridState<ActionField>,
    scorecard_grid: GridState<ObjectiveField>,
    swot_grid: GridState<SwotField>,
    // View state
    plan_filter: PlanFilter,
    scorecard_perspective: Option<Perspective>,
    swot_category: SwotCategory,
    survey_selected: usize,
    /// Typing goes into the active view's search box while set.
    search_mode: bool,
    // Assistant
    chat: ChatPanel,
    chat_open: bool,
    responder: Responder,
    reply_rx: mpsc::UnboundedReceiver<String>,
    // Admin console
    admin: AdminPanel,
    backend: Option<Arc<dyn BackendStore>>,
    admin_tx: mpsc::UnboundedSender<AdminEvent>,
    admin_rx: mpsc::UnboundedReceiver<AdminEvent>,
    // Advisory toast with its arrival time
    toast: Option<(Advisory, Instant)>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let workspace = Workspace::load(&config)?;

        // First run without a profile goes through onboarding.
        let wizard = if workspace.is_onboarded() {
            None
        } else {
            info!("no profile found, starting onboarding");
            Some(ProfileWizard::new())
        };

        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let responder = Responder::new(reply_tx, config.assistant.reply_delay_ms);

        let backend: Option<Arc<dyn BackendStore>> = match HttpBackend::from_config(&config.backend)
        {
            Ok(b) => Some(Arc::new(b)),
            Err(e) => {
                warn!("admin backend unavailable: {}", e);
                None
            }
        };
        let configured = backend.is_some();
        let (admin_tx, admin_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            workspace,
            advisory_engine: AdvisoryEngine::with_default_rules(),
            view: View::Dashboard,
            wizard,
            tour: None,
            plan_grid: GridState::new(),
            scorecard_grid: GridState::new(),
            swot_grid: GridState::new(),
            plan_filter: PlanFilter::default(),
            scorecard_perspective: None,
            swot_category: SwotCategory::Strengths,
            survey_selected: 0,
            search_mode: false,
            chat: ChatPanel::new(),
            chat_open: false,
            responder,
            reply_rx,
            admin: AdminPanel::new(configured),
            backend,
            admin_tx,
            admin_rx,
            toast: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            self.drain_channels();
            self.expire_toast();

            terminal.draw(|f| self.draw(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        self.workspace.save(&self.config)?;
        info!("workspace saved on exit");

        Ok(())
    }

    fn drain_channels(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            self.chat.receive_reply(reply);
            self.responder.reply_landed();
        }
        while let Ok(event) = self.admin_rx.try_recv() {
            self.admin.apply(event);
        }
    }

    fn expire_toast(&mut self) {
        let ttl = Duration::from_secs(self.config.ui.toast_seconds);
        if self
            .toast
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= ttl)
        {
            self.toast = None;
        }
    }

    fn show_advisory(&mut self, advisory: Option<Advisory>) {
        if let Some(advisory) = advisory {
            self.toast = Some((advisory, Instant::now()));
        }
    }

    fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn draw(&mut self, frame: &mut Frame) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.render(frame);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(6)])
            .split(frame.area());

        HeaderBar {
            profile: self.workspace.profile.as_ref(),
            view_title: self.view.title(),
        }
        .render(frame, chunks[0]);

        let body = chunks[1];
        match self.view {
            View::Dashboard => {
                let stats = self.stats();
                render_dashboard_view(frame, body, &stats);
            }
            View::Scorecard => render_scorecard_view(
                frame,
                body,
                &self.workspace.scorecard,
                self.scorecard_perspective,
                &self.scorecard_grid,
            ),
            View::ActionPlan => render_plan_view(
                frame,
                body,
                &self.workspace.plan,
                &self.plan_filter,
                &self.plan_grid,
            ),
            View::Swot => render_swot_view(
                frame,
                body,
                &self.workspace.swot,
                self.swot_category,
                &self.swot_grid,
            ),
            View::Surveys => {
                render_surveys_view(frame, body, &self.workspace.surveys, self.survey_selected)
            }
            View::Reports => {
                let stats = self.stats();
                render_reports_view(frame, body, &stats);
            }
            View::Admin => self.admin.render(frame, body),
        }

        if let Some(tour) = &self.tour {
            tour.render(frame);
        }
        if self.chat_open {
            self.chat.render(frame);
        }
        if let Some((advisory, _)) = &self.toast {
            render_toast(frame, advisory);
        }
    }

    fn stats(&self) -> DashboardStats {
        DashboardStats::compute(
            &self.workspace.plan,
            &self.workspace.scorecard,
            &self.workspace.swot,
            &self.workspace.surveys,
        )
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.wizard.is_some() {
            self.handle_wizard_key(code);
            return;
        }
        if self.tour.is_some() {
            self.handle_tour_key(code);
            return;
        }
        if self.chat_open {
            self.handle_chat_key(code);
            return;
        }
        self.handle_view_key(code);
    }

    fn handle_wizard_key(&mut self, code: KeyCode) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        use crate::ui::setup::WizardStep;

        match code {
            KeyCode::Enter => {
                // On the co-admin step a filled draft is added first.
                if wizard.step() == WizardStep::CoAdmins
                    && !wizard.coadmin_draft.name.is_empty()
                {
                    wizard.add_coadmin();
                    return;
                }
                if wizard.confirm() == WizardResult::Finished {
                    if let Some(wizard) = self.wizard.take() {
                        info!(
                            industry = %wizard.profile.industry,
                            "onboarding complete"
                        );
                        self.workspace.profile = Some(wizard.profile);
                        if let Err(e) = self.workspace.save(&self.config) {
                            warn!("failed to save workspace: {}", e);
                        }
                        // First run also drops a local config next to the
                        // workspace so later sessions pick it up.
                        if !Config::local_config_path().exists() {
                            if let Err(e) = self.config.save() {
                                warn!("failed to write local config: {}", e);
                            }
                        }
                        self.tour = Some(GuidedTour::new());
                    }
                }
            }
            KeyCode::Esc => {
                if wizard.go_back() == WizardResult::Cancelled {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => wizard.cycle_focus(),
            KeyCode::Up => wizard.select(false),
            KeyCode::Down => wizard.select(true),
            KeyCode::Backspace => wizard.input_backspace(),
            KeyCode::Char('+') if wizard.step() == WizardStep::CoAdmins => wizard.add_coadmin(),
            KeyCode::Char('-') if wizard.step() == WizardStep::CoAdmins => {
                wizard.remove_last_coadmin()
            }
            KeyCode::Char(c) => wizard.input_char(c),
            _ => {}
        }
    }

    fn handle_tour_key(&mut self, code: KeyCode) {
        let Some(tour) = self.tour.as_mut() else {
            return;
        };
        match code {
            KeyCode::Enter | KeyCode::Right => {
                if tour.next() == TourResult::Done {
                    self.tour = None;
                }
            }
            KeyCode::Left => tour.previous(),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Esc => self.tour = None,
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                // Closing the panel drops any reply still in flight.
                self.responder.cancel();
                self.chat.thinking = false;
                self.chat_open = false;
            }
            KeyCode::Enter => {
                if let Some(question) = self.chat.submit() {
                    self.responder.ask(&question);
                }
            }
            KeyCode::Backspace => {
                self.chat.input.pop();
            }
            KeyCode::Char(c) => self.chat.input.push(c),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        // Search typing intercepts everything except exit keys.
        if self.search_mode {
            match code {
                KeyCode::Esc | KeyCode::Enter => self.search_mode = false,
                KeyCode::Backspace => match self.view {
                    View::Admin => {
                        self.admin.search.pop();
                    }
                    _ => {
                        self.plan_filter.search.pop();
                    }
                },
                KeyCode::Char(c) => match self.view {
                    View::Admin => self.admin.search.push(c),
                    _ => self.plan_filter.search.push(c),
                },
                _ => {}
            }
            return;
        }

        // The admin sign-up form swallows keys before global bindings.
        if matches!(self.view, View::Admin) && self.admin.signup.is_some() {
            match code {
                KeyCode::Esc => self.admin.cancel_signup(),
                KeyCode::Enter => {
                    if let Some(action) = self.admin.commit_signup() {
                        self.dispatch_admin(action);
                    }
                }
                KeyCode::Tab => self.admin.signup_cycle_focus(),
                KeyCode::Backspace => self.admin.signup_backspace(),
                KeyCode::Char(c) => self.admin.signup_input_char(c),
                _ => {}
            }
            return;
        }

        // Grid edit sessions swallow keys before global bindings.
        if self.grid_is_editing() {
            self.handle_grid_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.chat_open = true,
            KeyCode::Char('/') if matches!(self.view, View::ActionPlan | View::Admin) => {
                self.search_mode = true;
            }
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(view) = View::from_key(c) {
                    self.view = view;
                }
            }
            _ => self.handle_view_specific_key(code),
        }
    }

    fn grid_is_editing(&self) -> bool {
        match self.view {
            View::ActionPlan => self.plan_grid.slot.is_open(),
            View::Scorecard => self.scorecard_grid.slot.is_open(),
            View::Swot => self.swot_grid.slot.is_open(),
            _ => false,
        }
    }

    fn handle_view_specific_key(&mut self, code: KeyCode) {
        match self.view {
            View::ActionPlan => match code {
                KeyCode::Char('a') => {
                    self.workspace.plan.add_blank();
                }
                KeyCode::Char('d') => {
                    let ids = self.plan_visible_ids();
                    if let Some(&id) = ids.get(self.plan_grid.row) {
                        self.workspace.plan.remove(id);
                    }
                }
                KeyCode::Char('s') => {
                    self.plan_filter.status = cycle_status(self.plan_filter.status);
                }
                KeyCode::Char('k') => {
                    self.plan_filter.risk = cycle_risk(self.plan_filter.risk);
                }
                _ => self.handle_grid_key(code),
            },
            View::Scorecard => match code {
                KeyCode::Char('a') => {
                    let perspective = self.scorecard_perspective.unwrap_or_default();
                    self.workspace.scorecard.add_blank(perspective);
                }
                KeyCode::Char('d') => {
                    let ids = self.scorecard_visible_ids();
                    if let Some(&id) = ids.get(self.scorecard_grid.row) {
                        self.workspace.scorecard.remove(id);
                    }
                }
                KeyCode::Char('p') => {
                    self.scorecard_perspective = cycle_perspective(self.scorecard_perspective);
                }
                _ => self.handle_grid_key(code),
            },
            View::Swot => match code {
                KeyCode::Tab => {
                    self.swot_category = next_category(self.swot_category);
                    self.swot_grid.row = 0;
                }
                KeyCode::Char('a') => {
                    self.workspace.swot.add(
                        self.swot_category,
                        String::new(),
                        Default::default(),
                    );
                }
                KeyCode::Char('d') => {
                    let ids = self.swot_visible_ids();
                    if let Some(&id) = ids.get(self.swot_grid.row) {
                        self.workspace.swot.remove(id);
                    }
                }
                _ => self.handle_grid_key(code),
            },
            View::Surveys => match code {
                KeyCode::Up => {
                    self.survey_selected = self.survey_selected.saturating_sub(1);
                }
                KeyCode::Down => {
                    let len = self.workspace.surveys.surveys.len();
                    if len > 0 && self.survey_selected + 1 < len {
                        self.survey_selected += 1;
                    }
                }
                _ => {}
            },
            View::Admin => match code {
                KeyCode::Char('r') => {
                    if let Some(action) = self.admin.refresh() {
                        self.dispatch_admin(action);
                    }
                }
                KeyCode::Char('a') => self.admin.begin_signup(),
                KeyCode::Char('e') => self.admin.begin_role_edit(),
                KeyCode::Char('t') => {
                    if let Some(action) = self.admin.toggle_active() {
                        self.dispatch_admin(action);
                    }
                }
                KeyCode::Char(' ') => self.admin.cycle_role(),
                KeyCode::Enter => {
                    if let Some(action) = self.admin.commit_role_edit() {
                        self.dispatch_admin(action);
                    }
                }
                KeyCode::Esc => self.admin.cancel_role_edit(),
                KeyCode::Char('d') => {
                    if let Some(action) = self.admin.delete_selected() {
                        self.dispatch_admin(action);
                    }
                }
                KeyCode::Up => self.admin.select_prev(),
                KeyCode::Down => self.admin.select_next(),
                _ => {}
            },
            View::Dashboard | View::Reports => {}
        }
    }

    fn plan_visible_ids(&self) -> Vec<u32> {
        self.workspace
            .plan
            .filtered(&self.plan_filter)
            .iter()
            .map(|i| i.id)
            .collect()
    }

    fn scorecard_visible_ids(&self) -> Vec<u32> {
        let filter = crate::store::ScorecardFilter {
            search: String::new(),
            perspective: self.scorecard_perspective,
        };
        self.workspace
            .scorecard
            .filtered(&filter)
            .iter()
            .map(|o| o.id)
            .collect()
    }

    fn swot_visible_ids(&self) -> Vec<u32> {
        self.workspace
            .swot
            .in_category(self.swot_category)
            .iter()
            .map(|e| e.id)
            .collect()
    }

    fn handle_grid_key(&mut self, code: KeyCode) {
        let today = Self::today();
        let outcome = match self.view {
            View::ActionPlan => {
                let ids = self.plan_visible_ids();
                self.plan_grid.handle_key(
                    code,
                    &ids,
                    &mut self.workspace.plan.items,
                    &self.advisory_engine,
                    today,
                )
            }
            View::Scorecard => {
                let ids = self.scorecard_visible_ids();
                self.scorecard_grid.handle_key(
                    code,
                    &ids,
                    &mut self.workspace.scorecard.objectives,
                    &self.advisory_engine,
                    today,
                )
            }
            View::Swot => {
                let ids = self.swot_visible_ids();
                self.swot_grid.handle_key(
                    code,
                    &ids,
                    &mut self.workspace.swot.entries,
                    &self.advisory_engine,
                    today,
                )
            }
            _ => GridOutcome::Ignored,
        };

        if let GridOutcome::Committed(advisory) = outcome {
            self.show_advisory(advisory);
        }
    }

    fn dispatch_admin(&mut self, action: AdminAction) {
        let Some(backend) = self.backend.clone() else {
            return;
        };
        let tx = self.admin_tx.clone();
        tokio::spawn(async move {
            let event = match action {
                AdminAction::List(query) => AdminEvent::Listed(backend.list_users(&query).await),
                AdminAction::Create(req) => AdminEvent::Created(backend.create_user(&req).await),
                AdminAction::Update(id, patch) => {
                    AdminEvent::Updated(backend.update_user(id, &patch).await)
                }
                AdminAction::Delete(id) => {
                    AdminEvent::Deleted(id, backend.delete_user(id).await)
                }
            };
            // Receiver dropped means the app is shutting down.
            let _ = tx.send(event);
        });
    }
}

fn cycle_status(current: Option<ActionStatus>) -> Option<ActionStatus> {
    match current {
        None => Some(ActionStatus::NotStarted),
        Some(ActionStatus::NotStarted) => Some(ActionStatus::OnTrack),
        Some(ActionStatus::OnTrack) => Some(ActionStatus::OffTrack),
        Some(ActionStatus::OffTrack) => Some(ActionStatus::Completed),
        Some(ActionStatus::Completed) => None,
    }
}

fn cycle_risk(current: Option<RiskLevel>) -> Option<RiskLevel> {
    match current {
        None => Some(RiskLevel::Low),
        Some(RiskLevel::Low) => Some(RiskLevel::Medium),
        Some(RiskLevel::Medium) => Some(RiskLevel::High),
        Some(RiskLevel::High) => None,
    }
}

fn cycle_perspective(current: Option<Perspective>) -> Option<Perspective> {
    match current {
        None => Some(Perspective::Financial),
        Some(Perspective::Financial) => Some(Perspective::Customer),
        Some(Perspective::Customer) => Some(Perspective::InternalProcess),
        Some(Perspective::InternalProcess) => Some(Perspective::LearningGrowth),
        Some(Perspective::LearningGrowth) => None,
    }
}

fn next_category(current: SwotCategory) -> SwotCategory {
    match current {
        SwotCategory::Strengths => SwotCategory::Weaknesses,
        SwotCategory::Weaknesses => SwotCategory::Opportunities,
        SwotCategory::Opportunities => SwotCategory::Threats,
        SwotCategory::Threats => SwotCategory::Strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycles_return_to_unfiltered() {
        let mut status = None;
        for _ in 0..5 {
            status = cycle_status(status);
        }
        assert_eq!(status, None);

        let mut risk = None;
        for _ in 0..4 {
            risk = cycle_risk(risk);
        }
        assert_eq!(risk, None);

        let mut perspective = None;
        for _ in 0..5 {
            perspective = cycle_perspective(perspective);
        }
        assert_eq!(perspective, None);
    }

    #[test]
    fn test_category_rotation_covers_all_quadrants() {
        let mut seen = vec![SwotCategory::Strengths];
        let mut current = SwotCategory::Strengths;
        for _ in 0..3 {
            current = next_category(current);
            seen.push(current);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(next_category(current), SwotCategory::Strengths);
    }
}
