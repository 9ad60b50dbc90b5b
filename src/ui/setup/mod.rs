//! Onboarding wizard shown on first run, before a profile exists.
//!
//! Step order and validity gates live in the step sequencer; this type owns
//! the form state, list cursors, and text inputs the steps render with.

use ratatui::{widgets::ListState, Frame};

use crate::assistant::tip_for_step;
use crate::engine::{Advance, StepSequencer};
use crate::types::{
    sub_industries_for, CoAdmin, OrgProfile, INDUSTRIES, LEADERSHIP_TITLES, ORG_SIZES, REGIONS,
};

pub mod steps;
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;

fn industry_valid(p: &OrgProfile) -> bool {
    p.industry_complete()
}

fn leadership_valid(p: &OrgProfile) -> bool {
    p.leadership_complete()
}

fn always_valid(_: &OrgProfile) -> bool {
    true
}

/// The onboarding wizard: profile form plus per-step cursor state.
pub struct ProfileWizard {
    pub profile: OrgProfile,
    pub(crate) sequencer: StepSequencer<OrgProfile>,
    // Industry step
    pub industry_focus: IndustryFocus,
    pub(crate) industry_state: ListState,
    pub(crate) sub_industry_state: ListState,
    // Leadership step
    pub leadership_focus: LeadershipFocus,
    pub(crate) title_state: ListState,
    pub(crate) size_state: ListState,
    pub(crate) region_state: ListState,
    // Co-admin step
    pub coadmin_focus: CoAdminFocus,
    pub coadmin_draft: CoAdmin,
    pub coadmin_error: Option<String>,
}

impl ProfileWizard {
    pub fn new() -> Self {
        let mut industry_state = ListState::default();
        industry_state.select(Some(0));

        Self {
            profile: OrgProfile::default(),
            sequencer: StepSequencer::new(vec![
                industry_valid,
                leadership_valid,
                always_valid,
                always_valid,
            ]),
            industry_focus: IndustryFocus::Industry,
            industry_state,
            sub_industry_state: ListState::default(),
            leadership_focus: LeadershipFocus::Title,
            title_state: ListState::default(),
            size_state: ListState::default(),
            region_state: ListState::default(),
            coadmin_focus: CoAdminFocus::Name,
            coadmin_draft: CoAdmin::default(),
            coadmin_error: None,
        }
    }

    /// Active step.
    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.sequencer.position())
    }

    pub fn progress_percent(&self) -> u16 {
        self.sequencer.progress_percent()
    }

    /// Whether the active step allows moving forward.
    pub fn can_advance(&self) -> bool {
        self.sequencer.can_advance(&self.profile)
    }

    /// Assistant tip shown next to the active step.
    pub fn tip(&self) -> &'static str {
        tip_for_step(self.sequencer.position())
    }

    /// Proceed to the next step (Enter). Finishing hands the profile back.
    pub fn confirm(&mut self) -> WizardResult {
        match self.sequencer.advance(&self.profile) {
            Advance::Completed => WizardResult::Finished,
            Advance::Moved | Advance::Held => WizardResult::Continue,
        }
    }

    /// Go back one step (Esc). Backing out of the first step cancels.
    pub fn go_back(&mut self) -> WizardResult {
        if self.sequencer.retreat() {
            WizardResult::Continue
        } else {
            WizardResult::Cancelled
        }
    }

    /// Switch focus within the active step (Tab).
    pub fn cycle_focus(&mut self) {
        match self.step() {
            WizardStep::Industry => {
                self.industry_focus = match self.industry_focus {
                    IndustryFocus::Industry => IndustryFocus::SubIndustry,
                    IndustryFocus::SubIndustry => IndustryFocus::Industry,
                };
            }
            WizardStep::Leadership => {
                self.leadership_focus = match self.leadership_focus {
                    LeadershipFocus::Title => LeadershipFocus::OrgSize,
                    LeadershipFocus::OrgSize => LeadershipFocus::Region,
                    LeadershipFocus::Region => LeadershipFocus::Title,
                };
            }
            WizardStep::CoAdmins => {
                self.coadmin_focus = match self.coadmin_focus {
                    CoAdminFocus::Name => CoAdminFocus::Email,
                    CoAdminFocus::Email => CoAdminFocus::Title,
                    CoAdminFocus::Title => CoAdminFocus::Name,
                };
            }
            WizardStep::Branding => {}
        }
    }

    fn step_list(state: &mut ListState, len: usize, forward: bool) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = state.selected().map_or(0, |i| {
            if forward {
                (i + 1) % len
            } else if i == 0 {
                len - 1
            } else {
                i - 1
            }
        });
        state.select(Some(i));
        Some(i)
    }

    /// Move the focused list selection and apply it to the profile.
    pub fn select(&mut self, forward: bool) {
        match self.step() {
            WizardStep::Industry => match self.industry_focus {
                IndustryFocus::Industry => {
                    if let Some(i) =
                        Self::step_list(&mut self.industry_state, INDUSTRIES.len(), forward)
                    {
                        self.profile.set_industry(INDUSTRIES[i]);
                        self.sub_industry_state.select(None);
                    }
                }
                IndustryFocus::SubIndustry => {
                    let subs = sub_industries_for(&self.profile.industry);
                    if let Some(i) =
                        Self::step_list(&mut self.sub_industry_state, subs.len(), forward)
                    {
                        self.profile.sub_industry = subs[i].to_string();
                    }
                }
            },
            WizardStep::Leadership => match self.leadership_focus {
                LeadershipFocus::Title => {
                    if let Some(i) =
                        Self::step_list(&mut self.title_state, LEADERSHIP_TITLES.len(), forward)
                    {
                        self.profile.leadership_title = LEADERSHIP_TITLES[i].to_string();
                    }
                }
                LeadershipFocus::OrgSize => {
                    if let Some(i) = Self::step_list(&mut self.size_state, ORG_SIZES.len(), forward)
                    {
                        self.profile.org_size = ORG_SIZES[i].to_string();
                    }
                }
                LeadershipFocus::Region => {
                    if let Some(i) =
                        Self::step_list(&mut self.region_state, REGIONS.len(), forward)
                    {
                        self.profile.region = REGIONS[i].to_string();
                    }
                }
            },
            WizardStep::Branding | WizardStep::CoAdmins => {}
        }
    }

    /// Type into the focused text input (branding or co-admin steps).
    pub fn input_char(&mut self, c: char) {
        match self.step() {
            WizardStep::Branding => self.profile.logo_path.push(c),
            WizardStep::CoAdmins => {
                self.coadmin_error = None;
                match self.coadmin_focus {
                    CoAdminFocus::Name => self.coadmin_draft.name.push(c),
                    CoAdminFocus::Email => self.coadmin_draft.email.push(c),
                    CoAdminFocus::Title => self.coadmin_draft.title.push(c),
                }
            }
            _ => {}
        }
    }

    pub fn input_backspace(&mut self) {
        match self.step() {
            WizardStep::Branding => {
                self.profile.logo_path.pop();
            }
            WizardStep::CoAdmins => match self.coadmin_focus {
                CoAdminFocus::Name => {
                    self.coadmin_draft.name.pop();
                }
                CoAdminFocus::Email => {
                    self.coadmin_draft.email.pop();
                }
                CoAdminFocus::Title => {
                    self.coadmin_draft.title.pop();
                }
            },
            _ => {}
        }
    }

    /// Add the drafted co-admin to the profile. Name and a plausible email
    /// are required; the title is optional.
    pub fn add_coadmin(&mut self) {
        let draft = &self.coadmin_draft;
        if draft.name.trim().is_empty() {
            self.coadmin_error = Some("Name is required".to_string());
            return;
        }
        if !draft.email.contains('@') || draft.email.trim().len() < 3 {
            self.coadmin_error = Some("Enter a valid email address".to_string());
            return;
        }
        self.profile.co_admins.push(CoAdmin {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            title: draft.title.trim().to_string(),
        });
        self.coadmin_draft = CoAdmin::default();
        self.coadmin_focus = CoAdminFocus::Name;
        self.coadmin_error = None;
    }

    pub fn remove_last_coadmin(&mut self) {
        self.profile.co_admins.pop();
    }

    /// Render the active step.
    pub fn render(&mut self, frame: &mut Frame) {
        match self.step() {
            WizardStep::Industry => self.render_industry_step(frame),
            WizardStep::Leadership => self.render_leadership_step(frame),
            WizardStep::Branding => self.render_branding_step(frame),
            WizardStep::CoAdmins => self.render_coadmins_step(frame),
        }
    }
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}
