//! Onboarding wizard step metadata and navigation results.

/// The four profile steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Industry,
    Leadership,
    Branding,
    CoAdmins,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Industry,
            WizardStep::Leadership,
            WizardStep::Branding,
            WizardStep::CoAdmins,
        ]
    }

    pub fn from_index(index: usize) -> WizardStep {
        Self::all()[index]
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Industry => "Industry",
            WizardStep::Leadership => "Your Role",
            WizardStep::Branding => "Branding",
            WizardStep::CoAdmins => "Co-Admins",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            WizardStep::Industry => "Pick your industry, then a sub-industry",
            WizardStep::Leadership => "Tell us about your role and organization",
            WizardStep::Branding => "Optional: point us at your logo",
            WizardStep::CoAdmins => "Optional: invite co-administrators",
        }
    }
}

/// Outcome of a wizard key press the app must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardResult {
    Continue,
    /// Final step confirmed with a valid profile.
    Finished,
    /// Backed out of the first step.
    Cancelled,
}

/// Which list has focus on the industry step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryFocus {
    Industry,
    SubIndustry,
}

/// Which list has focus on the leadership step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipFocus {
    Title,
    OrgSize,
    Region,
}

/// Which input has focus on the co-admin step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoAdminFocus {
    Name,
    Email,
    Title,
}
