//! Action plan records: strategic goals broken into owned, dated work items.

use serde::{Deserialize, Serialize};

use crate::engine::{EditField, Editable};

/// Delivery status of an action item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    #[default]
    NotStarted,
    OnTrack,
    OffTrack,
    Completed,
}

impl ActionStatus {
    pub fn all() -> &'static [ActionStatus] {
        &[
            ActionStatus::NotStarted,
            ActionStatus::OnTrack,
            ActionStatus::OffTrack,
            ActionStatus::Completed,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "Not Started",
            ActionStatus::OnTrack => "On Track",
            ActionStatus::OffTrack => "Off Track",
            ActionStatus::Completed => "Completed",
        }
    }

    pub fn parse_label(label: &str) -> Option<ActionStatus> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

/// Risk rating of an action item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn all() -> &'static [RiskLevel] {
        &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn parse_label(label: &str) -> Option<RiskLevel> {
        Self::all().iter().copied().find(|r| r.label() == label)
    }
}

/// One row of the action plan grid.
///
/// Dates are kept as `YYYY-MM-DD` strings: they are edited as free text in
/// the grid and only the advisory rules interpret them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: u32,
    pub strategic_priority: String,
    pub goal_description: String,
    pub action_steps: String,
    pub lead: String,
    pub contributors: String,
    pub performance_target: String,
    pub status: ActionStatus,
    pub risk: RiskLevel,
    pub start_date: String,
    pub due_date: String,
    pub date_completed: String,
}

/// The fixed field set of an [`ActionItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionField {
    StrategicPriority,
    GoalDescription,
    ActionSteps,
    Lead,
    Contributors,
    PerformanceTarget,
    Status,
    Risk,
    StartDate,
    DueDate,
    DateCompleted,
}

impl ActionField {
    /// Grid column order.
    pub fn all() -> &'static [ActionField] {
        &[
            ActionField::StrategicPriority,
            ActionField::GoalDescription,
            ActionField::ActionSteps,
            ActionField::Lead,
            ActionField::Contributors,
            ActionField::PerformanceTarget,
            ActionField::Status,
            ActionField::Risk,
            ActionField::StartDate,
            ActionField::DueDate,
            ActionField::DateCompleted,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActionField::StrategicPriority => "Priority",
            ActionField::GoalDescription => "Goal",
            ActionField::ActionSteps => "Action Steps",
            ActionField::Lead => "Lead",
            ActionField::Contributors => "Contributors",
            ActionField::PerformanceTarget => "Target",
            ActionField::Status => "Status",
            ActionField::Risk => "Risk",
            ActionField::StartDate => "Start",
            ActionField::DueDate => "Due",
            ActionField::DateCompleted => "Completed",
        }
    }

    /// Enum-valued fields cycle through options instead of free text.
    pub fn options(&self) -> Option<Vec<&'static str>> {
        match self {
            ActionField::Status => Some(ActionStatus::all().iter().map(|s| s.label()).collect()),
            ActionField::Risk => Some(RiskLevel::all().iter().map(|r| r.label()).collect()),
            _ => None,
        }
    }
}

impl EditField for ActionField {
    fn name(self) -> &'static str {
        match self {
            ActionField::StrategicPriority => "strategic_priority",
            ActionField::GoalDescription => "goal_description",
            ActionField::ActionSteps => "action_steps",
            ActionField::Lead => "lead",
            ActionField::Contributors => "contributors",
            ActionField::PerformanceTarget => "performance_target",
            ActionField::Status => "status",
            ActionField::Risk => "risk",
            ActionField::StartDate => "start_date",
            ActionField::DueDate => "due_date",
            ActionField::DateCompleted => "date_completed",
        }
    }
}

impl Editable for ActionItem {
    type Field = ActionField;

    fn id(&self) -> u32 {
        self.id
    }

    fn get(&self, field: ActionField) -> String {
        match field {
            ActionField::StrategicPriority => self.strategic_priority.clone(),
            ActionField::GoalDescription => self.goal_description.clone(),
            ActionField::ActionSteps => self.action_steps.clone(),
            ActionField::Lead => self.lead.clone(),
            ActionField::Contributors => self.contributors.clone(),
            ActionField::PerformanceTarget => self.performance_target.clone(),
            ActionField::Status => self.status.label().to_string(),
            ActionField::Risk => self.risk.label().to_string(),
            ActionField::StartDate => self.start_date.clone(),
            ActionField::DueDate => self.due_date.clone(),
            ActionField::DateCompleted => self.date_completed.clone(),
        }
    }

    fn set(&mut self, field: ActionField, value: &str) {
        match field {
            ActionField::StrategicPriority => self.strategic_priority = value.to_string(),
            ActionField::GoalDescription => self.goal_description = value.to_string(),
            ActionField::ActionSteps => self.action_steps = value.to_string(),
            ActionField::Lead => self.lead = value.to_string(),
            ActionField::Contributors => self.contributors = value.to_string(),
            ActionField::PerformanceTarget => self.performance_target = value.to_string(),
            ActionField::Status => {
                if let Some(status) = ActionStatus::parse_label(value) {
                    self.status = status;
                }
            }
            ActionField::Risk => {
                if let Some(risk) = RiskLevel::parse_label(value) {
                    self.risk = risk;
                }
            }
            ActionField::StartDate => self.start_date = value.to_string(),
            ActionField::DueDate => self.due_date = value.to_string(),
            ActionField::DateCompleted => self.date_completed = value.to_string(),
        }
    }
}
