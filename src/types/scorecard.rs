//! Balanced scorecard objectives across the four classic perspectives.

use serde::{Deserialize, Serialize};

use crate::engine::{EditField, Editable};

/// Scorecard perspective an objective belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    #[default]
    Financial,
    Customer,
    InternalProcess,
    LearningGrowth,
}

impl Perspective {
    pub fn all() -> &'static [Perspective] {
        &[
            Perspective::Financial,
            Perspective::Customer,
            Perspective::InternalProcess,
            Perspective::LearningGrowth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Perspective::Financial => "Financial",
            Perspective::Customer => "Customer",
            Perspective::InternalProcess => "Internal Process",
            Perspective::LearningGrowth => "Learning & Growth",
        }
    }
}

/// Health of an objective against its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    #[default]
    OnTrack,
    AtRisk,
    Behind,
}

impl ObjectiveStatus {
    pub fn all() -> &'static [ObjectiveStatus] {
        &[
            ObjectiveStatus::OnTrack,
            ObjectiveStatus::AtRisk,
            ObjectiveStatus::Behind,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ObjectiveStatus::OnTrack => "On Track",
            ObjectiveStatus::AtRisk => "At Risk",
            ObjectiveStatus::Behind => "Behind",
        }
    }

    pub fn parse_label(label: &str) -> Option<ObjectiveStatus> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

/// One strategic objective with its measure, target, and initiative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Objective {
    pub id: u32,
    pub perspective: Perspective,
    pub title: String,
    pub measure: String,
    pub target: String,
    pub initiative: String,
    pub status: ObjectiveStatus,
    /// Percent complete, clamped to 0-100 on edit.
    pub progress: u8,
}

/// The fixed field set of an [`Objective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveField {
    Title,
    Measure,
    Target,
    Initiative,
    Status,
    Progress,
}

impl ObjectiveField {
    pub fn all() -> &'static [ObjectiveField] {
        &[
            ObjectiveField::Title,
            ObjectiveField::Measure,
            ObjectiveField::Target,
            ObjectiveField::Initiative,
            ObjectiveField::Status,
            ObjectiveField::Progress,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ObjectiveField::Title => "Objective",
            ObjectiveField::Measure => "Measure",
            ObjectiveField::Target => "Target",
            ObjectiveField::Initiative => "Initiative",
            ObjectiveField::Status => "Status",
            ObjectiveField::Progress => "Progress",
        }
    }

    pub fn options(&self) -> Option<Vec<&'static str>> {
        match self {
            ObjectiveField::Status => {
                Some(ObjectiveStatus::all().iter().map(|s| s.label()).collect())
            }
            _ => None,
        }
    }
}

impl EditField for ObjectiveField {
    fn name(self) -> &'static str {
        match self {
            ObjectiveField::Title => "title",
            ObjectiveField::Measure => "measure",
            ObjectiveField::Target => "target",
            ObjectiveField::Initiative => "initiative",
            ObjectiveField::Status => "status",
            ObjectiveField::Progress => "progress",
        }
    }
}

impl Editable for Objective {
    type Field = ObjectiveField;

    fn id(&self) -> u32 {
        self.id
    }

    fn get(&self, field: ObjectiveField) -> String {
        match field {
            ObjectiveField::Title => self.title.clone(),
            ObjectiveField::Measure => self.measure.clone(),
            ObjectiveField::Target => self.target.clone(),
            ObjectiveField::Initiative => self.initiative.clone(),
            ObjectiveField::Status => self.status.label().to_string(),
            ObjectiveField::Progress => self.progress.to_string(),
        }
    }

    fn set(&mut self, field: ObjectiveField, value: &str) {
        match field {
            ObjectiveField::Title => self.title = value.to_string(),
            ObjectiveField::Measure => self.measure = value.to_string(),
            ObjectiveField::Target => self.target = value.to_string(),
            ObjectiveField::Initiative => self.initiative = value.to_string(),
            ObjectiveField::Status => {
                if let Some(status) = ObjectiveStatus::parse_label(value) {
                    self.status = status;
                }
            }
            ObjectiveField::Progress => {
                if let Ok(progress) = value.trim().parse::<u32>() {
                    self.progress = progress.min(100) as u8;
                }
            }
        }
    }
}
