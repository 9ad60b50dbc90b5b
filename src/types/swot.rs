//! SWOT analysis entries grouped into the four quadrants.

use serde::{Deserialize, Serialize};

use crate::engine::{EditField, Editable};

/// Quadrant of the SWOT matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwotCategory {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotCategory {
    pub fn all() -> &'static [SwotCategory] {
        &[
            SwotCategory::Strengths,
            SwotCategory::Weaknesses,
            SwotCategory::Opportunities,
            SwotCategory::Threats,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwotCategory::Strengths => "Strengths",
            SwotCategory::Weaknesses => "Weaknesses",
            SwotCategory::Opportunities => "Opportunities",
            SwotCategory::Threats => "Threats",
        }
    }
}

/// Estimated strategic impact of one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn all() -> &'static [ImpactLevel] {
        &[ImpactLevel::High, ImpactLevel::Medium, ImpactLevel::Low]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::High => "High",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::Low => "Low",
        }
    }

    pub fn parse_label(label: &str) -> Option<ImpactLevel> {
        Self::all().iter().copied().find(|i| i.label() == label)
    }
}

/// One SWOT entry, optionally linked to scorecard objectives and follow-ups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwotEntry {
    pub id: u32,
    pub category: SwotCategory,
    pub text: String,
    pub impact: ImpactLevel,
    pub linked_objectives: Vec<String>,
    pub action_items: Vec<String>,
    pub created_date: String,
}

/// The inline-editable fields of a [`SwotEntry`]. Links are managed through
/// dedicated add/remove actions, not free-text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwotField {
    Text,
    Impact,
}

impl SwotField {
    pub fn all() -> &'static [SwotField] {
        &[SwotField::Text, SwotField::Impact]
    }

    pub fn title(&self) -> &'static str {
        match self {
            SwotField::Text => "Entry",
            SwotField::Impact => "Impact",
        }
    }

    pub fn options(&self) -> Option<Vec<&'static str>> {
        match self {
            SwotField::Impact => Some(ImpactLevel::all().iter().map(|i| i.label()).collect()),
            SwotField::Text => None,
        }
    }
}

impl EditField for SwotField {
    fn name(self) -> &'static str {
        match self {
            SwotField::Text => "text",
            SwotField::Impact => "impact",
        }
    }
}

impl Editable for SwotEntry {
    type Field = SwotField;

    fn id(&self) -> u32 {
        self.id
    }

    fn get(&self, field: SwotField) -> String {
        match field {
            SwotField::Text => self.text.clone(),
            SwotField::Impact => self.impact.label().to_string(),
        }
    }

    fn set(&mut self, field: SwotField, value: &str) {
        match field {
            SwotField::Text => self.text = value.to_string(),
            SwotField::Impact => {
                if let Some(impact) = ImpactLevel::parse_label(value) {
                    self.impact = impact;
                }
            }
        }
    }
}
