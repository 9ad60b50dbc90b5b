//! Stakeholder surveys: questions, recipients, and response tracking.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Active,
    Closed,
}

impl SurveyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SurveyStatus::Draft => "Draft",
            SurveyStatus::Active => "Active",
            SurveyStatus::Closed => "Closed",
        }
    }
}

/// Question kinds supported by the survey builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    Rating,
    MultipleChoice,
    FreeText,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Rating => "Rating",
            QuestionKind::MultipleChoice => "Choice",
            QuestionKind::FreeText => "Text",
        }
    }
}

/// One survey question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub choices: Vec<String>,
}

/// A survey recipient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub responded: bool,
}

/// A survey sent to stakeholders to inform strategic priorities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Survey {
    pub id: u32,
    pub title: String,
    pub audience: String,
    pub status: SurveyStatus,
    pub questions: Vec<SurveyQuestion>,
    pub recipients: Vec<Contact>,
    pub created_date: String,
}

impl Survey {
    /// Number of recipients who have responded.
    pub fn response_count(&self) -> usize {
        self.recipients.iter().filter(|c| c.responded).count()
    }

    /// Response rate as a percentage of recipients, 0 when none invited.
    pub fn response_rate(&self) -> u16 {
        if self.recipients.is_empty() {
            return 0;
        }
        ((self.response_count() * 100) / self.recipients.len()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_rate() {
        let survey = Survey {
            recipients: vec![
                Contact {
                    responded: true,
                    ..Default::default()
                },
                Contact {
                    responded: false,
                    ..Default::default()
                },
                Contact {
                    responded: true,
                    ..Default::default()
                },
                Contact {
                    responded: false,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(survey.response_count(), 2);
        assert_eq!(survey.response_rate(), 50);
    }

    #[test]
    fn test_response_rate_with_no_recipients() {
        let survey = Survey::default();
        assert_eq!(survey.response_rate(), 0);
    }
}
