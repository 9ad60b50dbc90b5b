//! Survey board.

use serde::{Deserialize, Serialize};

use crate::types::{Contact, QuestionKind, Survey, SurveyQuestion, SurveyStatus};

/// Owning collection for the surveys page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyBoard {
    pub surveys: Vec<Survey>,
}

impl SurveyBoard {
    /// Sample surveys shipped with a fresh workspace.
    pub fn seeded() -> Self {
        Self {
            surveys: vec![
                Survey {
                    id: 1,
                    title: "Q1 Employee Engagement".to_string(),
                    audience: "Employees".to_string(),
                    status: SurveyStatus::Active,
                    questions: vec![
                        SurveyQuestion {
                            prompt: "How aligned do you feel with our strategic priorities?"
                                .to_string(),
                            kind: QuestionKind::Rating,
                            choices: Vec::new(),
                        },
                        SurveyQuestion {
                            prompt: "What should leadership focus on next quarter?".to_string(),
                            kind: QuestionKind::FreeText,
                            choices: Vec::new(),
                        },
                    ],
                    recipients: vec![
                        Contact {
                            name: "Mike Chen".to_string(),
                            email: "mike.chen@example.com".to_string(),
                            responded: true,
                        },
                        Contact {
                            name: "Lisa Rodriguez".to_string(),
                            email: "lisa.rodriguez@example.com".to_string(),
                            responded: true,
                        },
                        Contact {
                            name: "David Wilson".to_string(),
                            email: "david.wilson@example.com".to_string(),
                            responded: false,
                        },
                    ],
                    created_date: "2025-01-10".to_string(),
                },
                Survey {
                    id: 2,
                    title: "Customer Priorities 2025".to_string(),
                    audience: "Customers".to_string(),
                    status: SurveyStatus::Draft,
                    questions: vec![SurveyQuestion {
                        prompt: "Which improvement matters most to you?".to_string(),
                        kind: QuestionKind::MultipleChoice,
                        choices: vec![
                            "Faster support".to_string(),
                            "Lower pricing".to_string(),
                            "New features".to_string(),
                        ],
                    }],
                    recipients: Vec::new(),
                    created_date: "2025-02-02".to_string(),
                },
            ],
        }
    }

    /// Surveys currently accepting responses.
    pub fn active_count(&self) -> usize {
        self.surveys
            .iter()
            .filter(|s| s.status == SurveyStatus::Active)
            .count()
    }

    /// Overall response rate across all recipients of all surveys.
    pub fn overall_response_rate(&self) -> u16 {
        let recipients: usize = self.surveys.iter().map(|s| s.recipients.len()).sum();
        if recipients == 0 {
            return 0;
        }
        let responded: usize = self.surveys.iter().map(Survey::response_count).sum();
        ((responded * 100) / recipients) as u16
    }
}
