//! Derived metrics for the dashboard and reports views.

use crate::store::{PlanBoard, ScorecardBoard, SurveyBoard, SwotBoard};
use crate::types::{ActionStatus, ObjectiveStatus};

/// Point-in-time summary computed from the boards. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub objectives_total: usize,
    pub objectives_on_track: usize,
    pub objectives_at_risk: usize,
    pub objectives_behind: usize,
    pub average_progress: u8,
    pub actions_total: usize,
    pub actions_completed: usize,
    pub actions_off_track: usize,
    pub active_surveys: usize,
    pub survey_response_rate: u16,
    pub high_impact_swot: usize,
}

impl DashboardStats {
    pub fn compute(
        plan: &PlanBoard,
        scorecard: &ScorecardBoard,
        swot: &SwotBoard,
        surveys: &SurveyBoard,
    ) -> Self {
        let by_status = |status: ObjectiveStatus| {
            scorecard
                .objectives
                .iter()
                .filter(|o| o.status == status)
                .count()
        };

        Self {
            objectives_total: scorecard.objectives.len(),
            objectives_on_track: by_status(ObjectiveStatus::OnTrack),
            objectives_at_risk: by_status(ObjectiveStatus::AtRisk),
            objectives_behind: by_status(ObjectiveStatus::Behind),
            average_progress: scorecard.average_progress(),
            actions_total: plan.items.len(),
            actions_completed: plan
                .items
                .iter()
                .filter(|i| i.status == ActionStatus::Completed)
                .count(),
            actions_off_track: plan
                .items
                .iter()
                .filter(|i| i.status == ActionStatus::OffTrack)
                .count(),
            active_surveys: surveys.active_count(),
            survey_response_rate: surveys.overall_response_rate(),
            high_impact_swot: swot.high_impact_count(),
        }
    }

    /// Action completion as a percentage, 0 when the plan is empty.
    pub fn completion_percent(&self) -> u16 {
        if self.actions_total == 0 {
            return 0;
        }
        ((self.actions_completed * 100) / self.actions_total) as u16
    }
}
