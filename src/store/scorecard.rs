//! Balanced scorecard board.

use serde::{Deserialize, Serialize};

use crate::types::{Objective, ObjectiveStatus, Perspective};

/// Filter state for the scorecard view.
#[derive(Debug, Clone, Default)]
pub struct ScorecardFilter {
    pub search: String,
    pub perspective: Option<Perspective>,
}

impl ScorecardFilter {
    fn matches(&self, obj: &Objective) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || obj.title.to_lowercase().contains(&needle)
            || obj.measure.to_lowercase().contains(&needle);
        let matches_perspective = self.perspective.is_none_or(|p| obj.perspective == p);
        matches_search && matches_perspective
    }
}

/// Owning collection for the scorecard page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardBoard {
    pub objectives: Vec<Objective>,
}

impl ScorecardBoard {
    /// Sample objectives shipped with a fresh workspace.
    pub fn seeded() -> Self {
        Self {
            objectives: vec![
                Objective {
                    id: 1,
                    perspective: Perspective::Financial,
                    title: "Increase Revenue Growth".to_string(),
                    measure: "Annual Revenue".to_string(),
                    target: "15% YoY Growth".to_string(),
                    initiative: "Expand into new markets".to_string(),
                    status: ObjectiveStatus::OnTrack,
                    progress: 85,
                },
                Objective {
                    id: 2,
                    perspective: Perspective::Financial,
                    title: "Improve Profit Margins".to_string(),
                    measure: "Net Profit Margin".to_string(),
                    target: "12% by Q4".to_string(),
                    initiative: "Cost optimization program".to_string(),
                    status: ObjectiveStatus::AtRisk,
                    progress: 65,
                },
                Objective {
                    id: 3,
                    perspective: Perspective::Customer,
                    title: "Enhance Customer Satisfaction".to_string(),
                    measure: "NPS Score".to_string(),
                    target: "NPS > 70".to_string(),
                    initiative: "Customer experience improvement".to_string(),
                    status: ObjectiveStatus::OnTrack,
                    progress: 78,
                },
                Objective {
                    id: 4,
                    perspective: Perspective::Customer,
                    title: "Reduce Customer Churn".to_string(),
                    measure: "Churn Rate".to_string(),
                    target: "< 5% monthly".to_string(),
                    initiative: "Customer success program".to_string(),
                    status: ObjectiveStatus::Behind,
                    progress: 45,
                },
                Objective {
                    id: 5,
                    perspective: Perspective::InternalProcess,
                    title: "Streamline Operations".to_string(),
                    measure: "Process Efficiency".to_string(),
                    target: "20% improvement".to_string(),
                    initiative: "Digital transformation".to_string(),
                    status: ObjectiveStatus::OnTrack,
                    progress: 72,
                },
                Objective {
                    id: 6,
                    perspective: Perspective::LearningGrowth,
                    title: "Grow Leadership Bench".to_string(),
                    measure: "Program Completion".to_string(),
                    target: "90% completion rate".to_string(),
                    initiative: "Leadership development program".to_string(),
                    status: ObjectiveStatus::OnTrack,
                    progress: 58,
                },
            ],
        }
    }

    /// Append a blank objective under `perspective` and return its id.
    pub fn add_blank(&mut self, perspective: Perspective) -> u32 {
        let id = self.objectives.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        self.objectives.push(Objective {
            id,
            perspective,
            ..Default::default()
        });
        id
    }

    /// Remove an objective by id; returns whether it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.objectives.len();
        self.objectives.retain(|o| o.id != id);
        self.objectives.len() != before
    }

    /// Objectives passing the filter, in insertion order.
    pub fn filtered(&self, filter: &ScorecardFilter) -> Vec<&Objective> {
        self.objectives
            .iter()
            .filter(|o| filter.matches(o))
            .collect()
    }

    /// Objective count per perspective, in canonical perspective order.
    pub fn counts_by_perspective(&self) -> Vec<(Perspective, usize)> {
        Perspective::all()
            .iter()
            .map(|p| {
                (
                    *p,
                    self.objectives.iter().filter(|o| o.perspective == *p).count(),
                )
            })
            .collect()
    }

    /// Mean progress across all objectives, 0 when empty.
    pub fn average_progress(&self) -> u8 {
        if self.objectives.is_empty() {
            return 0;
        }
        let total: u32 = self.objectives.iter().map(|o| u32::from(o.progress)).sum();
        (total / self.objectives.len() as u32) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_filter() {
        let board = ScorecardBoard::seeded();
        let filter = ScorecardFilter {
            perspective: Some(Perspective::Customer),
            ..Default::default()
        };
        assert_eq!(board.filtered(&filter).len(), 2);
    }

    #[test]
    fn test_search_matches_title_and_measure() {
        let board = ScorecardBoard::seeded();
        let filter = ScorecardFilter {
            search: "nps".to_string(),
            ..Default::default()
        };
        assert_eq!(board.filtered(&filter).len(), 1);
    }

    #[test]
    fn test_counts_cover_all_perspectives() {
        let board = ScorecardBoard::seeded();
        let counts = board.counts_by_perspective();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 6);
    }

    #[test]
    fn test_average_progress() {
        let board = ScorecardBoard::seeded();
        // (85 + 65 + 78 + 45 + 72 + 58) / 6 = 67
        assert_eq!(board.average_progress(), 67);
        assert_eq!(ScorecardBoard::default().average_progress(), 0);
    }
}
