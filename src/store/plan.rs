//! Action plan board: owns the in-memory item list and its client-side
//! filtering.

use serde::{Deserialize, Serialize};

use crate::types::{ActionItem, ActionStatus, RiskLevel};

/// Filter state for the action plan grid. Empty/None facets match all.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub search: String,
    pub status: Option<ActionStatus>,
    pub risk: Option<RiskLevel>,
    pub priority: Option<String>,
}

impl PlanFilter {
    fn matches(&self, item: &ActionItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || item.goal_description.to_lowercase().contains(&needle)
            || item.strategic_priority.to_lowercase().contains(&needle)
            || item.lead.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|s| item.status == s);
        let matches_risk = self.risk.is_none_or(|r| item.risk == r);
        let matches_priority = self
            .priority
            .as_ref()
            .is_none_or(|p| &item.strategic_priority == p);
        matches_search && matches_status && matches_risk && matches_priority
    }
}

/// Owning collection for the action plan page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanBoard {
    pub items: Vec<ActionItem>,
}

impl PlanBoard {
    /// Sample plan shipped with a fresh workspace.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                ActionItem {
                    id: 1,
                    strategic_priority: "Revenue Growth".to_string(),
                    goal_description:
                        "Expand into 3 new geographical markets to increase revenue by 15%"
                            .to_string(),
                    action_steps:
                        "Conduct market research, establish partnerships, launch marketing campaigns"
                            .to_string(),
                    lead: "Sarah Johnson".to_string(),
                    contributors: "Mike Chen, Lisa Rodriguez".to_string(),
                    performance_target: "15% revenue increase".to_string(),
                    status: ActionStatus::OnTrack,
                    risk: RiskLevel::Medium,
                    start_date: "2025-01-15".to_string(),
                    due_date: "2025-06-30".to_string(),
                    date_completed: String::new(),
                },
                ActionItem {
                    id: 2,
                    strategic_priority: "Customer Experience".to_string(),
                    goal_description: "Improve customer satisfaction score to above 8.5/10"
                        .to_string(),
                    action_steps: "Implement new support system, train staff, gather feedback"
                        .to_string(),
                    lead: "Emma Davis".to_string(),
                    contributors: "David Wilson, Rachel Kim".to_string(),
                    performance_target: "NPS > 70".to_string(),
                    status: ActionStatus::Completed,
                    risk: RiskLevel::Low,
                    start_date: "2024-12-01".to_string(),
                    due_date: "2025-03-31".to_string(),
                    date_completed: "2025-01-20".to_string(),
                },
                ActionItem {
                    id: 3,
                    strategic_priority: "Digital Transformation".to_string(),
                    goal_description:
                        "Implement new CRM system to improve operational efficiency by 20%"
                            .to_string(),
                    action_steps:
                        "Vendor selection, system integration, staff training, data migration"
                            .to_string(),
                    lead: "Alex Thompson".to_string(),
                    contributors: "IT Team, Operations".to_string(),
                    performance_target: "20% efficiency gain".to_string(),
                    status: ActionStatus::OffTrack,
                    risk: RiskLevel::High,
                    start_date: "2025-01-01".to_string(),
                    due_date: "2025-04-30".to_string(),
                    date_completed: String::new(),
                },
                ActionItem {
                    id: 4,
                    strategic_priority: "Employee Development".to_string(),
                    goal_description: "Launch comprehensive leadership development program"
                        .to_string(),
                    action_steps:
                        "Design curriculum, select trainers, schedule sessions, track progress"
                            .to_string(),
                    lead: "Jennifer Lee".to_string(),
                    contributors: "HR Team, External Trainers".to_string(),
                    performance_target: "90% completion rate".to_string(),
                    status: ActionStatus::OnTrack,
                    risk: RiskLevel::Low,
                    start_date: "2025-02-01".to_string(),
                    due_date: "2025-08-31".to_string(),
                    date_completed: String::new(),
                },
                ActionItem {
                    id: 5,
                    strategic_priority: "Cost Optimization".to_string(),
                    goal_description: "Reduce operational costs by 12% through process improvements"
                        .to_string(),
                    action_steps: "Process audit, identify inefficiencies, implement automation"
                        .to_string(),
                    lead: "Michael Rodriguez".to_string(),
                    contributors: "Finance, Operations".to_string(),
                    performance_target: "12% cost reduction".to_string(),
                    status: ActionStatus::NotStarted,
                    risk: RiskLevel::Medium,
                    start_date: "2025-03-01".to_string(),
                    due_date: "2025-09-30".to_string(),
                    date_completed: String::new(),
                },
            ],
        }
    }

    /// Append a blank row and return its id.
    pub fn add_blank(&mut self) -> u32 {
        let id = self.next_id();
        self.items.push(ActionItem {
            id,
            ..Default::default()
        });
        id
    }

    /// Remove a row by id; returns whether it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Items passing the filter, in insertion order.
    pub fn filtered(&self, filter: &PlanFilter) -> Vec<&ActionItem> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Distinct strategic priorities, for the priority filter facet.
    pub fn priorities(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !item.strategic_priority.is_empty() && !seen.contains(&item.strategic_priority) {
                seen.push(item.strategic_priority.clone());
            }
        }
        seen
    }

    fn next_id(&self) -> u32 {
        self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }
}
