//! SWOT matrix board.

use serde::{Deserialize, Serialize};

use crate::types::{ImpactLevel, SwotCategory, SwotEntry};

/// Owning collection for the SWOT page. Entries are kept in one list and
/// grouped by category on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwotBoard {
    pub entries: Vec<SwotEntry>,
}

impl SwotBoard {
    /// Sample matrix shipped with a fresh workspace.
    pub fn seeded() -> Self {
        let seed = |id, category, text: &str, impact| SwotEntry {
            id,
            category,
            text: text.to_string(),
            impact,
            linked_objectives: Vec::new(),
            action_items: Vec::new(),
            created_date: "2025-01-15".to_string(),
        };

        let mut entries = vec![
            seed(
                1,
                SwotCategory::Strengths,
                "Strong brand recognition and customer loyalty",
                ImpactLevel::High,
            ),
            seed(
                2,
                SwotCategory::Strengths,
                "Experienced leadership team with industry expertise",
                ImpactLevel::High,
            ),
            seed(
                3,
                SwotCategory::Strengths,
                "Advanced technology infrastructure",
                ImpactLevel::Medium,
            ),
            seed(
                4,
                SwotCategory::Weaknesses,
                "Limited presence in emerging markets",
                ImpactLevel::High,
            ),
            seed(
                5,
                SwotCategory::Weaknesses,
                "Aging product portfolio in some segments",
                ImpactLevel::Medium,
            ),
            seed(
                6,
                SwotCategory::Opportunities,
                "Growing demand for sustainable solutions",
                ImpactLevel::High,
            ),
            seed(
                7,
                SwotCategory::Opportunities,
                "Digital transformation trends in target industries",
                ImpactLevel::High,
            ),
            seed(
                8,
                SwotCategory::Opportunities,
                "Potential strategic partnerships with tech companies",
                ImpactLevel::Medium,
            ),
            seed(
                9,
                SwotCategory::Threats,
                "Increasing competition from new market entrants",
                ImpactLevel::High,
            ),
            seed(
                10,
                SwotCategory::Threats,
                "Economic uncertainty affecting customer spending",
                ImpactLevel::Medium,
            ),
        ];

        entries[0].linked_objectives = vec![
            "Increase Revenue Growth".to_string(),
            "Enhance Customer Satisfaction".to_string(),
        ];
        entries[0].action_items = vec![
            "Leverage brand in new markets".to_string(),
            "Develop customer advocacy program".to_string(),
        ];

        Self { entries }
    }

    /// Add an entry to a quadrant and return its id.
    pub fn add(&mut self, category: SwotCategory, text: String, impact: ImpactLevel) -> u32 {
        let id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.entries.push(SwotEntry {
            id,
            category,
            text,
            impact,
            linked_objectives: Vec::new(),
            action_items: Vec::new(),
            created_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        });
        id
    }

    /// Remove an entry by id; returns whether it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries in one quadrant, in insertion order.
    pub fn in_category(&self, category: SwotCategory) -> Vec<&SwotEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// High-impact entry count, for the dashboard summary.
    pub fn high_impact_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.impact == ImpactLevel::High)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_all_quadrants() {
        let board = SwotBoard::seeded();
        for category in SwotCategory::all() {
            assert!(
                !board.in_category(*category).is_empty(),
                "empty quadrant {:?}",
                category
            );
        }
    }

    #[test]
    fn test_add_assigns_fresh_id_in_category() {
        let mut board = SwotBoard::seeded();
        let id = board.add(
            SwotCategory::Threats,
            "Regulatory tightening".to_string(),
            ImpactLevel::High,
        );
        assert_eq!(id, 11);
        assert_eq!(board.in_category(SwotCategory::Threats).len(), 3);
    }

    #[test]
    fn test_remove_only_touches_target() {
        let mut board = SwotBoard::seeded();
        assert!(board.remove(5));
        assert!(!board.remove(5));
        assert_eq!(board.entries.len(), 9);
    }
}
