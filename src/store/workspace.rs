//! Workspace persistence.
//!
//! All boards plus the organization profile are saved as one JSON document
//! in the data directory. A missing file means a fresh workspace: seeded
//! boards and no profile, which sends the app through onboarding.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;
use crate::store::{PlanBoard, ScorecardBoard, SurveyBoard, SwotBoard};
use crate::types::OrgProfile;

/// Everything the dashboard owns between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub profile: Option<OrgProfile>,
    #[serde(default)]
    pub plan: PlanBoard,
    #[serde(default)]
    pub scorecard: ScorecardBoard,
    #[serde(default)]
    pub swot: SwotBoard,
    #[serde(default)]
    pub surveys: SurveyBoard,
}

impl Workspace {
    /// Fresh workspace with sample data and no profile.
    pub fn seeded() -> Self {
        Self {
            profile: None,
            plan: PlanBoard::seeded(),
            scorecard: ScorecardBoard::seeded(),
            swot: SwotBoard::seeded(),
            surveys: SurveyBoard::seeded(),
        }
    }

    /// Whether onboarding has been completed.
    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    /// Load the workspace file, or a seeded workspace if none exists.
    pub fn load(config: &Config) -> Result<Self> {
        Self::load_from(&config.workspace_file())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::seeded());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read workspace file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse workspace file {}", path.display()))
    }

    /// Save the workspace file, creating the data directory if needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        self.save_to(&config.workspace_file())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("Failed to serialize workspace")?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write workspace file {}", path.display()))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrgProfile;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_seeded_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workspace.json");
        let ws = Workspace::load_from(&path).unwrap();
        assert!(!ws.is_onboarded());
        assert_eq!(ws.plan.items.len(), 5);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("workspace.json");

        let mut ws = Workspace::seeded();
        ws.profile = Some(OrgProfile {
            industry: "Technology".to_string(),
            sub_industry: "SaaS".to_string(),
            ..Default::default()
        });
        ws.plan.add_blank();
        ws.save_to(&path).unwrap();

        let loaded = Workspace::load_from(&path).unwrap();
        assert!(loaded.is_onboarded());
        assert_eq!(loaded.plan.items.len(), 6);
        assert_eq!(loaded.profile.unwrap().industry, "Technology");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workspace.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Workspace::load_from(&path).is_err());
    }
}
