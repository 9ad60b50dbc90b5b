//! In-memory boards, derived metrics, and workspace persistence.

pub mod plan;
pub mod reports;
pub mod scorecard;
pub mod surveys;
pub mod swot;
pub mod workspace;

pub use plan::{PlanBoard, PlanFilter};
pub use reports::DashboardStats;
pub use scorecard::{ScorecardBoard, ScorecardFilter};
pub use surveys::SurveyBoard;
pub use swot::SwotBoard;
pub use workspace::Workspace;
