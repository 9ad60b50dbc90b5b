pub mod admin;
pub mod assistant;
pub mod dashboard;
pub mod grid;
mod panels;
pub mod setup;
pub mod tutorial;

pub use admin::{AdminAction, AdminEvent, AdminPanel};
pub use assistant::ChatPanel;
pub use dashboard::View;
pub use grid::{GridOutcome, GridState};
pub use panels::{centered_rect, render_grid_table, render_stat_card, render_toast, HeaderBar};
pub use setup::ProfileWizard;
pub use tutorial::{GuidedTour, TourResult};
