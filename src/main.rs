use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod app;
mod assistant;
mod backend;
mod config;
mod engine;
mod logging;
mod store;
mod types;
mod ui;

use app::App;
use config::Config;
use store::{DashboardStats, PlanFilter, Workspace};
use types::Perspective;

#[derive(Parser)]
#[command(name = "skore")]
#[command(about = "Strategy performance dashboard: scorecards, SWOT, action plans, surveys")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show action plan status
    Plan {
        /// Show every item, not just the summary
        #[arg(short, long)]
        all: bool,
    },

    /// Show the balanced scorecard
    Scorecard {
        /// Limit to one perspective (financial, customer, internal, learning)
        #[arg(short, long)]
        perspective: Option<String>,
    },

    /// Show the SWOT matrix
    Swot,

    /// Show survey status
    Surveys,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Plan { all }) => cmd_plan(&config, all)?,
        Some(Commands::Scorecard { perspective }) => cmd_scorecard(&config, perspective)?,
        Some(Commands::Swot) => cmd_swot(&config)?,
        Some(Commands::Surveys) => cmd_surveys(&config)?,
        None => run_tui(config, logging_handle.log_file_path).await?,
    }

    Ok(())
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config)?;
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}

fn cmd_plan(config: &Config, all: bool) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let board = &workspace.plan;

    let stats = DashboardStats::compute(
        board,
        &workspace.scorecard,
        &workspace.swot,
        &workspace.surveys,
    );
    println!(
        "Action plan: {} items, {} completed ({}%), {} off track",
        stats.actions_total,
        stats.actions_completed,
        stats.completion_percent(),
        stats.actions_off_track
    );

    if all {
        println!();
        for item in board.filtered(&PlanFilter::default()) {
            println!(
                "  #{:<3} [{:^11}] {} (lead: {}, due: {})",
                item.id,
                item.status.label(),
                item.goal_description,
                item.lead,
                item.due_date
            );
        }
    }

    Ok(())
}

fn cmd_scorecard(config: &Config, perspective: Option<String>) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let board = &workspace.scorecard;

    let wanted = match perspective.as_deref() {
        None => None,
        Some("financial") => Some(Perspective::Financial),
        Some("customer") => Some(Perspective::Customer),
        Some("internal") => Some(Perspective::InternalProcess),
        Some("learning") => Some(Perspective::LearningGrowth),
        Some(other) => {
            anyhow::bail!(
                "unknown perspective '{}'; expected financial, customer, internal, or learning",
                other
            );
        }
    };

    for (p, count) in board.counts_by_perspective() {
        if wanted.is_some_and(|w| w != p) {
            continue;
        }
        println!("{} ({} objectives)", p.label(), count);
        for obj in board.objectives.iter().filter(|o| o.perspective == p) {
            println!(
                "  [{:^8}] {:>3}%  {} ({})",
                obj.status.label(),
                obj.progress,
                obj.title,
                obj.target
            );
        }
    }
    println!("Average progress: {}%", board.average_progress());

    Ok(())
}

fn cmd_swot(config: &Config) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let board = &workspace.swot;

    for category in types::SwotCategory::all() {
        let entries = board.in_category(*category);
        println!("{} ({})", category.label(), entries.len());
        for entry in entries {
            println!("  [{:^6}] {}", entry.impact.label(), entry.text);
        }
    }

    Ok(())
}

fn cmd_surveys(config: &Config) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let board = &workspace.surveys;

    println!(
        "Surveys: {} total, {} active, {}% overall response rate",
        board.surveys.len(),
        board.active_count(),
        board.overall_response_rate()
    );
    for survey in &board.surveys {
        println!(
            "  [{:^6}] {} ({}/{} responded)",
            survey.status.label(),
            survey.title,
            survey.response_count(),
            survey.recipients.len()
        );
    }

    Ok(())
}
