//! End-to-end inline editing over real plan records: open a cell, change the
//! draft, commit, and check both the merge and the advisory outcome.

use chrono::NaiveDate;

use skore::engine::{AdvisoryEngine, EditSlot, Editable};
use skore::store::PlanBoard;
use skore::types::ActionField;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

#[test]
fn test_aggressive_target_commits_with_advisory() {
    let mut board = PlanBoard::seeded();
    let mut slot = EditSlot::new();
    let engine = AdvisoryEngine::with_default_rules();

    slot.open(
        1,
        ActionField::PerformanceTarget,
        board.items[0].get(ActionField::PerformanceTarget),
    );
    slot.set_pending("55% increase".to_string());
    let advisory = slot.commit(&mut board.items, &engine, today());

    // The warning is shown but the value lands anyway.
    assert!(advisory.is_some());
    assert_eq!(board.items[0].performance_target, "55% increase");
}

#[test]
fn test_moderate_target_commits_silently() {
    let mut board = PlanBoard::seeded();
    let mut slot = EditSlot::new();
    let engine = AdvisoryEngine::with_default_rules();

    slot.open(
        1,
        ActionField::PerformanceTarget,
        board.items[0].get(ActionField::PerformanceTarget),
    );
    slot.set_pending("20% increase".to_string());
    let advisory = slot.commit(&mut board.items, &engine, today());

    assert!(advisory.is_none());
    assert_eq!(board.items[0].performance_target, "20% increase");
}

#[test]
fn test_tight_due_date_flagged_far_date_not() {
    let mut board = PlanBoard::seeded();
    let mut slot = EditSlot::new();
    let engine = AdvisoryEngine::with_default_rules();

    slot.open(2, ActionField::DueDate, board.items[1].due_date.clone());
    slot.set_pending("2025-03-11".to_string()); // 10 days out
    assert!(slot.commit(&mut board.items, &engine, today()).is_some());
    assert_eq!(board.items[1].due_date, "2025-03-11");

    slot.open(2, ActionField::DueDate, board.items[1].due_date.clone());
    slot.set_pending("2025-04-30".to_string()); // 60 days out
    assert!(slot.commit(&mut board.items, &engine, today()).is_none());
    assert_eq!(board.items[1].due_date, "2025-04-30");
}

#[test]
fn test_cancel_leaves_the_board_untouched() {
    let mut board = PlanBoard::seeded();
    let mut slot = EditSlot::new();

    let original = board.items[0].lead.clone();
    slot.open(1, ActionField::Lead, original.clone());
    slot.set_pending("Somebody Else".to_string());
    slot.cancel();

    assert_eq!(board.items[0].lead, original);
    assert!(!slot.is_open());
}

#[test]
fn test_switching_cells_abandons_the_first_draft() {
    let mut board = PlanBoard::seeded();
    let mut slot = EditSlot::new();
    let engine = AdvisoryEngine::with_default_rules();

    slot.open(1, ActionField::Lead, board.items[0].lead.clone());
    slot.set_pending("Never merged".to_string());

    slot.open(2, ActionField::Lead, board.items[1].lead.clone());
    slot.set_pending("Priya Patel".to_string());
    slot.commit(&mut board.items, &engine, today());

    assert_eq!(board.items[0].lead, "Sarah Johnson");
    assert_eq!(board.items[1].lead, "Priya Patel");
}
