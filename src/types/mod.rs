//! Domain record types.
//!
//! Each page owns one record type with a fixed field set: an enum of fields
//! plus an [`Editable`](crate::engine::Editable) impl wiring it into the
//! inline-edit machinery.

pub mod action;
pub mod profile;
pub mod scorecard;
pub mod survey;
pub mod swot;

pub use action::{ActionField, ActionItem, ActionStatus, RiskLevel};
pub use profile::{
    sub_industries_for, CoAdmin, OrgProfile, INDUSTRIES, LEADERSHIP_TITLES, ORG_SIZES, REGIONS,
};
pub use scorecard::{Objective, ObjectiveField, ObjectiveStatus, Perspective};
pub use survey::{Contact, QuestionKind, Survey, SurveyQuestion, SurveyStatus};
pub use swot::{ImpactLevel, SwotCategory, SwotEntry, SwotField};
