//! Interaction engine shared by the dashboard pages.
//!
//! Three small state machines recur across the app: a step sequencer for
//! gated multi-step flows, a single-focus edit slot for inline cell edits,
//! and a pure advisory rule engine consulted on commit.

pub mod advisory;
pub mod edit;
pub mod sequencer;

pub use advisory::{Advisory, AdvisoryEngine};
pub use edit::{EditField, EditSession, EditSlot, Editable};
pub use sequencer::{Advance, StepSequencer};
