//! Step sequencer for multi-step flows (onboarding wizard, guided tour).
//!
//! Owns an ordinal position in a fixed list of steps. Each step carries a
//! validity predicate over the flow's form state; forward navigation is
//! gated on the active step's predicate, backward navigation is free.

/// Outcome of an [`StepSequencer::advance`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward one step.
    Moved,
    /// Advanced past the last step: the flow is complete.
    Completed,
    /// The active step's predicate failed; position unchanged.
    Held,
}

/// Ordinal position over a fixed step list with per-step validity gates.
///
/// The position is always within `[0, step_count)`. Advancing from the last
/// step reports [`Advance::Completed`] without moving, so callers decide
/// what completion means (close the wizard, persist the form, etc.).
pub struct StepSequencer<S> {
    position: usize,
    validators: Vec<fn(&S) -> bool>,
}

impl<S> StepSequencer<S> {
    /// Create a sequencer from one validity predicate per step.
    ///
    /// Panics if `validators` is empty: a flow needs at least one step.
    pub fn new(validators: Vec<fn(&S) -> bool>) -> Self {
        assert!(!validators.is_empty(), "step list must be non-empty");
        Self {
            position: 0,
            validators,
        }
    }

    /// Current step index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.validators.len()
    }

    /// Whether the active step is the last one.
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.validators.len()
    }

    /// Whether the active step's predicate holds against `state`.
    pub fn can_advance(&self, state: &S) -> bool {
        (self.validators[self.position])(state)
    }

    /// Move forward one step if the active step validates, else hold.
    pub fn advance(&mut self, state: &S) -> Advance {
        if !self.can_advance(state) {
            return Advance::Held;
        }
        if self.is_last() {
            return Advance::Completed;
        }
        self.position += 1;
        Advance::Moved
    }

    /// Move back one step. No-op at position 0; returns whether we moved.
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Completion percentage for progress bars (1-based over the step count).
    pub fn progress_percent(&self) -> u16 {
        (((self.position + 1) * 100) / self.validators.len()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        name: String,
        email: String,
    }

    fn name_filled(f: &Form) -> bool {
        !f.name.is_empty()
    }

    fn email_filled(f: &Form) -> bool {
        !f.email.is_empty()
    }

    fn always(_: &Form) -> bool {
        true
    }

    fn sequencer() -> StepSequencer<Form> {
        StepSequencer::new(vec![name_filled, email_filled, always])
    }

    #[test]
    fn test_advance_gated_on_active_predicate() {
        let mut seq = sequencer();
        let mut form = Form {
            name: String::new(),
            email: String::new(),
        };

        assert!(!seq.can_advance(&form));
        assert_eq!(seq.advance(&form), Advance::Held);
        assert_eq!(seq.position(), 0);

        form.name = "Acme".to_string();
        assert!(seq.can_advance(&form));
        assert_eq!(seq.advance(&form), Advance::Moved);
        assert_eq!(seq.position(), 1);
    }

    #[test]
    fn test_last_step_advance_signals_completion() {
        let mut seq = sequencer();
        let form = Form {
            name: "Acme".to_string(),
            email: "a@acme.test".to_string(),
        };

        assert_eq!(seq.advance(&form), Advance::Moved);
        assert_eq!(seq.advance(&form), Advance::Moved);
        assert!(seq.is_last());

        // Completion is a terminal signal, not a position change.
        assert_eq!(seq.advance(&form), Advance::Completed);
        assert_eq!(seq.position(), 2);
    }

    #[test]
    fn test_retreat_unconditional_except_at_start() {
        let mut seq = sequencer();
        let form = Form {
            name: "Acme".to_string(),
            email: String::new(),
        };

        assert!(!seq.retreat());
        seq.advance(&form);
        assert_eq!(seq.position(), 1);

        // Retreat works even though the current step would not validate.
        assert!(seq.retreat());
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn test_progress_percent() {
        let mut seq = sequencer();
        let form = Form {
            name: "Acme".to_string(),
            email: "a@acme.test".to_string(),
        };

        assert_eq!(seq.progress_percent(), 33);
        seq.advance(&form);
        assert_eq!(seq.progress_percent(), 66);
        seq.advance(&form);
        assert_eq!(seq.progress_percent(), 100);
    }
}
