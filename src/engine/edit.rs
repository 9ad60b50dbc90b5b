//! Single-focus inline edit sessions.
//!
//! One cell of one record may be open for editing at a time. The slot holds
//! the pending draft; commit merges it into the owning collection and runs
//! the advisory rules, cancel discards it. Opening a new session replaces
//! whatever was open without merging its draft.

use chrono::NaiveDate;

use super::advisory::{Advisory, AdvisoryEngine};

/// Identifier scheme for an editable record's fields.
///
/// Each record type declares its field set as an enum, fixing the shape at
/// compile time instead of treating records as key-value bags.
pub trait EditField: Copy + Eq + std::fmt::Debug {
    /// Stable snake_case name, used by the advisory rules.
    fn name(self) -> &'static str;
}

/// A record whose fields can be edited inline as strings.
pub trait Editable {
    type Field: EditField;

    fn id(&self) -> u32;
    fn get(&self, field: Self::Field) -> String;
    fn set(&mut self, field: Self::Field, value: &str);
}

/// Transient state for one open edit: which cell, and the draft value.
#[derive(Debug, Clone)]
pub struct EditSession<F: EditField> {
    pub record_id: u32,
    pub field: F,
    pub pending: String,
}

/// Holder enforcing the at-most-one-session invariant by construction.
#[derive(Debug)]
pub struct EditSlot<F: EditField> {
    session: Option<EditSession<F>>,
}

impl<F: EditField> EditSlot<F> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Open a session on `(record_id, field)`, seeded with the current cell
    /// value. Any prior session is dropped without merging.
    pub fn open(&mut self, record_id: u32, field: F, current_value: String) {
        self.session = Some(EditSession {
            record_id,
            field,
            pending: current_value,
        });
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether this exact cell is the one being edited.
    pub fn is_editing(&self, record_id: u32, field: F) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.record_id == record_id && s.field == field)
    }

    pub fn session(&self) -> Option<&EditSession<F>> {
        self.session.as_ref()
    }

    /// Replace the draft value.
    pub fn set_pending(&mut self, value: String) {
        if let Some(session) = self.session.as_mut() {
            session.pending = value;
        }
    }

    /// Append a character to the draft.
    pub fn push_char(&mut self, c: char) {
        if let Some(session) = self.session.as_mut() {
            session.pending.push(c);
        }
    }

    /// Remove the last character of the draft.
    pub fn pop_char(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.pending.pop();
        }
    }

    /// Merge the pending value into the record and close the session.
    ///
    /// The advisory engine is consulted with the committed `(field, value)`
    /// pair; a match is returned for display but never blocks the merge.
    /// Returns `None` with no merge if no session is open or the record is
    /// no longer in `records`.
    pub fn commit<R>(
        &mut self,
        records: &mut [R],
        engine: &AdvisoryEngine,
        today: NaiveDate,
    ) -> Option<Advisory>
    where
        R: Editable<Field = F>,
    {
        let session = self.session.take()?;
        let record = records.iter_mut().find(|r| r.id() == session.record_id)?;
        let advisory = engine.evaluate(session.field.name(), &session.pending, today);
        record.set(session.field, &session.pending);
        advisory
    }

    /// Discard the draft and close the session. The record is untouched.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

impl<F: EditField> Default for EditSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NoteField {
        Title,
        DueDate,
    }

    impl EditField for NoteField {
        fn name(self) -> &'static str {
            match self {
                NoteField::Title => "title",
                NoteField::DueDate => "due_date",
            }
        }
    }

    struct Note {
        id: u32,
        title: String,
        due_date: String,
    }

    impl Editable for Note {
        type Field = NoteField;

        fn id(&self) -> u32 {
            self.id
        }

        fn get(&self, field: NoteField) -> String {
            match field {
                NoteField::Title => self.title.clone(),
                NoteField::DueDate => self.due_date.clone(),
            }
        }

        fn set(&mut self, field: NoteField, value: &str) {
            match field {
                NoteField::Title => self.title = value.to_string(),
                NoteField::DueDate => self.due_date = value.to_string(),
            }
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                id: 1,
                title: "Quarterly review".to_string(),
                due_date: "2025-06-30".to_string(),
            },
            Note {
                id: 2,
                title: "Board deck".to_string(),
                due_date: "2025-04-15".to_string(),
            },
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_commit_merges_exactly_the_pending_value() {
        let mut records = notes();
        let mut slot = EditSlot::new();
        let engine = AdvisoryEngine::with_default_rules();

        slot.open(1, NoteField::Title, records[0].get(NoteField::Title));
        slot.set_pending("Annual review".to_string());
        slot.commit(&mut records, &engine, today());

        assert_eq!(records[0].title, "Annual review");
        assert!(!slot.is_open());
    }

    #[test]
    fn test_cancel_never_mutates() {
        let mut records = notes();
        let mut slot = EditSlot::new();

        slot.open(2, NoteField::Title, records[1].get(NoteField::Title));
        slot.set_pending("Scratch".to_string());
        slot.cancel();

        assert_eq!(records[1].title, "Board deck");
        assert!(!slot.is_open());
    }

    #[test]
    fn test_open_replaces_prior_session_without_merging() {
        let mut records = notes();
        let mut slot = EditSlot::new();
        let engine = AdvisoryEngine::with_default_rules();

        slot.open(1, NoteField::Title, records[0].get(NoteField::Title));
        slot.set_pending("Should be discarded".to_string());

        // Opening a second session drops the first draft.
        slot.open(2, NoteField::Title, records[1].get(NoteField::Title));
        assert!(slot.is_editing(2, NoteField::Title));
        assert!(!slot.is_editing(1, NoteField::Title));

        slot.commit(&mut records, &engine, today());
        assert_eq!(records[0].title, "Quarterly review");
    }

    #[test]
    fn test_commit_returns_advisory_but_still_merges() {
        let mut records = notes();
        let mut slot = EditSlot::new();
        let engine = AdvisoryEngine::with_default_rules();

        slot.open(1, NoteField::DueDate, records[0].get(NoteField::DueDate));
        slot.set_pending("2025-03-10".to_string());
        let advisory = slot.commit(&mut records, &engine, today());

        assert!(advisory.is_some());
        assert_eq!(records[0].due_date, "2025-03-10");
    }

    #[test]
    fn test_commit_on_missing_record_closes_without_merge() {
        let mut records = notes();
        let mut slot = EditSlot::new();
        let engine = AdvisoryEngine::with_default_rules();

        slot.open(99, NoteField::Title, String::new());
        slot.set_pending("Orphan".to_string());
        assert!(slot.commit(&mut records, &engine, today()).is_none());
        assert!(!slot.is_open());
        assert_eq!(records[0].title, "Quarterly review");
        assert_eq!(records[1].title, "Board deck");
    }
}
