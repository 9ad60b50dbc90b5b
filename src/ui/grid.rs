//! Spreadsheet-style grid state shared by the scorecard, plan, and SWOT views.
//!
//! A grid owns a cursor over visible rows and columns plus the single edit
//! slot for its record type. Key handling is table-agnostic; views supply
//! the filtered record list each frame.

use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::engine::{Advisory, AdvisoryEngine, EditField, EditSlot, Editable};

/// Column metadata the grid needs beyond the field identity.
pub trait GridField: EditField + 'static {
    /// Column order for this record type.
    fn columns() -> &'static [Self];
    /// Column header.
    fn title(self) -> &'static str;
    /// Fixed choice list for enum-backed fields, `None` for free text.
    fn options(self) -> Option<Vec<&'static str>>;
}

/// What a key press did, so the app can react (toast, redraw, beep).
#[derive(Debug, PartialEq, Eq)]
pub enum GridOutcome {
    /// Key was not handled by the grid.
    Ignored,
    /// Cursor moved or draft changed.
    Changed,
    /// An edit session was committed; advisory attached if one fired.
    Committed(Option<Advisory>),
    /// The open session was discarded.
    Cancelled,
}

pub struct GridState<F: GridField> {
    pub row: usize,
    pub col: usize,
    pub slot: EditSlot<F>,
}

impl<F: GridField> GridState<F> {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            slot: EditSlot::new(),
        }
    }

    pub fn current_field(&self) -> F {
        F::columns()[self.col]
    }

    /// Keep the cursor inside a table that may have shrunk.
    pub fn clamp_row(&mut self, row_count: usize) {
        if row_count == 0 {
            self.row = 0;
        } else if self.row >= row_count {
            self.row = row_count - 1;
        }
    }

    fn move_cursor(&mut self, code: KeyCode, row_count: usize) -> bool {
        match code {
            KeyCode::Up => {
                if self.row > 0 {
                    self.row -= 1;
                }
                true
            }
            KeyCode::Down => {
                if row_count > 0 && self.row < row_count - 1 {
                    self.row += 1;
                }
                true
            }
            KeyCode::Left => {
                if self.col > 0 {
                    self.col -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.col < F::columns().len() - 1 {
                    self.col += 1;
                }
                true
            }
            _ => false,
        }
    }

    /// Cycle the draft of an option-backed field to the adjacent choice.
    fn cycle_option(&mut self, forward: bool) {
        let Some(session) = self.slot.session() else {
            return;
        };
        let Some(options) = session.field.options() else {
            return;
        };
        let current = options
            .iter()
            .position(|o| *o == session.pending)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.slot.set_pending(options[next].to_string());
    }

    /// Drive the grid with one key press over the currently visible records.
    ///
    /// `visible_ids` must be in display order; `records` is the owning
    /// collection the commit merges into.
    pub fn handle_key<R>(
        &mut self,
        code: KeyCode,
        visible_ids: &[u32],
        records: &mut [R],
        engine: &AdvisoryEngine,
        today: NaiveDate,
    ) -> GridOutcome
    where
        R: Editable<Field = F>,
    {
        self.clamp_row(visible_ids.len());

        if self.slot.is_open() {
            return match code {
                KeyCode::Enter => {
                    GridOutcome::Committed(self.slot.commit(records, engine, today))
                }
                KeyCode::Esc => {
                    self.slot.cancel();
                    GridOutcome::Cancelled
                }
                KeyCode::Backspace => {
                    self.slot.pop_char();
                    GridOutcome::Changed
                }
                KeyCode::Up | KeyCode::Down
                    if self.current_field().options().is_some() =>
                {
                    self.cycle_option(code == KeyCode::Down);
                    GridOutcome::Changed
                }
                KeyCode::Char(c) if self.current_field().options().is_none() => {
                    self.slot.push_char(c);
                    GridOutcome::Changed
                }
                _ => GridOutcome::Ignored,
            };
        }

        match code {
            KeyCode::Enter => {
                let Some(&id) = visible_ids.get(self.row) else {
                    return GridOutcome::Ignored;
                };
                let field = self.current_field();
                let Some(record) = records.iter().find(|r| r.id() == id) else {
                    return GridOutcome::Ignored;
                };
                self.slot.open(id, field, record.get(field));
                GridOutcome::Changed
            }
            _ if self.move_cursor(code, visible_ids.len()) => GridOutcome::Changed,
            _ => GridOutcome::Ignored,
        }
    }
}

impl<F: GridField> Default for GridState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl GridField for crate::types::ActionField {
    fn columns() -> &'static [Self] {
        Self::all()
    }
    fn title(self) -> &'static str {
        Self::title(&self)
    }
    fn options(self) -> Option<Vec<&'static str>> {
        Self::options(&self)
    }
}

impl GridField for crate::types::ObjectiveField {
    fn columns() -> &'static [Self] {
        Self::all()
    }
    fn title(self) -> &'static str {
        Self::title(&self)
    }
    fn options(self) -> Option<Vec<&'static str>> {
        Self::options(&self)
    }
}

impl GridField for crate::types::SwotField {
    fn columns() -> &'static [Self] {
        Self::all()
    }
    fn title(self) -> &'static str {
        Self::title(&self)
    }
    fn options(self) -> Option<Vec<&'static str>> {
        Self::options(&self)
    }
}
