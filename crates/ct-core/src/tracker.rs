//! Owns the store, the entry form and the current summary, and keeps the
//! three consistent.
//!
//! Every dispatched action runs the same sequence exactly once: reduce the
//! state, recompute the summary, then let the form reconcile with the new
//! snapshot.

use crate::action::Action;
use crate::form::{EntryForm, FormField, IdGenerator, UuidGenerator};
use crate::state::{ActivityState, StateError};
use crate::summary::CalorieSummary;
use crate::types::{ActivityId, ValidationError};

#[derive(Debug, Clone)]
pub struct Tracker<G = UuidGenerator> {
    state: ActivityState,
    form: EntryForm<G>,
    summary: CalorieSummary,
}

impl Tracker<UuidGenerator> {
    pub fn new(state: ActivityState) -> Self {
        Self::with_ids(state, UuidGenerator)
    }
}

impl<G: IdGenerator> Tracker<G> {
    /// Builds a tracker around an existing snapshot. If the snapshot already
    /// has an active id the form opens in edit mode.
    pub fn with_ids(state: ActivityState, ids: G) -> Self {
        let mut form = EntryForm::new(ids);
        form.sync(&state);
        let summary = CalorieSummary::from_activities(&state.activities);
        Self {
            state,
            form,
            summary,
        }
    }

    pub const fn state(&self) -> &ActivityState {
        &self.state
    }

    pub const fn form(&self) -> &EntryForm<G> {
        &self.form
    }

    pub const fn summary(&self) -> CalorieSummary {
        self.summary
    }

    pub fn into_state(self) -> ActivityState {
        self.state
    }

    /// Applies an action, then recomputes the summary and syncs the form.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StateError> {
        let kind = action.kind();
        self.state.reduce(action)?;
        self.summary = CalorieSummary::from_activities(&self.state.activities);
        self.form.sync(&self.state);
        tracing::debug!(action = kind, summary = ?self.summary, "state updated");
        Ok(())
    }

    /// Forwards raw input text to the form.
    pub fn handle_input(&mut self, field: FormField, value: &str) -> Result<(), ValidationError> {
        self.form.handle_input(field, value)
    }

    /// Submits the form's draft and dispatches the resulting save.
    /// Returns the id of the saved activity.
    ///
    /// The draft is only reset once the store is known to accept it.
    pub fn submit(&mut self) -> Result<ActivityId, StateError> {
        let draft = self.form.draft();
        draft.validate()?;
        self.state.check_save(draft)?;
        let id = draft.id.clone();

        let action = self.form.submit()?;
        self.dispatch(action)?;
        Ok(id)
    }

    /// Selects a saved activity for editing.
    pub fn edit(&mut self, id: ActivityId) -> Result<(), StateError> {
        self.dispatch(Action::SetActiveId { id })
    }
}
