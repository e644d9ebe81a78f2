//! The activity store: an ordered activity list plus the active (edited) id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::Action;
use crate::activity::Activity;
use crate::summary::CalorieSummary;
use crate::types::{ActivityId, ValidationError};

/// Errors raised while applying an action.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    /// A save carried an activity that breaks the persisted invariant.
    #[error("refusing to save activity {id}: {reason}")]
    InvalidActivity {
        id: ActivityId,
        reason: ValidationError,
    },

    /// Saving would push a calorie total past what an `f64` can hold.
    #[error("refusing to save activity {id}: calorie totals would overflow")]
    TotalsOverflow { id: ActivityId },

    /// The form's draft could not be submitted.
    #[error("draft cannot be saved: {0}")]
    InvalidDraft(ValidationError),
}

impl From<ValidationError> for StateError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidDraft(err)
    }
}

/// Snapshot of every saved activity and the id currently being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityState {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub active_id: Option<ActivityId>,
}

impl ActivityState {
    /// Looks up a saved activity by id.
    pub fn find(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Applies one action. On error the state is left untouched.
    pub fn reduce(&mut self, action: Action) -> Result<(), StateError> {
        match action {
            Action::SaveActivity { new_activity } => {
                let id = new_activity.id.clone();
                self.activities = self.with_saved(new_activity)?;
                tracing::debug!(%id, count = self.activities.len(), "activity saved");
                self.active_id = None;
            }
            Action::SetActiveId { id } => {
                tracing::debug!(%id, "active id set");
                self.active_id = Some(id);
            }
            Action::DeleteActivity { id } => {
                let before = self.activities.len();
                self.activities.retain(|a| a.id != id);
                if self.activities.len() == before {
                    tracing::debug!(%id, "delete for unknown activity ignored");
                }
                if self.active_id.as_ref() == Some(&id) {
                    self.active_id = None;
                }
            }
            Action::RestartApp => {
                tracing::debug!(count = self.activities.len(), "clearing activities");
                self.activities.clear();
                self.active_id = None;
            }
        }
        Ok(())
    }

    /// Checks that saving `activity` would be accepted, without applying it.
    pub fn check_save(&self, activity: &Activity) -> Result<(), StateError> {
        self.with_saved(activity.clone()).map(drop)
    }

    /// The activity list as it would be after saving `activity`.
    fn with_saved(&self, activity: Activity) -> Result<Vec<Activity>, StateError> {
        let id = activity.id.clone();
        activity
            .validate()
            .map_err(|reason| StateError::InvalidActivity {
                id: id.clone(),
                reason,
            })?;

        let mut activities = self.activities.clone();
        if let Some(existing) = activities.iter_mut().find(|a| a.id == id) {
            *existing = activity;
        } else {
            activities.push(activity);
        }

        if !CalorieSummary::from_activities(&activities).is_finite() {
            return Err(StateError::TotalsOverflow { id });
        }
        Ok(activities)
    }

    /// Validates every stored activity, e.g. after loading a snapshot.
    pub fn validate(&self) -> Result<(), StateError> {
        for activity in &self.activities {
            activity
                .validate()
                .map_err(|reason| StateError::InvalidActivity {
                    id: activity.id.clone(),
                    reason,
                })?;
        }
        match self.activities.last() {
            Some(last) if !CalorieSummary::from_activities(&self.activities).is_finite() => {
                Err(StateError::TotalsOverflow {
                    id: last.id.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}
