//! Intents sent from the form (and the front-end) to the activity store.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::types::ActivityId;

/// A message for the activity store.
///
/// Serialized as `{"type": "...", "payload": {...}}`, e.g.
/// `{"type":"save-activity","payload":{"newActivity":{...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Insert the activity, or replace the one with the same id.
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
    /// Select an activity for editing.
    SetActiveId { id: ActivityId },
    /// Remove the activity with this id.
    DeleteActivity { id: ActivityId },
    /// Forget every activity.
    RestartApp,
}

impl Action {
    /// Wire name of this action.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SaveActivity { .. } => "save-activity",
            Self::SetActiveId { .. } => "set-active-id",
            Self::DeleteActivity { .. } => "delete-activity",
            Self::RestartApp => "restart-app",
        }
    }
}
