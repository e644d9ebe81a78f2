//! The entry form: a single draft activity, kept in sync with the store's
//! active id and turned into a `save-activity` intent on submit.
//!
//! The form never mutates the store. It reads [`ActivityState`] snapshots
//! through [`EntryForm::sync`] and hands [`Action`]s back to the caller.

use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::activity::Activity;
use crate::category::{CATEGORIES, Category, CategoryOption};
use crate::state::ActivityState;
use crate::types::{ActivityId, ValidationError};

/// Source of fresh activity ids.
pub trait IdGenerator {
    /// Returns an id never handed out before in this session.
    fn next_id(&mut self) -> ActivityId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ActivityId {
        ActivityId::generate()
    }
}

/// A form input, identified the way the front-end names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Name,
    Calories,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Category => "category",
            Self::Name => "name",
            Self::Calories => "calories",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "name" => Ok(Self::Name),
            "calories" => Ok(Self::Calories),
            _ => Err(ValidationError::UnknownField {
                value: s.to_string(),
            }),
        }
    }
}

/// Replaces exactly one field of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    SetCategory(Category),
    SetName(String),
    SetCalories(f64),
}

impl FieldUpdate {
    /// Coerces raw input text for `field`.
    ///
    /// Names are kept verbatim. Calories that are blank or not a finite
    /// number become 0, which the validity check then rejects. Category text
    /// must name a known category.
    pub fn from_input(field: FormField, value: &str) -> Result<Self, ValidationError> {
        match field {
            FormField::Category => value.parse().map(Self::SetCategory),
            FormField::Name => Ok(Self::SetName(value.to_string())),
            FormField::Calories => Ok(Self::SetCalories(parse_calories(value))),
        }
    }
}

fn parse_calories(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Whether the draft is a new record or a copy of a saved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ActivityId),
}

/// Draft buffer for one activity.
#[derive(Debug, Clone)]
pub struct EntryForm<G = UuidGenerator> {
    draft: Activity,
    mode: FormMode,
    /// Last active id seen by [`Self::sync`]; the draft only reloads when it changes.
    observed_active_id: Option<ActivityId>,
    ids: G,
}

impl Default for EntryForm<UuidGenerator> {
    fn default() -> Self {
        Self::new(UuidGenerator)
    }
}

impl<G: IdGenerator> EntryForm<G> {
    /// Starts in create mode with a fresh blank draft.
    pub fn new(mut ids: G) -> Self {
        let draft = Activity::blank(ids.next_id());
        Self {
            draft,
            mode: FormMode::Create,
            observed_active_id: None,
            ids,
        }
    }

    pub const fn draft(&self) -> &Activity {
        &self.draft
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Reconciles the draft with a new store snapshot.
    ///
    /// When the active id changes to an id present in `state`, the draft
    /// becomes a copy of that record. If the id is not found the current
    /// draft is kept. Clearing the active id leaves the draft alone, unless
    /// the record being edited is gone; then the form starts a fresh
    /// create-mode draft so a later submit cannot bring it back.
    pub fn sync(&mut self, state: &ActivityState) {
        if state.active_id == self.observed_active_id {
            return;
        }
        self.observed_active_id.clone_from(&state.active_id);

        let Some(active_id) = &state.active_id else {
            self.drop_removed_record(state);
            return;
        };

        match state.find(active_id) {
            Some(activity) => {
                tracing::debug!(id = %active_id, "loading activity into form");
                self.draft = activity.clone();
                self.mode = FormMode::Edit(active_id.clone());
            }
            None => {
                tracing::warn!(id = %active_id, "active id not found, keeping current draft");
            }
        }
    }

    fn drop_removed_record(&mut self, state: &ActivityState) {
        let FormMode::Edit(editing) = &self.mode else {
            return;
        };
        if state.find(editing).is_some() {
            return;
        }
        tracing::debug!(id = %editing, "edited activity removed, starting a new draft");
        self.draft = Activity::blank(self.ids.next_id());
        self.mode = FormMode::Create;
    }

    /// Replaces one field, leaving the others untouched.
    pub fn update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::SetCategory(category) => self.draft.category = category,
            FieldUpdate::SetName(name) => self.draft.name = name,
            FieldUpdate::SetCalories(calories) => self.draft.calories = calories,
        }
    }

    /// Applies raw input text to `field`. On error the draft is unchanged.
    pub fn handle_input(&mut self, field: FormField, value: &str) -> Result<(), ValidationError> {
        let update = FieldUpdate::from_input(field, value)?;
        self.update(update);
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Whether the submit control should be disabled.
    pub fn submit_disabled(&self) -> bool {
        !self.is_valid()
    }

    /// Turns a valid draft into a `save-activity` intent and starts a fresh
    /// create-mode draft. An invalid draft is left as is and nothing is emitted.
    pub fn submit(&mut self) -> Result<Action, ValidationError> {
        self.draft.validate()?;

        let fresh = Activity::blank(self.ids.next_id());
        let submitted = std::mem::replace(&mut self.draft, fresh);
        self.mode = FormMode::Create;
        tracing::debug!(id = %submitted.id, "form submitted");

        Ok(Action::SaveActivity {
            new_activity: submitted,
        })
    }

    /// Options for the category select.
    pub const fn category_options(&self) -> &'static [CategoryOption] {
        &CATEGORIES
    }

    /// Text for the calories input; empty while calories is 0.
    pub fn calories_input(&self) -> String {
        if self.draft.calories == 0.0 {
            String::new()
        } else {
            self.draft.calories.to_string()
        }
    }

    /// Label of the submit control, which follows the draft's category.
    pub const fn submit_label(&self) -> &'static str {
        match self.draft.category {
            Category::Consumption => "Save Food",
            Category::Expenditure => "Save Exercise",
        }
    }
}
