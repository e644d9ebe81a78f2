//! Logged food and exercise activities.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::types::{ActivityId, ValidationError};

/// A single logged food-consumption or exercise-expenditure record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub category: Category,
    pub name: String,
    pub calories: f64,
}

impl Activity {
    /// A blank create-mode record: consumption, no name, zero calories.
    pub fn blank(id: ActivityId) -> Self {
        Self {
            id,
            category: Category::default(),
            name: String::new(),
            calories: 0.0,
        }
    }

    /// Checks the invariant every persisted activity holds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.calories.is_nan() || self.calories <= 0.0 {
            return Err(ValidationError::NonPositiveCalories {
                value: self.calories,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
