//! Activity categories and the fixed option list shown in the category select.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Whether an activity adds calories (food) or burns them (exercise).
///
/// On the wire a category is its numeric id: `1` for consumption, `2` for
/// expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Consumption,
    Expenditure,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 2] = [Self::Consumption, Self::Expenditure];

    /// Numeric id used on the wire and in form input.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Consumption => 1,
            Self::Expenditure => 2,
        }
    }

    /// Looks up a category by numeric id.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Consumption),
            2 => Some(Self::Expenditure),
            _ => None,
        }
    }

    /// Display name for option lists.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consumption => "Food",
            Self::Expenditure => "Exercise",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses numeric ids (`"1"`, `"2"`) as well as the names `food` and
/// `exercise`, case-insensitively.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(category) = trimmed.parse::<u8>().ok().and_then(Self::from_id) {
            return Ok(category);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Consumption),
            "exercise" => Ok(Self::Expenditure),
            _ => Err(ValidationError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = u8::deserialize(deserializer)?;
        Self::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category id: {id}")))
    }
}

/// One entry of the category select: `{id, name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: u8,
    pub name: &'static str,
}

/// The fixed category list used to populate the form's select.
pub const CATEGORIES: [CategoryOption; 2] = [
    CategoryOption {
        id: Category::Consumption.id(),
        name: Category::Consumption.name(),
    },
    CategoryOption {
        id: Category::Expenditure.id(),
        name: Category::Expenditure.name(),
    },
];
