//! Core domain logic for the calorie tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Activities: logged food and exercise records with their categories
//! - Summary: consumed, burned and net calorie totals
//! - Entry form: the draft buffer, field updates, validation and submit
//! - Store: the reducer applying actions to the activity list

mod action;
mod activity;
pub mod category;
pub mod form;
mod state;
mod summary;
mod tracker;
pub mod types;

pub use action::Action;
pub use activity::Activity;
pub use category::{CATEGORIES, Category, CategoryOption};
pub use form::{EntryForm, FieldUpdate, FormField, FormMode, IdGenerator, UuidGenerator};
pub use state::{ActivityState, StateError};
pub use summary::CalorieSummary;
pub use tracker::Tracker;
pub use types::{ActivityId, ValidationError};
