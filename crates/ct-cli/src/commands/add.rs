//! Add command: logs one activity through the entry form.

use std::io::Write;

use anyhow::{Context, Result};
use ct_core::{ActivityState, FormField, Tracker};

use super::summary::format_summary;
use crate::{Config, snapshot};

/// Fills a fresh draft from raw argument text and submits it.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    category: &str,
    name: &str,
    calories: &str,
) -> Result<()> {
    let state = snapshot::load(&config.state_path)?;
    // Always start in create mode, even if the snapshot was saved mid-edit.
    let mut tracker = Tracker::new(ActivityState {
        active_id: None,
        ..state
    });

    tracker.handle_input(FormField::Category, category)?;
    tracker.handle_input(FormField::Name, name)?;
    tracker.handle_input(FormField::Calories, calories)?;
    let id = tracker.submit().context("activity not saved")?;

    snapshot::save(&config.state_path, tracker.state())?;
    tracing::info!(%id, "activity added");

    writeln!(writer, "Saved {id}")?;
    write!(writer, "{}", format_summary(&tracker.summary()))?;
    Ok(())
}
