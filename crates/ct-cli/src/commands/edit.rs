//! Edit command: loads a saved activity into the form, changes the given
//! fields and saves it back under the same id.

use std::io::Write;

use anyhow::{Context, Result, bail};
use ct_core::{ActivityId, FormField, Tracker};

use super::summary::format_summary;
use crate::{Config, snapshot};

/// Field values to apply on top of the saved record. `None` keeps the field.
#[derive(Debug, Default, Clone, Copy)]
pub struct Changes<'a> {
    pub category: Option<&'a str>,
    pub name: Option<&'a str>,
    pub calories: Option<&'a str>,
}

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    id: &ActivityId,
    changes: Changes<'_>,
) -> Result<()> {
    let mut tracker = Tracker::new(snapshot::load(&config.state_path)?);
    if tracker.state().find(id).is_none() {
        bail!("no activity with id {id}");
    }

    tracker.edit(id.clone())?;
    let fields = [
        (FormField::Category, changes.category),
        (FormField::Name, changes.name),
        (FormField::Calories, changes.calories),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            tracker.handle_input(field, value)?;
        }
    }
    let saved = tracker.submit().context("activity not saved")?;

    snapshot::save(&config.state_path, tracker.state())?;
    tracing::info!(id = %saved, "activity updated");

    writeln!(writer, "Updated {saved}")?;
    write!(writer, "{}", format_summary(&tracker.summary()))?;
    Ok(())
}
