//! Delete command for removing a saved activity.

use std::io::Write;

use anyhow::{Result, bail};
use ct_core::{Action, ActivityId, Tracker};

use super::summary::format_summary;
use crate::{Config, snapshot};

pub fn run<W: Write>(writer: &mut W, config: &Config, id: &ActivityId) -> Result<()> {
    let mut tracker = Tracker::new(snapshot::load(&config.state_path)?);
    if tracker.state().find(id).is_none() {
        bail!("no activity with id {id}");
    }

    tracker.dispatch(Action::DeleteActivity { id: id.clone() })?;
    snapshot::save(&config.state_path, tracker.state())?;
    tracing::info!(%id, "activity deleted");

    writeln!(writer, "Deleted {id}")?;
    write!(writer, "{}", format_summary(&tracker.summary()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ct_core::{Activity, ActivityState, Category};

    #[test]
    fn test_delete_removes_activity() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            state_path: temp.path().join("state.json"),
        };
        let id = ActivityId::new("a").unwrap();
        let state = ActivityState {
            activities: vec![Activity {
                id: id.clone(),
                category: Category::Consumption,
                name: "Toast".to_string(),
                calories: 200.0,
            }],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        let mut output = Vec::new();
        run(&mut output, &config, &id).unwrap();

        assert!(snapshot::load(&config.state_path).unwrap().activities.is_empty());
        assert!(String::from_utf8(output).unwrap().starts_with("Deleted a\n"));

        let err = run(&mut Vec::new(), &config, &id).unwrap_err();
        assert_eq!(err.to_string(), "no activity with id a");
    }
}
