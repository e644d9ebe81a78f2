//! Restart command: forgets every saved activity.

use std::io::Write;

use anyhow::Result;
use ct_core::{Action, Tracker};

use crate::{Config, snapshot};

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let mut tracker = Tracker::new(snapshot::load(&config.state_path)?);
    let count = tracker.state().activities.len();

    tracker.dispatch(Action::RestartApp)?;
    snapshot::save(&config.state_path, tracker.state())?;
    tracing::info!(count, "activities cleared");

    writeln!(writer, "Cleared {count} activities.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ct_core::ActivityState;

    #[test]
    fn test_restart_clears_snapshot() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            state_path: temp.path().join("state.json"),
        };
        crate::commands::add::run(&mut Vec::new(), &config, "food", "Toast", "200").unwrap();

        let mut output = Vec::new();
        run(&mut output, &config).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Cleared 1 activities.\n");
        assert_eq!(
            snapshot::load(&config.state_path).unwrap(),
            ActivityState::default()
        );
    }
}
