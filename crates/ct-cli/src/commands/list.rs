//! List command for showing saved activities.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use ct_core::Activity;

use crate::{Config, snapshot};

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let state = snapshot::load(&config.state_path)?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&state.activities)?)?;
    } else {
        write!(writer, "{}", format_activities(&state.activities))?;
    }
    Ok(())
}

/// Formats activities as a table, in the order they were logged.
pub fn format_activities(activities: &[Activity]) -> String {
    let mut output = String::new();

    if activities.is_empty() {
        writeln!(
            output,
            "No activities logged yet. Run 'ct add' or 'ct session' to log one."
        )
        .unwrap();
        return output;
    }

    writeln!(output, "{:<38} {:<9} {:>8}  NAME", "ID", "CATEGORY", "CALORIES").unwrap();
    for activity in activities {
        writeln!(
            output,
            "{:<38} {:<9} {:>8}  {}",
            activity.id.as_str(),
            activity.category.name(),
            activity.calories,
            activity.name
        )
        .unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use ct_core::{ActivityId, Category};
    use insta::assert_snapshot;

    fn activity(id: &str, category: Category, name: &str, calories: f64) -> Activity {
        Activity {
            id: ActivityId::new(id).unwrap(),
            category,
            name: name.to_string(),
            calories,
        }
    }

    #[test]
    fn test_format_empty() {
        assert_snapshot!(
            format_activities(&[]),
            @"No activities logged yet. Run 'ct add' or 'ct session' to log one."
        );
    }

    #[test]
    fn test_format_activities() {
        let activities = [
            activity("a1", Category::Consumption, "Oatmeal", 300.0),
            activity("b2", Category::Expenditure, "Evening run", 150.0),
        ];
        assert_snapshot!(format_activities(&activities), @r"
        ID                                     CATEGORY  CALORIES  NAME
        a1                                     Food           300  Oatmeal
        b2                                     Exercise       150  Evening run
        ");
    }

    #[test]
    fn test_run_json_lists_snapshot_activities() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            state_path: temp.path().join("state.json"),
        };
        let state = ct_core::ActivityState {
            activities: vec![activity("a1", Category::Consumption, "Oatmeal", 300.0)],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        let mut output = Vec::new();
        run(&mut output, &config, true).unwrap();

        let parsed: Vec<Activity> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, state.activities);
    }
}
