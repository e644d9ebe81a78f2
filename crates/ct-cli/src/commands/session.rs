//! Session command: the entry form driven by line commands on stdin.
//!
//! Each line is handled to completion before the next is read. Commands
//! that change the store save the snapshot and re-render what changed.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use ct_core::{
    Action, ActivityId, ActivityState, EntryForm, FormField, FormMode, IdGenerator, Tracker,
};

use super::list::format_activities;
use super::summary::format_summary;
use crate::{Config, snapshot};

const HELP: &str = "\
Commands:
  category <1|2|food|exercise>  set the draft's category
  name <text>                   set the draft's name
  calories <number>             set the draft's calories
  submit                        save the draft
  edit <id>                     load a saved activity into the form
  delete <id>                   remove a saved activity
  list                          show saved activities
  summary                       show calories consumed, burned and net
  form                          show the draft
  restart                       forget every saved activity
  help                          show this help
  quit                          leave the session
";

/// One line of session input.
#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Input(FormField, String),
    Submit,
    Edit(ActivityId),
    Delete(ActivityId),
    List,
    Summary,
    Form,
    Restart,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match word {
            "category" | "name" | "calories" => {
                let field: FormField = word.parse()?;
                // Names keep their inner spacing; only the separator is dropped.
                let value = if field == FormField::Name {
                    rest
                } else {
                    rest.trim()
                };
                Self::Input(field, value.to_string())
            }
            "submit" => Self::Submit,
            "edit" => Self::Edit(parse_id(word, rest)?),
            "delete" => Self::Delete(parse_id(word, rest)?),
            "list" => Self::List,
            "summary" => Self::Summary,
            "form" => Self::Form,
            "restart" => Self::Restart,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => bail!("unknown command '{word}' (type 'help')"),
        };
        Ok(command)
    }
}

fn parse_id(command: &str, rest: &str) -> Result<ActivityId> {
    ActivityId::new(rest.trim()).with_context(|| format!("usage: {command} <id>"))
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, writer: &mut W, config: &Config) -> Result<()> {
    let mut tracker = Tracker::new(snapshot::load(&config.state_path)?);
    write!(writer, "{}", format_form(tracker.form()))?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim_start();
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(writer, "error: {e:#}")?;
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        if !handle(&mut tracker, command, writer, &config.state_path)? {
            break;
        }
    }

    Ok(())
}

/// Applies one command. Returns `false` when the session should end.
///
/// Rejected input is reported on `writer`; only I/O failures are returned
/// as errors.
fn handle<G: IdGenerator, W: Write>(
    tracker: &mut Tracker<G>,
    command: SessionCommand,
    writer: &mut W,
    state_path: &Path,
) -> Result<bool> {
    match command {
        SessionCommand::Input(field, value) => match tracker.handle_input(field, &value) {
            Ok(()) => write!(writer, "{}", format_form(tracker.form()))?,
            Err(e) => writeln!(writer, "error: {e}")?,
        },
        SessionCommand::Submit => match tracker.submit() {
            Ok(id) => {
                persist(state_path, tracker)?;
                writeln!(writer, "Saved {id}")?;
                write!(writer, "{}", format_summary(&tracker.summary()))?;
            }
            Err(e) => writeln!(writer, "error: {e}")?,
        },
        SessionCommand::Edit(id) => {
            if tracker.state().find(&id).is_none() {
                writeln!(writer, "error: no activity with id {id}")?;
                return Ok(true);
            }
            // Not saved: the active id only lives for this session.
            tracker.edit(id)?;
            write!(writer, "{}", format_form(tracker.form()))?;
        }
        SessionCommand::Delete(id) => {
            if tracker.state().find(&id).is_none() {
                writeln!(writer, "error: no activity with id {id}")?;
                return Ok(true);
            }
            tracker.dispatch(Action::DeleteActivity { id: id.clone() })?;
            persist(state_path, tracker)?;
            writeln!(writer, "Deleted {id}")?;
            write!(writer, "{}", format_summary(&tracker.summary()))?;
        }
        SessionCommand::List => write!(
            writer,
            "{}",
            format_activities(&tracker.state().activities)
        )?,
        SessionCommand::Summary => write!(writer, "{}", format_summary(&tracker.summary()))?,
        SessionCommand::Form => write!(writer, "{}", format_form(tracker.form()))?,
        SessionCommand::Restart => {
            tracker.dispatch(Action::RestartApp)?;
            persist(state_path, tracker)?;
            writeln!(writer, "All activities cleared.")?;
            write!(writer, "{}", format_summary(&tracker.summary()))?;
        }
        SessionCommand::Help => write!(writer, "{HELP}")?,
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Saves the store without the active id, so the next session starts in
/// create mode even if an edit was still open.
fn persist<G: IdGenerator>(state_path: &Path, tracker: &Tracker<G>) -> Result<()> {
    let state = ActivityState {
        active_id: None,
        ..tracker.state().clone()
    };
    snapshot::save(state_path, &state)
}

/// Renders the draft the way the form shows it: category select, name and
/// calories inputs, and the submit control.
pub fn format_form<G: IdGenerator>(form: &EntryForm<G>) -> String {
    let mut output = String::new();
    let draft = form.draft();

    match form.mode() {
        FormMode::Create => writeln!(output, "FORM (new activity)").unwrap(),
        FormMode::Edit(id) => writeln!(output, "FORM (editing {id})").unwrap(),
    }

    let options: Vec<String> = form
        .category_options()
        .iter()
        .map(|option| {
            let marker = if option.id == draft.category.id() { "*" } else { " " };
            format!("{marker}{} {}", option.id, option.name)
        })
        .collect();
    writeln!(output, "  category: {}", options.join("  ")).unwrap();

    let name_line = format!("  name:     {}", draft.name);
    writeln!(output, "{}", name_line.trim_end()).unwrap();
    let calories_line = format!("  calories: {}", form.calories_input());
    writeln!(output, "{}", calories_line.trim_end()).unwrap();

    let status = if form.submit_disabled() {
        "disabled"
    } else {
        "ready"
    };
    writeln!(output, "  [{}] {status}", form.submit_label()).unwrap();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use ct_core::{Activity, ActivityState, Category};
    use insta::assert_snapshot;

    fn config(temp: &tempfile::TempDir) -> Config {
        Config {
            state_path: temp.path().join("state.json"),
        }
    }

    fn run_session(config: &Config, script: &str) -> String {
        let mut output = Vec::new();
        run(script.as_bytes(), &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "name  Morning run".parse::<SessionCommand>().unwrap(),
            SessionCommand::Input(FormField::Name, " Morning run".to_string())
        );
        assert_eq!(
            "calories  250 ".parse::<SessionCommand>().unwrap(),
            SessionCommand::Input(FormField::Calories, "250".to_string())
        );
        assert_eq!(
            "edit abc".parse::<SessionCommand>().unwrap(),
            SessionCommand::Edit(ActivityId::new("abc").unwrap())
        );
        assert_eq!("exit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        let err = "dance".parse::<SessionCommand>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'dance' (type 'help')");

        let err = "delete".parse::<SessionCommand>().unwrap_err();
        assert_eq!(err.to_string(), "usage: delete <id>");
    }

    #[test]
    fn test_format_blank_form() {
        let form = EntryForm::default();
        assert_snapshot!(format_form(&form), @r"
        FORM (new activity)
          category: *1 Food   2 Exercise
          name:
          calories:
          [Save Food] disabled
        ");
    }

    #[test]
    fn test_format_filled_exercise_form() {
        let mut form = EntryForm::default();
        form.handle_input(FormField::Category, "2").unwrap();
        form.handle_input(FormField::Name, "Swim").unwrap();
        form.handle_input(FormField::Calories, "420").unwrap();
        assert_snapshot!(format_form(&form), @r"
        FORM (new activity)
          category:  1 Food  *2 Exercise
          name:     Swim
          calories: 420
          [Save Exercise] ready
        ");
    }

    #[test]
    fn test_session_logs_and_summarizes() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);

        let output = run_session(
            &config,
            "name Toast\ncalories 300\nsubmit\n\
             category 2\nname Run\ncalories 150\nsubmit\n\
             name Apple\ncalories 200\nsubmit\nquit\n",
        );

        assert!(output.contains("Saved "));
        let state = snapshot::load(&config.state_path).unwrap();
        let names: Vec<_> = state.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Toast", "Run", "Apple"]);
        assert!(output.ends_with(
            "CALORIE SUMMARY\nConsumed         500\nBurned           150\nNet              350\n"
        ));
    }

    #[test]
    fn test_session_rejects_invalid_submit() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);

        let output = run_session(&config, "name Run\nsubmit\n");

        assert!(output.contains(
            "error: draft cannot be saved: calories must be greater than 0, got 0"
        ));
        assert!(!config.state_path.exists());
    }

    #[test]
    fn test_session_reports_bad_input_and_continues() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);

        let output = run_session(&config, "category 7\ndance\nedit nope\nsummary\n");

        assert!(output.contains("error: unknown category: 7"));
        assert!(output.contains("error: unknown command 'dance' (type 'help')"));
        assert!(output.contains("error: no activity with id nope"));
        assert!(output.contains("CALORIE SUMMARY"));
    }

    #[test]
    fn test_session_edit_replaces_saved_activity() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);
        let state = ActivityState {
            activities: vec![Activity {
                id: ActivityId::new("saved-1").unwrap(),
                category: Category::Expenditure,
                name: "Run".to_string(),
                calories: 150.0,
            }],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        let output = run_session(&config, "edit saved-1\ncalories 400\nsubmit\n");

        assert!(output.contains("FORM (editing saved-1)"));
        assert!(output.contains("Saved saved-1"));
        let state = snapshot::load(&config.state_path).unwrap();
        assert_eq!(state.activities.len(), 1);
        assert_eq!(state.activities[0].name, "Run");
        assert!((state.activities[0].calories - 400.0).abs() < f64::EPSILON);
        assert_eq!(state.active_id, None);
    }

    #[test]
    fn test_session_delete_and_restart() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);
        let state = ActivityState {
            activities: vec![
                Activity {
                    id: ActivityId::new("a").unwrap(),
                    category: Category::Consumption,
                    name: "Toast".to_string(),
                    calories: 200.0,
                },
                Activity {
                    id: ActivityId::new("b").unwrap(),
                    category: Category::Consumption,
                    name: "Soup".to_string(),
                    calories: 90.0,
                },
            ],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        let output = run_session(&config, "delete a\n");
        assert!(output.contains("Deleted a"));
        assert_eq!(snapshot::load(&config.state_path).unwrap().activities.len(), 1);

        let output = run_session(&config, "restart\n");
        assert!(output.contains("All activities cleared."));
        assert_eq!(
            snapshot::load(&config.state_path).unwrap(),
            ActivityState::default()
        );
    }

    #[test]
    fn test_delete_while_editing_does_not_persist_edit() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);
        let state = ActivityState {
            activities: vec![
                Activity {
                    id: ActivityId::new("a").unwrap(),
                    category: Category::Consumption,
                    name: "Toast".to_string(),
                    calories: 200.0,
                },
                Activity {
                    id: ActivityId::new("b").unwrap(),
                    category: Category::Consumption,
                    name: "Soup".to_string(),
                    calories: 90.0,
                },
            ],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        run_session(&config, "edit a
delete b
");

        let saved = snapshot::load(&config.state_path).unwrap();
        assert_eq!(saved.active_id, None);
        assert_eq!(saved.activities.len(), 1);

        let output = run_session(&config, "form
");
        assert!(output.starts_with("FORM (new activity)\n"));
    }

    #[test]
    fn test_deleted_activity_cannot_be_resubmitted() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);
        let state = ActivityState {
            activities: vec![Activity {
                id: ActivityId::new("a").unwrap(),
                category: Category::Consumption,
                name: "Toast".to_string(),
                calories: 100.0,
            }],
            active_id: None,
        };
        snapshot::save(&config.state_path, &state).unwrap();

        let output = run_session(&config, "edit a
delete a
submit
");

        assert!(output.contains("Deleted a"));
        assert!(!output.contains("Saved a"));
        assert!(output.contains("error: draft cannot be saved"));
        assert!(snapshot::load(&config.state_path).unwrap().activities.is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp);

        let output = run_session(&config, "quit\nname Toast\ncalories 10\nsubmit\n");

        assert!(!output.contains("Saved"));
        assert!(!config.state_path.exists());
    }
}
