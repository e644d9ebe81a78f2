//! Summary command: calories consumed, burned and net.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use ct_core::{CalorieSummary, Tracker};

use crate::{Config, snapshot};

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let tracker = Tracker::new(snapshot::load(&config.state_path)?);
    let summary = tracker.summary();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }
    Ok(())
}

/// Formats the three totals under fixed labels.
pub fn format_summary(summary: &CalorieSummary) -> String {
    let mut output = String::new();
    writeln!(output, "CALORIE SUMMARY").unwrap();
    writeln!(output, "{:<10}{:>10}", "Consumed", summary.consumed).unwrap();
    writeln!(output, "{:<10}{:>10}", "Burned", summary.burned).unwrap();
    writeln!(output, "{:<10}{:>10}", "Net", summary.net).unwrap();
    output
}
