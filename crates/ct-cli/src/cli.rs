//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ct_core::ActivityId;

/// Calorie tracker.
///
/// Logs food and exercise activities and shows calories consumed, burned
/// and net.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the entry form interactively, one command per line on stdin.
    Session,

    /// Log a new activity.
    Add {
        /// Category: 1 or food, 2 or exercise.
        #[arg(long, default_value = "food")]
        category: String,

        /// What was eaten or done.
        #[arg(long)]
        name: String,

        /// Calories consumed or burned.
        #[arg(long, allow_hyphen_values = true)]
        calories: String,
    },

    /// Change a saved activity.
    Edit {
        /// ID of the activity to edit.
        id: ActivityId,

        /// New category: 1 or food, 2 or exercise.
        #[arg(long)]
        category: Option<String>,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New calorie count.
        #[arg(long, allow_hyphen_values = true)]
        calories: Option<String>,
    },

    /// Remove a saved activity.
    Delete {
        /// ID of the activity to remove.
        id: ActivityId,
    },

    /// List saved activities.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show calories consumed, burned and net.
    Summary {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Forget every saved activity.
    Restart,
}
