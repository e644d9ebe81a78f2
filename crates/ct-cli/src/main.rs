use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ct_cli::commands::{add, delete, edit, list, restart, session, summary};
use ct_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Session => {
            let stdin = std::io::stdin().lock();
            session::run(stdin, &mut stdout, &config)?;
        }
        Commands::Add {
            category,
            name,
            calories,
        } => add::run(&mut stdout, &config, category, name, calories)?,
        Commands::Edit {
            id,
            category,
            name,
            calories,
        } => {
            let changes = edit::Changes {
                category: category.as_deref(),
                name: name.as_deref(),
                calories: calories.as_deref(),
            };
            edit::run(&mut stdout, &config, id, changes)?;
        }
        Commands::Delete { id } => delete::run(&mut stdout, &config, id)?,
        Commands::List { json } => list::run(&mut stdout, &config, *json)?,
        Commands::Summary { json } => summary::run(&mut stdout, &config, *json)?,
        Commands::Restart => restart::run(&mut stdout, &config)?,
    }

    Ok(())
}
