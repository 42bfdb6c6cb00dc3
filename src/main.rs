//! Entry point: parse CLI, open the database and run the console menu.

use std::io;

use clap::Parser;
use team_roster::{
    cli::TeamRoster,
    commands::{common::OutputFormat, reload::prepare_database, Console},
    core::{logging, AppConfig},
    RosterDatabase,
};
use tracing::info;

/// Run the console.
fn main() -> anyhow::Result<()> {
    let args = TeamRoster::parse();
    logging::init(args.verbose);

    let config = AppConfig::from_args(&args)?;
    info!(location = ?config.location, "starting team roster console");

    let mut db = RosterDatabase::open(&config.location, config.identity_cache_size)?;
    prepare_database(&mut db, config.keep_data)?;

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(&mut db, stdin.lock(), stdout.lock()).with_format(format);
        console.run()?;
    }

    info!(
        teams = db.count_teams()?,
        players = db.count_players()?,
        "console closed"
    );
    Ok(())
}
