//! Console command loop and handlers
//!
//! [`Console`] reads one line at a time, maps it to a [`MenuCommand`] and runs
//! the matching handler against the persistence session. Each command finishes
//! (including its transaction) before the next line is read.

pub mod common;
pub mod find;
pub mod reload;
pub mod remove;
pub mod roster;


use std::io::{BufRead, Write};

use tracing::warn;

use crate::{
    cli::types::command::MenuCommand, error::RosterError, storage::RosterDatabase, Result,
};
use common::{write_records, OutputFormat};
use roster::RosterLookup;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Menu-driven console over a [`RosterDatabase`]
pub struct Console<'db, R, W> {
    db: &'db mut RosterDatabase,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<'db, R: BufRead, W: Write> Console<'db, R, W> {
    pub fn new(db: &'db mut RosterDatabase, input: R, output: W) -> Self {
        Self {
            db,
            input,
            output,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Give back the output sink, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and process commands until `quit` or end of input.
    ///
    /// Command failures are reported and the loop continues; only I/O errors
    /// on the console itself end it.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match self.process_input(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(RosterError::Io(e)) => return Err(RosterError::Io(e)),
                Err(e) => {
                    warn!(command = line.trim(), error = %e, "command failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    /// Print the menu of choices followed by the choice prompt
    pub fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for cmd in MenuCommand::ALL {
            writeln!(self.output, "{}: {}", cmd.keyword(), cmd.summary())?;
        }
        write!(self.output, "\tYour choice> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Run the command named by `line`
    pub fn process_input(&mut self, line: &str) -> Result<Flow> {
        let Ok(cmd) = line.parse::<MenuCommand>() else {
            writeln!(self.output, "Invalid choice, try again")?;
            return Ok(Flow::Continue);
        };

        match cmd {
            MenuCommand::Reload => self.reload()?,
            MenuCommand::Roster => self.roster()?,
            MenuCommand::RemovePlayer => self.remove_player()?,
            MenuCommand::Find => self.find()?,
            MenuCommand::RemoveTeam => self.remove_team()?,
            MenuCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn reload(&mut self) -> Result<()> {
        writeln!(self.output, "Removing DB of all records")?;
        reload::delete_all(self.db)?;
        writeln!(self.output, "Loading DB with sample initial records")?;
        reload::load_database(self.db)?;
        Ok(())
    }

    fn roster(&mut self) -> Result<()> {
        let team_name = self.prompt("Team name: ")?;
        match roster::get_roster(self.db, &team_name)? {
            RosterLookup::Players(players) if !players.is_empty() => {
                writeln!(self.output, "The roster: ")?;
                write_records(&mut self.output, &players, self.format)?;
            }
            _ => writeln!(self.output, "No players found")?,
        }
        Ok(())
    }

    fn remove_player(&mut self) -> Result<()> {
        writeln!(self.output, "Remove a Player")?;
        let first_name = self.prompt("First name: ")?;
        let last_name = self.prompt("Last name: ")?;

        let count = remove::remove_player_by_name(self.db, &first_name, &last_name)?;
        writeln!(self.output, "Players removed: {}", count)?;
        Ok(())
    }

    fn find(&mut self) -> Result<()> {
        writeln!(self.output, "Find operation using id's")?;
        writeln!(self.output, "The first players inserted in the database...")?;
        let players = find::find_first_players(self.db)?;
        write_records(&mut self.output, &players, self.format)?;
        Ok(())
    }

    fn remove_team(&mut self) -> Result<()> {
        writeln!(self.output, "Remove a Team")?;
        writeln!(
            self.output,
            "Demo WARNING: This will delete players on the team you're about to delete!"
        )?;
        let team_name = self.prompt("Team name: ")?;

        let count = remove::remove_team_by_name(self.db, &team_name)?;
        writeln!(self.output, "Teams removed: {}", count)?;
        Ok(())
    }

    /// Print `label` and read the answer; end of input reads as empty.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Next line without its line terminator, or `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD, so such a line is just an
    /// unknown command.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
