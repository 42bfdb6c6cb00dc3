//! Console menu commands.

use std::fmt;
use std::str::FromStr;

/// One of the commands offered by the console menu.
///
/// Parsing is case-insensitive on the whole (trimmed) line, so `"Remove Player"`
/// selects [`MenuCommand::RemovePlayer`] but `"remove"` selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Reload,
    Find,
    Roster,
    RemovePlayer,
    RemoveTeam,
    Quit,
}

impl MenuCommand {
    /// Menu entries in display order.
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::Reload,
        MenuCommand::Find,
        MenuCommand::Roster,
        MenuCommand::RemovePlayer,
        MenuCommand::RemoveTeam,
        MenuCommand::Quit,
    ];

    /// Text the user types to select this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            MenuCommand::Reload => "reload",
            MenuCommand::Find => "find",
            MenuCommand::Roster => "roster",
            MenuCommand::RemovePlayer => "remove player",
            MenuCommand::RemoveTeam => "remove team",
            MenuCommand::Quit => "quit",
        }
    }

    /// One-line description shown in the menu.
    pub fn summary(&self) -> &'static str {
        match self {
            MenuCommand::Reload => "Reload initial data into the database",
            MenuCommand::Find => "Demo of find using object id's",
            MenuCommand::Roster => "View the name of all players in a team",
            MenuCommand::RemovePlayer => "Remove a player given the name",
            MenuCommand::RemoveTeam => "Remove a team given its name",
            MenuCommand::Quit => "Quit this program",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Returned when a line matches no menu command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for MenuCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.keyword().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
