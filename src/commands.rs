//! The fixed command menu and its dispatch.
//!
//! Commands are a closed set. Parsing validates the argument arity up front, so a
//! `Command` value is always executable.

use crate::query::{self, QueryError, TypeCount};
use crate::session::Session;
use crate::viz::{self, Histogram, SHIP_MAP_FILE, SPEED_HISTOGRAM_FILE};
use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

/// How many free-text arguments a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    One,
}

/// Menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Count,
    Names,
    Countries,
    UniqueCountries,
    ByType,
    Search,
    SpeedHistogram,
    Map,
}

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Count,
        CommandKind::Names,
        CommandKind::Countries,
        CommandKind::UniqueCountries,
        CommandKind::ByType,
        CommandKind::Search,
        CommandKind::SpeedHistogram,
        CommandKind::Map,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            CommandKind::Count => "1",
            CommandKind::Names => "2",
            CommandKind::Countries => "3",
            CommandKind::UniqueCountries => "4",
            CommandKind::ByType => "5",
            CommandKind::Search => "6",
            CommandKind::SpeedHistogram => "7",
            CommandKind::Map => "8",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            CommandKind::Search => Arity::One,
            _ => Arity::None,
        }
    }

    /// Token plus argument placeholder, as shown in help.
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Search => "6 <name>",
            other => other.token(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Count => "Print number of ships",
            CommandKind::Names => "Print names of all ships",
            CommandKind::Countries => "Print countries of all ships",
            CommandKind::UniqueCountries => "Print unique countries of all ships",
            CommandKind::ByType => "Print count of ships by type",
            CommandKind::Search => "Search for ships by name",
            CommandKind::SpeedHistogram => "Create a histogram of ship speeds",
            CommandKind::Map => "Draw a map of ship locations",
        }
    }
}

/// A parsed, arity-checked command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Count,
    Names,
    Countries,
    UniqueCountries,
    ByType,
    Search(String),
    SpeedHistogram,
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Unknown command: {0}. Type 'help' to see the available commands.")]
    UnknownCommand(String),
    #[error("command {token} requires a ship name (usage: {usage})")]
    MissingArgument {
        token: &'static str,
        usage: &'static str,
    },
    #[error("command {0} takes no argument")]
    UnexpectedArgument(&'static str),
}

impl Command {
    /// Build a command from its token and the (possibly empty) rest of the line.
    pub fn parse(token: &str, argument: &str) -> Result<Self, DispatchError> {
        let kind = CommandKind::from_token(token)
            .ok_or_else(|| DispatchError::UnknownCommand(token.to_string()))?;
        let argument = argument.trim();

        match (kind.arity(), argument.is_empty()) {
            (Arity::One, true) => {
                return Err(DispatchError::MissingArgument {
                    token: kind.token(),
                    usage: kind.usage(),
                });
            }
            (Arity::None, false) => return Err(DispatchError::UnexpectedArgument(kind.token())),
            _ => {}
        }

        Ok(match kind {
            CommandKind::Count => Command::Count,
            CommandKind::Names => Command::Names,
            CommandKind::Countries => Command::Countries,
            CommandKind::UniqueCountries => Command::UniqueCountries,
            CommandKind::ByType => Command::ByType,
            CommandKind::Search => Command::Search(argument.to_string()),
            CommandKind::SpeedHistogram => Command::SpeedHistogram,
            CommandKind::Map => Command::Map,
        })
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Count => CommandKind::Count,
            Command::Names => CommandKind::Names,
            Command::Countries => CommandKind::Countries,
            Command::UniqueCountries => CommandKind::UniqueCountries,
            Command::ByType => CommandKind::ByType,
            Command::Search(_) => CommandKind::Search,
            Command::SpeedHistogram => CommandKind::SpeedHistogram,
            Command::Map => CommandKind::Map,
        }
    }
}

/// Which list a [`Outcome::Listing`] holds; selects the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Names,
    Countries,
    UniqueCountries,
}

/// Structured result of one command, rendered by [`crate::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Count(usize),
    Listing { kind: ListingKind, items: Vec<String> },
    FieldMissing(QueryError),
    TypeCounts(Vec<TypeCount>),
    Matches { query: String, names: Vec<String> },
    HistogramSaved { path: PathBuf, histogram: Histogram },
    MapSaved { path: PathBuf, markers: usize },
}

fn listing<S: Into<String>>(kind: ListingKind, found: Result<Vec<S>, QueryError>) -> Outcome {
    match found {
        Ok(items) => Outcome::Listing {
            kind,
            items: items.into_iter().map(Into::into).collect(),
        },
        Err(e) => Outcome::FieldMissing(e),
    }
}

/// Run `command` against the session. Only the exports can fail (I/O, rendering).
pub fn execute(session: &Session, command: &Command) -> Result<Outcome> {
    let ds = session.dataset();
    let outcome = match command {
        Command::Count => Outcome::Count(query::ship_count(ds)),
        Command::Names => listing(ListingKind::Names, query::ship_names(ds)),
        Command::Countries => listing(ListingKind::Countries, query::ship_countries(ds)),
        Command::UniqueCountries => {
            listing(ListingKind::UniqueCountries, query::unique_countries(ds))
        }
        Command::ByType => Outcome::TypeCounts(query::ships_by_type(ds)),
        Command::Search(q) => Outcome::Matches {
            query: q.to_lowercase(),
            names: query::search_by_name(ds, q)
                .into_iter()
                .map(|n| n.into_owned())
                .collect(),
        },
        Command::SpeedHistogram => {
            let path = session.output_path(SPEED_HISTOGRAM_FILE);
            let histogram = viz::speed_histogram(ds, &path)?;
            Outcome::HistogramSaved { path, histogram }
        }
        Command::Map => {
            let path = session.output_path(SHIP_MAP_FILE);
            let markers = viz::save_ship_map(ds, &path)?;
            Outcome::MapSaved { path, markers }
        }
    };
    Ok(outcome)
}
