//! Console text for help and command outcomes.

use crate::commands::{CommandKind, ListingKind, Outcome};
use std::io::{self, Write};

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Ship Data CLI!")?;
    writeln!(out, "Available commands:")?;
    for kind in CommandKind::ALL {
        writeln!(out, "{} - {}", kind.usage(), kind.description())?;
    }
    writeln!(out, "help - Show this list of commands")?;
    writeln!(out, "exit - Exit the program")?;
    Ok(())
}

fn listing_header(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Names => "Names of all the ships:",
        ListingKind::Countries => "Countries of all the ships:",
        ListingKind::UniqueCountries => "Countries of all the ships without duplicates:",
    }
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Count(n) => writeln!(out, "There are {n} ships in the file."),
        Outcome::Listing { kind, items } => {
            writeln!(out, "{}", listing_header(*kind))?;
            for item in items {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        Outcome::FieldMissing(e) => writeln!(out, "{e}"),
        Outcome::TypeCounts(counts) => {
            writeln!(out, "Ships by types:")?;
            for c in counts {
                writeln!(out, "{}: {}", c.type_summary, c.count)?;
            }
            Ok(())
        }
        Outcome::Matches { query, names } => {
            writeln!(out, "Ships matching '{query}':")?;
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        Outcome::HistogramSaved { path, .. } => {
            writeln!(out, "Speed histogram saved as '{}'", path.display())
        }
        Outcome::MapSaved { path, .. } => {
            writeln!(out, "Ship map saved as '{}'", path.display())
        }
    }
}
