//! shipdata
//!
//! A small Rust library for querying a ship dataset loaded once into memory.
//! Pairs with the interactive `shipdata` CLI.
//!
//! ### Features
//! - Load a dataset from JSON (`{"data": [...], "totalCount": N}`) or CSV
//! - Read-only queries: count, names, countries, unique countries, counts by type, name search
//! - Export a PNG histogram of ship speeds
//! - Export an interactive HTML map with one marker per located ship
//!
//! ### Example
//! ```no_run
//! use shipdata::{loader, query, viz};
//!
//! let ds = loader::load_dataset("ships_data.json")?;
//! println!("{} ships", query::ship_count(&ds));
//! for t in query::ships_by_type(&ds) {
//!     println!("{}: {}", t.type_summary, t.count);
//! }
//! viz::speed_histogram(&ds, "speed_histogram.png")?;
//! viz::save_ship_map(&ds, "ships_map.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod commands;
pub mod loader;
pub mod models;
pub mod query;
pub mod render;
pub mod repl;
pub mod session;
pub mod viz;

pub use commands::{Command, CommandKind, DispatchError, Outcome};
pub use models::{Dataset, ShipRecord};
pub use session::Session;
