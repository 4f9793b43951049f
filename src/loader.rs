//! Dataset loading from local files.
//!
//! The format is inferred from the file extension:
//! - `.csv`: header row = field names, one record per row, empty cells are absent
//! - anything else: JSON object `{ "data": [ {...}, ... ], "totalCount": N }`
//!
//! ### Example
//! ```no_run
//! let ds = shipdata::loader::load_dataset("ships_data.json")?;
//! println!("{} ships", ds.len());
//! # Ok::<(), shipdata::loader::LoadError>(())
//! ```

use crate::models::{Dataset, ShipRecord, de_opt_u64_from_string_or_number};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error("invalid CSV in {origin}: {source}")]
    Csv { origin: String, source: csv::Error },
    #[error("entry #{index} of 'data' in {origin} is not an object")]
    MalformedRecord { origin: String, index: usize },
}

/// Wire shape of a JSON dataset. Records stay untyped until they are checked to be objects.
#[derive(Debug, Deserialize)]
struct RawDataset {
    data: Vec<Value>,
    #[serde(
        rename = "totalCount",
        default,
        deserialize_with = "de_opt_u64_from_string_or_number"
    )]
    total_count: Option<u64>,
}

/// Load a dataset, choosing the parser by extension (case-insensitive).
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();
    let ds = match ext.as_str() {
        "csv" => read_csv(reader, &origin)?,
        _ => read_json(reader, &origin)?,
    };
    debug!(
        "loaded {} records from {} (totalCount {})",
        ds.len(),
        origin,
        ds.total_count()
    );
    Ok(ds)
}

/// Parse a JSON dataset. `origin` only labels errors and log lines.
pub fn read_json<R: Read>(reader: R, origin: &str) -> Result<Dataset, LoadError> {
    let raw: RawDataset = serde_json::from_reader(reader).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let mut records = Vec::with_capacity(raw.data.len());
    for (index, value) in raw.data.into_iter().enumerate() {
        match value {
            Value::Object(fields) => records.push(ShipRecord::new(fields)),
            _ => {
                return Err(LoadError::MalformedRecord {
                    origin: origin.to_string(),
                    index,
                });
            }
        }
    }

    let total_count = match raw.total_count {
        Some(n) => {
            if n != records.len() as u64 {
                warn!(
                    "{}: totalCount is {} but 'data' holds {} records",
                    origin,
                    n,
                    records.len()
                );
            }
            n
        }
        None => records.len() as u64,
    };
    Ok(Dataset::new(records, total_count))
}

/// Parse a CSV dataset. Every non-empty cell becomes a string value keyed by its header.
pub fn read_csv<R: Read>(reader: R, origin: &str) -> Result<Dataset, LoadError> {
    let csv_err = |source| LoadError::Csv {
        origin: origin.to_string(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        let fields: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(h, cell)| (h.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(ShipRecord::new(fields));
    }
    Ok(Dataset::from_records(records))
}
