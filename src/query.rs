//! Read-only queries over a [`Dataset`].
//!
//! Every function returns a value; turning it into console text is the job of
//! [`crate::render`].
//!
//! The list queries (`ship_names`, `ship_countries`, `unique_countries`) only check the first
//! record for the field. If that check passes, later records that lack the field are skipped.

use crate::models::{Dataset, FIELD_COUNTRY, FIELD_NAME};
use ahash::AHashMap;
use std::borrow::Cow;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The dataset is empty, or its first record lacks the field.
    #[error("No '{0}' key found in the ship entries.")]
    FieldMissing(&'static str),
}

/// Number of ships of one `TYPE_SUMMARY` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub type_summary: String,
    pub count: usize,
}

/// Number of records in the dataset (not the reported `totalCount`).
pub fn ship_count(ds: &Dataset) -> usize {
    ds.len()
}

fn require_field(ds: &Dataset, field: &'static str) -> Result<(), QueryError> {
    match ds.records().first() {
        Some(first) if first.has(field) => Ok(()),
        _ => Err(QueryError::FieldMissing(field)),
    }
}

/// Ship names in record order.
pub fn ship_names(ds: &Dataset) -> Result<Vec<Cow<'_, str>>, QueryError> {
    require_field(ds, FIELD_NAME)?;
    Ok(ds.records().iter().filter_map(|r| r.name()).collect())
}

/// Ship countries in record order, duplicates included.
pub fn ship_countries(ds: &Dataset) -> Result<Vec<Cow<'_, str>>, QueryError> {
    require_field(ds, FIELD_COUNTRY)?;
    Ok(ds.records().iter().filter_map(|r| r.country()).collect())
}

/// Distinct countries, sorted ascending by byte order (so `"Zambia" < "france"`).
pub fn unique_countries(ds: &Dataset) -> Result<Vec<String>, QueryError> {
    let countries = ship_countries(ds)?;
    let set: BTreeSet<Cow<'_, str>> = countries.into_iter().collect();
    Ok(set.into_iter().map(Cow::into_owned).collect())
}

/// Count ships per `TYPE_SUMMARY` (missing = `"Unknown"`), in first-seen order.
pub fn ships_by_type(ds: &Dataset) -> Vec<TypeCount> {
    let mut slots: AHashMap<Cow<'_, str>, usize> = AHashMap::new();
    let mut out: Vec<TypeCount> = Vec::new();
    for r in ds.records() {
        let ty = r.type_summary();
        match slots.get(&ty).copied() {
            Some(i) => out[i].count += 1,
            None => {
                out.push(TypeCount {
                    type_summary: ty.to_string(),
                    count: 1,
                });
                slots.insert(ty, out.len() - 1);
            }
        }
    }
    out
}

/// Case-insensitive substring search on the ship name.
///
/// Records without a name never match, so an empty query returns every named ship.
pub fn search_by_name<'a>(ds: &'a Dataset, query: &str) -> Vec<Cow<'a, str>> {
    let needle = query.to_lowercase();
    ds.records()
        .iter()
        .filter_map(|r| r.name())
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}
