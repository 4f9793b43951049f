use serde_json::{Value, json};
use shipdata::models::{Dataset, ShipRecord};
use shipdata::query::{self, QueryError};

fn ship(name: Option<&str>, country: Option<&str>, ty: Option<&str>) -> ShipRecord {
    let mut pairs: Vec<(&str, Value)> = Vec::new();
    if let Some(n) = name {
        pairs.push(("SHIPNAME", json!(n)));
    }
    if let Some(c) = country {
        pairs.push(("COUNTRY", json!(c)));
    }
    if let Some(t) = ty {
        pairs.push(("TYPE_SUMMARY", json!(t)));
    }
    ShipRecord::from_pairs(pairs)
}

fn sample() -> Dataset {
    Dataset::from_records(vec![
        ship(Some("Titanic"), Some("UK"), Some("Passenger")),
        ship(Some("Nordic Star"), Some("Norway"), Some("Cargo")),
        ship(Some("Atlantic Titan"), Some("Malta"), Some("Tanker")),
        ship(Some("Oseberg"), Some("Norway"), Some("Cargo")),
        ship(Some("Ghost"), Some("UK"), None),
    ])
}

#[test]
fn count_is_record_length_regardless_of_fields() {
    let ds = Dataset::new(
        vec![
            ship(None, None, None),
            ship(Some("A"), None, None),
            ship(None, Some("X"), None),
        ],
        99,
    );
    assert_eq!(query::ship_count(&ds), 3);
}

#[test]
fn names_keep_record_order() {
    let ds = sample();
    let names = query::ship_names(&ds).unwrap();
    assert_eq!(
        names,
        vec!["Titanic", "Nordic Star", "Atlantic Titan", "Oseberg", "Ghost"]
    );
}

#[test]
fn later_records_without_field_are_skipped() {
    let ds = Dataset::from_records(vec![
        ship(Some("First"), Some("UK"), None),
        ship(None, None, None),
        ship(Some("Third"), Some("Peru"), None),
    ]);
    assert_eq!(query::ship_names(&ds).unwrap(), vec!["First", "Third"]);
    assert_eq!(query::ship_countries(&ds).unwrap(), vec!["UK", "Peru"]);
}

#[test]
fn missing_field_on_first_record_or_empty_dataset_is_reported() {
    let ds = Dataset::from_records(vec![ship(None, None, None), ship(Some("B"), Some("UK"), None)]);
    assert_eq!(
        query::ship_names(&ds).unwrap_err(),
        QueryError::FieldMissing("SHIPNAME")
    );
    assert_eq!(
        query::unique_countries(&ds).unwrap_err(),
        QueryError::FieldMissing("COUNTRY")
    );

    let empty = Dataset::default();
    assert!(query::ship_names(&empty).is_err());
    assert_eq!(
        QueryError::FieldMissing("SHIPNAME").to_string(),
        "No 'SHIPNAME' key found in the ship entries."
    );
}

#[test]
fn unique_countries_sorted_without_duplicates_and_stable() {
    let ds = Dataset::from_records(vec![
        ship(None, Some("norway"), None),
        ship(None, Some("UK"), None),
        ship(None, Some("Malta"), None),
        ship(None, Some("UK"), None),
    ]);
    let first = query::unique_countries(&ds).unwrap();
    // Byte order: uppercase sorts before lowercase.
    assert_eq!(first, vec!["Malta", "UK", "norway"]);
    assert_eq!(query::unique_countries(&ds).unwrap(), first);
}

#[test]
fn type_counts_in_first_seen_order_and_sum_to_total() {
    let ds = sample();
    let counts = query::ships_by_type(&ds);
    let labels: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.type_summary.as_str(), c.count))
        .collect();
    assert_eq!(
        labels,
        vec![("Passenger", 1), ("Cargo", 2), ("Tanker", 1), ("Unknown", 1)]
    );
    let sum: usize = counts.iter().map(|c| c.count).sum();
    assert_eq!(sum, query::ship_count(&ds));
}

#[test]
fn search_is_case_insensitive_substring() {
    let ds = sample();
    assert_eq!(
        query::search_by_name(&ds, "tit"),
        vec!["Titanic", "Atlantic Titan"]
    );
    assert_eq!(query::search_by_name(&ds, "NORDIC"), vec!["Nordic Star"]);
}

#[test]
fn empty_query_matches_every_named_record() {
    let mut records = sample().records().to_vec();
    records.push(ship(None, Some("UK"), None));
    let ds = Dataset::from_records(records);
    assert_eq!(query::search_by_name(&ds, "").len(), 5);
}

#[test]
fn search_without_matches_is_empty_not_error() {
    let ds = sample();
    assert!(query::search_by_name(&ds, "queen mary").is_empty());
}
