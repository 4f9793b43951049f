use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Field holding the ship's name.
pub const FIELD_NAME: &str = "SHIPNAME";
/// Field holding the flag country.
pub const FIELD_COUNTRY: &str = "COUNTRY";
/// Field holding the coarse vessel type ("Cargo", "Tanker", ...).
pub const FIELD_TYPE: &str = "TYPE_SUMMARY";
/// Field holding the reported speed.
pub const FIELD_SPEED: &str = "SPEED";
pub const FIELD_LAT: &str = "LAT";
pub const FIELD_LON: &str = "LON";

/// Placeholder used when a record has no type or no name to show.
pub const UNKNOWN: &str = "Unknown";

/// One ship as delivered by the data source: a loose field-name -> value mapping.
///
/// No schema is enforced. Accessors treat a missing key and a JSON `null` the same way,
/// so callers decide per query whether to default or skip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipRecord(Map<String, Value>);

impl ShipRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from `(key, value)` pairs, e.g. `[("SHIPNAME", "Titanic".into())]`.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Raw value for `key`, with `null` reported as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Textual form of a field. Strings are borrowed; other scalars are rendered.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Numeric form of a field. Accepts JSON numbers and numeric strings (CSV sources, some
    /// feeds encode `SPEED` as `"123"`). Anything else, including non-finite values, is absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        let v = match self.get(key)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    pub fn name(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_NAME)
    }

    pub fn country(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_COUNTRY)
    }

    /// Vessel type, defaulting to [`UNKNOWN`].
    pub fn type_summary(&self) -> Cow<'_, str> {
        self.text(FIELD_TYPE).unwrap_or(Cow::Borrowed(UNKNOWN))
    }

    pub fn speed(&self) -> Option<f64> {
        self.number(FIELD_SPEED)
    }

    /// `(lat, lon)` when both coordinates are present and numeric.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.number(FIELD_LAT)?, self.number(FIELD_LON)?))
    }
}

/// The loaded dataset: ordered records plus the count reported by the source.
///
/// Fields are private so nothing can mutate the collection after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    data: Vec<ShipRecord>,
    total_count: u64,
}

impl Dataset {
    /// `total_count` is taken as reported; it is not checked against `data.len()`.
    pub fn new(data: Vec<ShipRecord>, total_count: u64) -> Self {
        Self { data, total_count }
    }

    /// Dataset whose reported count is simply the number of records.
    pub fn from_records(data: Vec<ShipRecord>) -> Self {
        let total_count = data.len() as u64;
        Self { data, total_count }
    }

    pub fn records(&self) -> &[ShipRecord] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}

/// Serde helper: parse an optional `u64` from a JSON number, a numeric string, or `null`.
/// Data feeds are inconsistent about how they encode `totalCount`.
pub(crate) fn de_opt_u64_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for totalCount"));
            }
            Ok(Some(v as u64))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u64>().map(Some).map_err(E::custom)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_treated_as_absent() {
        let r = ShipRecord::from_pairs([(FIELD_NAME, Value::Null), (FIELD_TYPE, Value::Null)]);
        assert!(!r.has(FIELD_NAME));
        assert_eq!(r.name(), None);
        assert_eq!(r.type_summary(), UNKNOWN);
    }

    #[test]
    fn numbers_accept_strings_and_reject_garbage() {
        let r = ShipRecord::from_pairs([
            (FIELD_SPEED, json!("12.5")),
            (FIELD_LAT, json!(51)),
            (FIELD_LON, json!("east")),
        ]);
        assert_eq!(r.speed(), Some(12.5));
        assert_eq!(r.number(FIELD_LAT), Some(51.0));
        assert_eq!(r.number(FIELD_LON), None);
        assert_eq!(r.position(), None);
    }

    #[test]
    fn text_renders_non_string_scalars() {
        let r = ShipRecord::from_pairs([(FIELD_COUNTRY, json!(42))]);
        assert_eq!(r.country().as_deref(), Some("42"));
    }
}
