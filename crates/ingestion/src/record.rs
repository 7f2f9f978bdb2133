//! Raw trade record model.
//!
//! A [`RawRecord`] is the flat shape every input origin (JSON document,
//! spreadsheet export) is reduced to before normalization. Numeric fields
//! tolerate both JSON numbers and strings because upstream exports disagree
//! on types.

use serde::{Deserialize, Deserializer, Serialize};

/// One raw trade execution as handed to the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Date-like value; `YYYY-MM-DD...` or a locale-formatted date string.
    pub date: String,
    /// Contract identifier.
    pub contract: String,
    /// Free-text side indicator (e.g. "UZUN", "Alış", "LONG").
    pub side: String,
    /// Unit quantity, possibly fractional.
    #[serde(deserialize_with = "number_or_string_f64")]
    pub units: f64,
    /// Unit price as text; may use a comma decimal separator.
    #[serde(deserialize_with = "number_or_string")]
    pub price: String,
}

impl RawRecord {
    pub fn new(
        date: impl Into<String>,
        contract: impl Into<String>,
        side: impl Into<String>,
        units: f64,
        price: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            contract: contract.into(),
            side: side.into(),
            units,
            price: price.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Accept a JSON number or string, keeping the textual form so the
/// normalizer can handle locale decimal separators itself.
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::Text(s) => Ok(s),
    }
}

/// Accept a JSON number or a numeric string (comma decimals allowed).
pub(crate) fn number_or_string_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_from_numbers() {
        let json = r#"{
            "date": "2025-05-02",
            "contract": "F_XYZ0625",
            "side": "UZUN",
            "units": 5.0,
            "price": 12.47
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert!((record.units - 5.0).abs() < 1e-12);
        assert_eq!(record.price, "12.47");
    }

    #[test]
    fn test_numeric_fields_from_strings() {
        let json = r#"{
            "date": "02/05/2025",
            "contract": "F_XYZ0625",
            "side": "Satış",
            "units": "3,5",
            "price": "12,47"
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert!((record.units - 3.5).abs() < 1e-12);
        assert_eq!(record.price, "12,47");
    }
}
