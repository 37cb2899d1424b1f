//! Deserialization helpers for the backend's loosely typed JSON.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Decodes a JSON array, treating `null` as an empty array.
///
/// Pair with `#[serde(default)]` so an absent key is also empty.
pub fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes a monetary amount sent as a number, a decimal string, or `null`.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Amount::Number(value)) => Ok(value),
        Some(Amount::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid amount '{text}': {e}"))),
    }
}
