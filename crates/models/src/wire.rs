//! Serde helpers for the backend's wire quirks.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional URL-ish field, treating the backend's `"string"`
/// placeholder and empty strings as absent.
///
/// The backend fills unset URL columns with the literal text `string`
/// (a leftover Swagger default), so the raw value is unusable as a URL.
pub fn opt_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty() && s != "string"))
}
