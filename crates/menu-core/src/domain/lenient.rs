//! Tolerant decoding of catalog payloads
//!
//! A `GET /menus` response is decoded as one document, so a single `null` or
//! unfamiliar label must not reject the whole tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use super::MealTime;

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-form labels, trimmed; `null` and blank entries are dropped.
pub(crate) fn labels<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .flatten()
        .flatten()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect())
}

/// Keeps breakfast, lunch and dinner; any other label is ignored.
pub(crate) fn known_meal_times<'de, D>(deserializer: D) -> Result<BTreeSet<MealTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(labels(deserializer)?
        .iter()
        .filter_map(|label| MealTime::from_str(label))
        .collect())
}
