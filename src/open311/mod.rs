//! # Open311 Record Model
//!
//! Plain data shapes for the three kinds of Open311 documents the loader
//! understands. Field names on the wire are snake_case, exactly as published
//! by GeoReport v2 endpoints (see <https://wiki.open311.org/GeoReport_v2/>).
//!
//! Every kind implements [`Record`], which names the attribute used as the
//! table's hash key and the table it lands in by default.

mod city;
mod request;
mod service;

pub use city::City;
pub use request::{Request, RequestValue};
pub use service::Service;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// A record that can be read from an Open311 JSON file and stored as one item.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Plural display name used in progress messages.
    const KIND: &'static str;
    /// Wire name of the attribute that uniquely identifies a record.
    const KEY_FIELD: &'static str;
    /// Table the record kind is written to unless overridden.
    const DEFAULT_TABLE: &'static str;

    /// Returns the value of the key attribute.
    fn key(&self) -> &str;

    /// Short label for per-item log lines.
    fn summary(&self) -> String {
        format!("'{}'", self.key())
    }
}

/// Decodes `null` as the type's zero value, like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
