use serde::{Deserialize, Serialize};

use super::Record;

/// A jurisdiction and the Open311 endpoint that serves it.
///
/// City names must be unique across the table, so they are usually written
/// as `"<City>, <State code>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub city_name: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub endpoint: String,
}

impl Record for City {
    const KIND: &'static str = "cities";
    const KEY_FIELD: &'static str = "city_name";
    const DEFAULT_TABLE: &'static str = "Cities";

    fn key(&self) -> &str {
        &self.city_name
    }
}
