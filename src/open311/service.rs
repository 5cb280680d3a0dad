use serde::{Deserialize, Serialize};

use super::Record;

/// A service offered by a city; defines what requests a citizen can make.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub service_code: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub service_name: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub description: String,
    /// Whether the service defines additional attributes.
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub metadata: bool,
    /// One of `realtime`, `batch` or `blackbox`.
    #[serde(rename = "type", default, deserialize_with = "crate::open311::nullable")]
    pub service_type: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub group: String,
}

impl Record for Service {
    const KIND: &'static str = "services";
    const KEY_FIELD: &'static str = "service_code";
    const DEFAULT_TABLE: &'static str = "Services";

    fn key(&self) -> &str {
        &self.service_code
    }

    fn summary(&self) -> String {
        format!("'{}' ({})", self.service_name, self.group)
    }
}
