use serde::{Deserialize, Serialize};

use super::Record;

/// An issue reported as a service request.
///
/// Location is given either as `lat`/`lon` (WGS84) or as a free-form
/// `address`. Datetimes are kept as the ISO 8601 strings the endpoint sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub service_request_id: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub status_notes: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub service_name: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub service_code: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub agency_responsible: String,
    /// Action expected to fulfill the request.
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub service_notice: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub requested_datetime: String,
    /// For closed requests this is when the request was closed.
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub update_datetime: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub expected_datetime: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub address_id: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub zipcode: i32,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub lat: f64,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub lon: f64,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub media_url: String,
    #[serde(default, deserialize_with = "crate::open311::nullable")]
    pub values: Vec<RequestValue>,
}

/// One allowed value of a list-type service attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestValue {
    pub key: String,
    pub name: String,
}

impl Record for Request {
    const KIND: &'static str = "requests";
    const KEY_FIELD: &'static str = "service_request_id";
    const DEFAULT_TABLE: &'static str = "Requests";

    fn key(&self) -> &str {
        &self.service_request_id
    }

    fn summary(&self) -> String {
        format!("'{}' ({})", self.service_request_id, self.service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_decode_to_zero_values() {
        let request: Request = serde_json::from_str(
            r#"{"service_request_id":"638344","status":"closed","status_notes":null,"lat":42.81}"#,
        )
        .unwrap();

        assert_eq!(request.key(), "638344");
        assert_eq!(request.status, "closed");
        assert_eq!(request.status_notes, "");
        assert_eq!(request.zipcode, 0);
        assert_eq!(request.lat, 42.81);
        assert!(request.values.is_empty());
    }

    #[test]
    fn status_reads_from_status_key() {
        let request: Request =
            serde_json::from_str(r#"{"service_request_id":"1","name":"bogus","status":"open"}"#)
                .unwrap();
        assert_eq!(request.status, "open");
    }
}
