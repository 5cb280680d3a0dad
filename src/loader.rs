//! Reads Open311 JSON files into typed records.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::error::{LoadError, Result};
use crate::open311::Record;

/// Reads `path` and parses it as a JSON array of `R`.
///
/// Records come back in file order, duplicates included; the table upserts
/// by key, so the last duplicate wins.
pub async fn load_records<R: Record>(path: impl AsRef<Path>) -> Result<Vec<R>> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&raw, path)
}

/// Parses `raw` as a JSON array of `R`. `path` only labels errors.
pub fn parse_records<R: Record>(raw: &[u8], path: &Path) -> Result<Vec<R>> {
    let records: Vec<R> = serde_json::from_slice(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.key().is_empty() {
            return Err(LoadError::EmptyKey {
                path: path.to_path_buf(),
                position: index + 1,
                field: R::KEY_FIELD,
            });
        }
        if !seen.insert(record.key()) {
            warn!(
                "Duplicate {} '{}' in '{}'; the last one wins",
                R::KEY_FIELD,
                record.key(),
                path.display()
            );
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open311::{City, Request, Service};
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn loads_records_in_file_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("services.json");
        fs::write(
            &path,
            r#"[
                {"service_code":"001","service_name":"Pothole","description":"Report a pothole",
                 "metadata":false,"type":"realtime","keywords":["street","road"],"group":"Streets"},
                {"service_code":"002","service_name":"Graffiti","metadata":true,"type":"batch",
                 "keywords":[],"group":"Sanitation"},
                {"service_code":"003","service_name":"Streetlight","group":"Streets"}
            ]"#,
        )
        .unwrap();

        let services: Vec<Service> = load_records(&path).await.unwrap();

        let codes: Vec<&str> = services.iter().map(|s| s.key()).collect();
        assert_eq!(codes, ["001", "002", "003"]);
        assert_eq!(services[0].keywords, ["street", "road"]);
        assert_eq!(services[0].service_type, "realtime");
        assert!(services[1].metadata);
        assert_eq!(services[2].description, "");
    }

    #[tokio::test]
    async fn empty_array_is_no_records() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cities.json");
        fs::write(&path, "[]").unwrap();

        let cities: Vec<City> = load_records(&path).await.unwrap();
        assert!(cities.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope.json");

        let err = load_records::<City>(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { path: ref p, .. } if p == &path));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = parse_records::<City>(br#"[{"city_name": "Troy, NY",]"#, Path::new("cities.json"))
            .unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("cities.json"));
    }

    #[test]
    fn object_instead_of_array_is_parse_error() {
        let err = parse_records::<City>(br#"{"city_name":"Troy, NY"}"#, Path::new("cities.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn wrong_field_type_is_parse_error() {
        let err = parse_records::<Request>(
            br#"[{"service_request_id":"1","zipcode":"twelve"}]"#,
            Path::new("requests.json"),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = parse_records::<City>(
            br#"[{"city_name":"Troy, NY","endpoint":"a"},{"endpoint":"b"}]"#,
            Path::new("cities.json"),
        )
        .unwrap_err();

        match err {
            LoadError::EmptyKey {
                position, field, ..
            } => {
                assert_eq!(position, 2);
                assert_eq!(field, "city_name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let cities = parse_records::<City>(
            br#"[{"city_name":"Troy, NY","endpoint":"old"},{"city_name":"Troy, NY","endpoint":"new"}]"#,
            Path::new("cities.json"),
        )
        .unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].endpoint, "new");
    }
}
