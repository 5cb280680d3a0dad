use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use std::collections::HashMap;

/// A DynamoDB item: attribute names mapped to typed values.
///
/// Records are marshalled with `serde_dynamo`, so attribute names follow the
/// record's serde names (the Open311 wire names). Strings become `S`,
/// numbers `N`, booleans `BOOL`, sequences `L` and nested structs `M`.
///
/// # Example
///
/// ```
/// use open311_loader::{dynamodb::Item, open311::City};
///
/// let city = City {
///     city_name: "Troy, NY".to_string(),
///     endpoint: "https://troy.example/open311".to_string(),
/// };
/// let item = Item::from_record(&city).unwrap();
/// assert_eq!(item.get_string("city_name"), Some(&"Troy, NY".to_string()));
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marshals any serializable record into an item.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, serde_dynamo::Error> {
        let attributes: HashMap<String, AttributeValue> =
            serde_dynamo::aws_sdk_dynamodb_1::to_item(record)?;
        Ok(Self { attributes })
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Gets the value of an attribute as a number (f64).
    ///
    /// Returns `None` if the attribute doesn't exist, is not a number, or can't be parsed as f64.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_n().ok())
            .and_then(|n| n.parse().ok())
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn into_attributes(self) -> HashMap<String, AttributeValue> {
        self.attributes
    }
}
