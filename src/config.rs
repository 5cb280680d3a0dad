//! Resolved loader configuration.

use std::path::PathBuf;

use crate::dynamodb::{Capacity, Table};
use crate::open311::Record;
use crate::utils::PollPolicy;

/// An input file and the table its records go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub table_name: String,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table_name: table_name.into(),
        }
    }

    /// The table for this source, keyed by `R`'s key field.
    pub fn table<R: Record>(&self, capacity: Capacity) -> Table {
        Table::for_record::<R>(&self.table_name).with_capacity(capacity)
    }
}

/// Everything one run of the loader needs.
///
/// A kind without a [`Source`] is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub region: String,
    /// Custom endpoint URL, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,
    pub capacity: Capacity,
    pub poll: PollPolicy,
    pub services: Option<Source>,
    pub requests: Option<Source>,
    pub cities: Option<Source>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint_url: None,
            capacity: Capacity::default(),
            poll: PollPolicy::default(),
            services: None,
            requests: None,
            cities: None,
        }
    }
}

impl LoaderConfig {
    /// True when at least one kind has an input file.
    pub fn has_sources(&self) -> bool {
        self.services.is_some() || self.requests.is_some() || self.cities.is_some()
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("DynamoDB at {} (region: {})", url, self.region),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }

    /// Loads the AWS SDK configuration for the region and endpoint.
    pub async fn sdk_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}
