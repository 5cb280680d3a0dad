use clap::{error::ErrorKind, CommandFactory, Parser};
use tokio::time::Duration;

use crate::config::{LoaderConfig, Source};
use crate::dynamodb::Capacity;
use crate::open311::{City, Record, Request, Service};
use crate::utils::PollPolicy;

/// Load Open311 Services, Requests and Cities from JSON files into DynamoDB.
///
/// Each table is created on first use. If a table already exists, items are
/// added to it; items with the same key are overwritten.
#[derive(Debug, Parser)]
#[command(name = "open311-loader", version)]
#[command(long_about = "Load Open311 Services, Requests and Cities from JSON files into DynamoDB.

Tables are created with a single String hash key and a low provisioned
throughput that fits the AWS free tier. Existing tables are reused and
items are upserted by key, so running twice does not duplicate anything.

Kinds whose file flag is empty are skipped.

Environment variables:
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_ENDPOINT_URL    - Custom endpoint (e.g., http://localhost:8000)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct Cli {
    /// JSON file containing the list of Open311 Services offered by a city.
    #[arg(long, visible_alias = "serviceFile", value_name = "FILE", default_value = "")]
    pub service_file: String,

    /// JSON file containing a list of example Open311 requests.
    #[arg(long, visible_alias = "requestFile", value_name = "FILE", default_value = "")]
    pub request_file: String,

    /// JSON file containing a list of cities and their Open311 endpoints.
    #[arg(long, visible_alias = "cityFile", value_name = "FILE", default_value = "")]
    pub city_file: String,

    /// AWS region in which the tables are created.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom DynamoDB endpoint, e.g. DynamoDB Local.
    #[arg(long, env = "AWS_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Table that holds Services.
    #[arg(long, default_value = Service::DEFAULT_TABLE)]
    pub services_table: String,

    /// Table that holds Requests.
    #[arg(long, default_value = Request::DEFAULT_TABLE)]
    pub requests_table: String,

    /// Table that holds Cities.
    #[arg(long, default_value = City::DEFAULT_TABLE)]
    pub cities_table: String,

    /// Provisioned read capacity units for new tables.
    #[arg(long, default_value_t = 5)]
    pub read_capacity: i64,

    /// Provisioned write capacity units for new tables.
    #[arg(long, default_value_t = 5)]
    pub write_capacity: i64,

    /// Maximum number of status checks while waiting for a table to become active.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub poll_attempts: u32,

    /// Delay before the second status check, doubled after each check.
    #[arg(long, default_value_t = 500, value_name = "MS")]
    pub poll_delay_ms: u64,

    /// Enable debug output.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the flags into a [`LoaderConfig`]. Empty file flags are skipped.
    pub fn into_config(self) -> LoaderConfig {
        let source = |path: String, table_name: String| {
            (!path.is_empty()).then(|| Source::new(path, table_name))
        };

        LoaderConfig {
            region: self.region,
            endpoint_url: self.endpoint_url.filter(|url| !url.is_empty()),
            capacity: Capacity {
                read_units: self.read_capacity,
                write_units: self.write_capacity,
            },
            poll: PollPolicy {
                initial_delay: Duration::from_millis(self.poll_delay_ms),
                max_attempts: self.poll_attempts,
                ..PollPolicy::default()
            },
            services: source(self.service_file, self.services_table),
            requests: source(self.request_file, self.requests_table),
            cities: source(self.city_file, self.cities_table),
        }
    }

    /// The usage error reported when no input file is given.
    pub fn missing_sources_error() -> clap::Error {
        Self::command().error(
            ErrorKind::MissingRequiredArgument,
            "specify at least one JSON file to load with --service-file, --request-file or --city-file",
        )
    }
}
