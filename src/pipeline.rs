//! Runs file -> table -> bulk load for each record kind.

use std::path::Path;

use tracing::info;

use crate::bulk::bulk_load;
use crate::config::{LoaderConfig, Source};
use crate::dynamodb::{Table, TableStore};
use crate::error::Result;
use crate::loader::load_records;
use crate::open311::{City, Record, Request, Service};
use crate::provision::{ensure_table, Provisioned};
use crate::utils::PollPolicy;

/// Outcome of loading one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindReport {
    pub kind: &'static str,
    pub table: String,
    pub provisioned: Provisioned,
    pub written: usize,
}

/// Loads one file of `R` records into `table`, creating the table if needed.
pub async fn load_kind<R, S>(
    store: &S,
    path: &Path,
    table: &Table,
    poll: PollPolicy,
) -> Result<KindReport>
where
    R: Record,
    S: TableStore + ?Sized,
{
    let records: Vec<R> = load_records(path).await?;
    info!("Read {} {} from '{}'", records.len(), R::KIND, path.display());

    let provisioned = ensure_table(store, table, poll).await?;
    let written = bulk_load(store, table.name(), &records).await?;
    info!("Added {} items to the '{}' table", written, table.name());

    Ok(KindReport {
        kind: R::KIND,
        table: table.name().to_string(),
        provisioned,
        written,
    })
}

/// Loads Services, then Requests, then Cities, skipping kinds without a file.
///
/// Stops at the first failing kind; later kinds are not attempted.
pub async fn run<S>(store: &S, config: &LoaderConfig) -> Result<Vec<KindReport>>
where
    S: TableStore + ?Sized,
{
    let mut reports = Vec::new();

    if let Some(source) = &config.services {
        reports.push(load_source::<Service, S>(store, source, config).await?);
    }
    if let Some(source) = &config.requests {
        reports.push(load_source::<Request, S>(store, source, config).await?);
    }
    if let Some(source) = &config.cities {
        reports.push(load_source::<City, S>(store, source, config).await?);
    }

    Ok(reports)
}

async fn load_source<R, S>(store: &S, source: &Source, config: &LoaderConfig) -> Result<KindReport>
where
    R: Record,
    S: TableStore + ?Sized,
{
    let table = source.table::<R>(config.capacity);
    load_kind::<R, S>(store, &source.path, &table, config.poll).await
}
