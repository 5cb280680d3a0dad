//! Idempotent table provisioning.
//!
//! `ensure_table` moves a table from unknown to active along one of two
//! paths: `Unknown -> Creating -> Active` when the create request is
//! accepted, or `Unknown -> AlreadyExists -> Active` when the table was
//! already there. Both paths end with a bounded wait for `Active`.

use tracing::{debug, info, warn};

use crate::dynamodb::{StoreError, Table, TableStatus, TableStore};
use crate::error::{LoadError, Result};
use crate::utils::{poll_with_backoff, PollPolicy};

/// How `ensure_table` obtained an active table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    Reused,
}

/// Makes sure `table` exists with the requested hash key and is active.
///
/// Safe to call repeatedly: an existing table with the same hash key is
/// reused. An existing table keyed by another attribute is an error.
pub async fn ensure_table<S>(store: &S, table: &Table, poll: PollPolicy) -> Result<Provisioned>
where
    S: TableStore + ?Sized,
{
    let provisioned = match store.create_table(table).await {
        Ok(()) => {
            info!(
                "Creating table '{}' in DynamoDB. Waiting for it to become active...",
                table.name()
            );
            Provisioned::Created
        }
        Err(StoreError::AlreadyExists { .. }) => {
            check_hash_key(store, table).await?;
            warn!(
                "Table '{}' already exists. Continuing to add items to the existing table.",
                table.name()
            );
            Provisioned::Reused
        }
        Err(err) => return Err(provision_error(table, err)),
    };

    wait_until_active(store, table, poll).await?;

    if provisioned == Provisioned::Created {
        info!("Created table '{}'", table.name());
    }
    Ok(provisioned)
}

async fn check_hash_key<S>(store: &S, table: &Table) -> Result<()>
where
    S: TableStore + ?Sized,
{
    let description = store
        .describe_table(table.name())
        .await
        .map_err(|err| provision_error(table, err))?;

    match description.hash_key.as_deref() {
        Some(key) if key == table.partition_key() => Ok(()),
        other => Err(LoadError::Provision {
            table: table.name().to_string(),
            reason: format!(
                "existing table is keyed by '{}', not '{}'",
                other.unwrap_or("<none>"),
                table.partition_key()
            ),
        }),
    }
}

async fn wait_until_active<S>(store: &S, table: &Table, poll: PollPolicy) -> Result<()>
where
    S: TableStore + ?Sized,
{
    let ready = poll_with_backoff(
        move |attempt| async move {
            match store.describe_table(table.name()).await {
                Ok(description) => match description.status {
                    TableStatus::Active => Ok(Some(())),
                    TableStatus::Deleting => Err(LoadError::Provision {
                        table: table.name().to_string(),
                        reason: "table is being deleted".to_string(),
                    }),
                    status => {
                        debug!("Table '{}' is {:?} (check {})", table.name(), status, attempt);
                        Ok(None)
                    }
                },
                // Describe can lag just behind a create.
                Err(StoreError::TableNotFound { .. }) => Ok(None),
                Err(err) => Err(provision_error(table, err)),
            }
        },
        poll,
    )
    .await?;

    ready.ok_or_else(|| LoadError::ProvisionTimeout {
        table: table.name().to_string(),
        attempts: poll.max_attempts,
    })
}

fn provision_error(table: &Table, err: StoreError) -> LoadError {
    LoadError::Provision {
        table: table.name().to_string(),
        reason: err.to_string(),
    }
}
