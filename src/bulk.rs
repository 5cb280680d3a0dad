//! Sequential bulk upsert of records into an active table.

use tracing::info;

use crate::dynamodb::{Item, TableStore};
use crate::error::{LoadError, Result};
use crate::open311::Record;

/// Puts every record into `table_name`, in order, and returns how many were written.
///
/// Stops at the first record that cannot be marshalled or written; the
/// returned error carries the number of items stored before it. Puts are
/// upserts, so loading the same records again overwrites instead of
/// duplicating.
pub async fn bulk_load<S, R>(store: &S, table_name: &str, records: &[R]) -> Result<usize>
where
    S: TableStore + ?Sized,
    R: Record,
{
    let mut written = 0;

    for (index, record) in records.iter().enumerate() {
        let serialization_error = |reason: String| LoadError::Serialization {
            table: table_name.to_string(),
            position: index + 1,
            written,
            reason,
        };

        let item = Item::from_record(record).map_err(|e| serialization_error(e.to_string()))?;
        if !item
            .get_string(R::KEY_FIELD)
            .is_some_and(|key| !key.is_empty())
        {
            return Err(serialization_error(format!(
                "no string value for key attribute '{}'",
                R::KEY_FIELD
            )));
        }

        store
            .put_item(table_name, item)
            .await
            .map_err(|source| LoadError::Write {
                table: table_name.to_string(),
                key: record.key().to_string(),
                written,
                source,
            })?;

        written += 1;
        info!("Added {} to the '{}' table", record.summary(), table_name);
    }

    Ok(written)
}
