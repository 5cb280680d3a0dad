use async_trait::async_trait;
use thiserror::Error;

use crate::dynamodb::{Item, Table};

/// Lifecycle state of a table as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Creating,
    Active,
    Updating,
    Deleting,
    Other,
}

/// The parts of a table description the loader cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescription {
    pub name: String,
    pub status: TableStatus,
    /// Name of the HASH key attribute.
    pub hash_key: Option<String>,
}

/// Errors raised by a [`TableStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// `CreateTable` hit a table that is already there (`ResourceInUseException`).
    #[error("table '{table}' already exists")]
    AlreadyExists { table: String },

    #[error("table '{table}' not found")]
    TableNotFound { table: String },

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
}

/// The three table operations the loader needs from a key-value store.
///
/// [`DynamoDb`](crate::dynamodb::DynamoDb) talks to AWS; tests use an
/// in-memory double that keeps its own tables.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Requests creation of `table`. Returns [`StoreError::AlreadyExists`]
    /// when a table of that name exists, whatever its key schema.
    async fn create_table(&self, table: &Table) -> Result<(), StoreError>;

    async fn describe_table(&self, table_name: &str) -> Result<TableDescription, StoreError>;

    /// Writes `item`, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError>;
}
