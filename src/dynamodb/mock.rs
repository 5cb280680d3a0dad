use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::dynamodb::{Item, StoreError, Table, TableDescription, TableStatus, TableStore};

/// In-memory [`TableStore`] that keeps its own tables.
///
/// New tables report `Creating` for a configurable number of status checks
/// before turning `Active`. Items are stored by their hash key value, so a
/// second put with the same key replaces the first.
#[derive(Debug, Default)]
pub struct MockStore {
    state: Mutex<MockState>,
}

#[derive(Debug, Default)]
struct MockState {
    tables: HashMap<String, MockTable>,
    creating_checks: u32,
    never_active: bool,
    create_failure: Option<String>,
    put_failure_at: Option<usize>,
    create_calls: usize,
    put_calls: usize,
}

#[derive(Debug)]
struct MockTable {
    hash_key: String,
    checks_left: u32,
    items: HashMap<String, Item>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// New tables stay `Creating` for `checks` describe calls.
    pub fn with_creating_checks(self, checks: u32) -> Self {
        self.state.lock().unwrap().creating_checks = checks;
        self
    }

    /// Tables never leave `Creating`.
    pub fn never_active(self) -> Self {
        self.state.lock().unwrap().never_active = true;
        self
    }

    /// Every `create_table` call fails with `message`.
    pub fn failing_create(self, message: &str) -> Self {
        self.state.lock().unwrap().create_failure = Some(message.to_string());
        self
    }

    /// The `nth` put (1-based, counted across all tables) fails.
    pub fn failing_put_at(self, nth: usize) -> Self {
        self.state.lock().unwrap().put_failure_at = Some(nth);
        self
    }

    /// Adds an active table keyed by `hash_key`.
    pub fn with_table(self, name: &str, hash_key: &str) -> Self {
        self.state.lock().unwrap().tables.insert(
            name.to_string(),
            MockTable {
                hash_key: hash_key.to_string(),
                checks_left: 0,
                items: HashMap::new(),
            },
        );
        self
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn put_calls(&self) -> usize {
        self.state.lock().unwrap().put_calls
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.state.lock().unwrap().tables.contains_key(name)
    }

    pub fn item_count(&self, table_name: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(table_name)
            .map_or(0, |table| table.items.len())
    }

    pub fn item(&self, table_name: &str, key: &str) -> Option<Item> {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(table_name)
            .and_then(|table| table.items.get(key).cloned())
    }
}

#[async_trait]
impl TableStore for MockStore {
    async fn create_table(&self, table: &Table) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;

        if let Some(message) = &state.create_failure {
            return Err(StoreError::AwsSdk(message.clone()));
        }
        if state.tables.contains_key(table.name()) {
            return Err(StoreError::AlreadyExists {
                table: table.name().to_string(),
            });
        }

        let checks_left = state.creating_checks;
        state.tables.insert(
            table.name().to_string(),
            MockTable {
                hash_key: table.partition_key().to_string(),
                checks_left,
                items: HashMap::new(),
            },
        );
        Ok(())
    }

    async fn describe_table(&self, table_name: &str) -> Result<TableDescription, StoreError> {
        let mut state = self.state.lock().unwrap();
        let never_active = state.never_active;
        let table = state
            .tables
            .get_mut(table_name)
            .ok_or_else(|| StoreError::TableNotFound {
                table: table_name.to_string(),
            })?;

        let status = if never_active || table.checks_left > 0 {
            table.checks_left = table.checks_left.saturating_sub(1);
            TableStatus::Creating
        } else {
            TableStatus::Active
        };

        Ok(TableDescription {
            name: table_name.to_string(),
            status,
            hash_key: Some(table.hash_key.clone()),
        })
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.put_calls += 1;

        if state.put_failure_at == Some(state.put_calls) {
            return Err(StoreError::AwsSdk(
                "ProvisionedThroughputExceededException".to_string(),
            ));
        }

        let table = state
            .tables
            .get_mut(table_name)
            .ok_or_else(|| StoreError::TableNotFound {
                table: table_name.to_string(),
            })?;
        let key = item
            .get_string(&table.hash_key)
            .cloned()
            .ok_or_else(|| StoreError::AwsSdk(format!("missing key '{}'", table.hash_key)))?;

        table.items.insert(key, item);
        Ok(())
    }
}
