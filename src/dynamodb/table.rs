use crate::open311::Record;

/// Provisioned read/write throughput requested at creation time.
///
/// Defaults to 5/5, low enough for the AWS free tier. Heavily used
/// production tables will need more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub read_units: i64,
    pub write_units: i64,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            read_units: 5,
            write_units: 5,
        }
    }
}

/// DynamoDB table configuration.
///
/// Loader tables have a single partition (HASH) key of type String and no
/// sort key; every record kind is identified by one attribute.
///
/// # Example
///
/// ```
/// use open311_loader::dynamodb::{Capacity, Table};
///
/// let table = Table::new("Cities", "city_name").with_capacity(Capacity {
///     read_units: 10,
///     write_units: 10,
/// });
/// assert_eq!(table.partition_key(), "city_name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    partition_key: String,
    capacity: Capacity,
}

impl Table {
    /// Creates a new `Table` with the default capacity.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `partition_key` - The name of the partition key attribute.
    pub fn new(name: impl Into<String>, partition_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition_key: partition_key.into(),
            capacity: Capacity::default(),
        }
    }

    /// A table keyed by `R`'s key field.
    pub fn for_record<R: Record>(name: impl Into<String>) -> Self {
        Self::new(name, R::KEY_FIELD)
    }

    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
