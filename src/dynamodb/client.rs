use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::DisplayErrorContext,
    operation::{create_table::CreateTableError, describe_table::DescribeTableError},
    types::{
        AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType, TableStatus as AwsTableStatus,
    },
    Client,
};
use tracing::{debug, info};

use crate::dynamodb::{Item, StoreError, Table, TableDescription, TableStatus, TableStore};

/// DynamoDB client wrapper implementing [`TableStore`].
///
/// Tables are created with a single String HASH key and provisioned
/// throughput taken from the [`Table`]'s [`Capacity`](crate::dynamodb::Capacity).
/// `put_item` is an upsert: DynamoDB replaces any item with the same key, so
/// loading the same file twice leaves one item per key.
///
/// # Example
///
/// ```no_run
/// use open311_loader::dynamodb::{DynamoDb, Item, Table, TableStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_from_env().await;
/// let client = DynamoDb::new(&config);
///
/// client.create_table(&Table::new("Cities", "city_name")).await?;
///
/// let item = Item::new()
///     .set_string("city_name", "Troy, NY")
///     .set_string("endpoint", "https://troy.example/open311");
/// client.put_item("Cities", item).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl TableStore for DynamoDb {
    async fn create_table(&self, table: &Table) -> Result<(), StoreError> {
        let attribute_definitions = vec![AttributeDefinition::builder()
            .attribute_name(table.partition_key())
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| StoreError::AwsSdk(e.to_string()))?];

        let key_schema = vec![KeySchemaElement::builder()
            .attribute_name(table.partition_key())
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| StoreError::AwsSdk(e.to_string()))?];

        let capacity = table.capacity();
        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(capacity.read_units)
            .write_capacity_units(capacity.write_units)
            .build()
            .map_err(|e| StoreError::AwsSdk(e.to_string()))?;

        let result = self
            .client
            .create_table()
            .table_name(table.name())
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(key_schema))
            .provisioned_throughput(throughput)
            .send()
            .await;

        match result {
            Ok(_) => {
                info!("Create request accepted for table '{}'", table.name());
                Ok(())
            }
            Err(err)
                if matches!(
                    err.as_service_error(),
                    Some(CreateTableError::ResourceInUseException(_))
                ) =>
            {
                Err(StoreError::AlreadyExists {
                    table: table.name().to_string(),
                })
            }
            Err(err) => Err(StoreError::AwsSdk(DisplayErrorContext(&err).to_string())),
        }
    }

    async fn describe_table(&self, table_name: &str) -> Result<TableDescription, StoreError> {
        let output = self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(DescribeTableError::ResourceNotFoundException(_)) => {
                    StoreError::TableNotFound {
                        table: table_name.to_string(),
                    }
                }
                _ => StoreError::AwsSdk(DisplayErrorContext(&err).to_string()),
            })?;

        let table = output.table().ok_or_else(|| StoreError::TableNotFound {
            table: table_name.to_string(),
        })?;

        let status = match table.table_status() {
            Some(AwsTableStatus::Creating) => TableStatus::Creating,
            Some(AwsTableStatus::Active) => TableStatus::Active,
            Some(AwsTableStatus::Updating) => TableStatus::Updating,
            Some(AwsTableStatus::Deleting) => TableStatus::Deleting,
            _ => TableStatus::Other,
        };

        let hash_key = table
            .key_schema()
            .iter()
            .find(|element| element.key_type() == &KeyType::Hash)
            .map(|element| element.attribute_name().to_string());

        Ok(TableDescription {
            name: table_name.to_string(),
            status,
            hash_key,
        })
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.into_attributes()))
            .send()
            .await
            .map_err(|err| StoreError::AwsSdk(DisplayErrorContext(&err).to_string()))?;

        debug!("Item put into '{table_name}'");
        Ok(())
    }
}
