//! # DynamoDB Module
//!
//! The store side of the loader: table configuration, items and the
//! [`TableStore`] seam over the three operations the loader performs.
//!
//! ## Components
//!
//! - `TableStore`: create, describe and put, with "already exists" surfaced
//!   as its own error variant.
//! - `DynamoDb`: `TableStore` backed by `aws_sdk_dynamodb::Client`.
//! - `Item`: a DynamoDB item, marshalled from records with `serde_dynamo`.
//! - `Table`: table name, partition key and provisioned capacity.
//!
//! ## Usage
//!
//! Credentials come from the SDK's default chain. The usual environment
//! variables apply:
//!
//! - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, optionally `AWS_SESSION_TOKEN`
//! - `AWS_REGION`: where the tables are created.
//! - `AWS_ENDPOINT_URL`: for a custom endpoint such as DynamoDB Local.

mod client;
mod item;
#[cfg(test)]
mod mock;
mod store;
mod table;

pub use client::DynamoDb;
pub use item::Item;
#[cfg(test)]
pub use mock::MockStore;
pub use store::{StoreError, TableDescription, TableStatus, TableStore};
pub use table::{Capacity, Table};
