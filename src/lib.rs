//! Loads Open311 Services, Requests and Cities from JSON files into
//! DynamoDB tables, creating each table on first use.
//!
//! The work for one record kind is three steps: [`loader::load_records`]
//! reads and parses the file, [`provision::ensure_table`] makes sure an
//! active table keyed by the record's key field exists, and
//! [`bulk::bulk_load`] upserts every record. [`pipeline::run`] chains them
//! for each kind that has an input file.

pub mod bulk;
pub mod command_line;
pub mod config;
pub mod dynamodb;
pub mod error;
pub mod loader;
pub mod logging;
pub mod open311;
pub mod pipeline;
pub mod provision;
pub mod utils;

pub use error::{LoadError, Result};
