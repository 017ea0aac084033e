//! Mapping store backends.
//!
//! [`DynamoDbRepository`] is the production store. [`InMemoryRepository`]
//! keeps mappings in process memory for local runs and tests.

pub mod dynamodb;
pub mod memory;

pub use dynamodb::{
    DynamoDbRepository, DynamoDbSettings, DEFAULT_REGION, LONG_URL_ATTRIBUTE, SHORT_CODE_ATTRIBUTE,
};
pub use memory::InMemoryRepository;
pub use snip_core::repository::{Repository, Result, UrlMapping};
pub use snip_core::StorageError;
