//! Disposable backing services for integration tests.

pub mod dynamodb;
pub mod error;

pub use error::{Result, TestInfraError};
