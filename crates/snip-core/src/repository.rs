use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The persisted association between a short code and its long URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The lookup key.
    pub short_code: ShortCode,
    /// The original URL. Stored as given, without normalization.
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(short_code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            short_code,
            long_url: long_url.into(),
        }
    }
}

/// Gateway to the durable key-value store holding [`UrlMapping`]s.
///
/// Each call is a single round-trip to the backend. Implementations do not
/// retry, batch or cache.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Writes the mapping, overwriting any record stored under the same code.
    async fn put(&self, mapping: &UrlMapping) -> Result<()>;

    /// Retrieves the mapping for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlMapping>>;
}
