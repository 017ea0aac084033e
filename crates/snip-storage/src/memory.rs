use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::repository::{Repository, Result, UrlMapping};
use snip_core::ShortCode;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap uses sharded locks, so concurrent handlers writing different
/// codes do not block each other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, mapping: &UrlMapping) -> Result<()> {
        self.storage.insert(
            mapping.short_code.as_str().to_owned(),
            mapping.long_url.clone(),
        );
        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|long_url| UrlMapping::new(code.clone(), long_url.value().clone())))
    }
}
