use async_trait::async_trait;
use snip_core::{Repository, ShortCode, Shortener, ShortenerError, UrlMapping};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation (non-empty only)
/// - Short code derivation
/// - Persisting and resolving mappings
///
/// Note: codes are derived from the URL, so shortening the same URL twice
/// rewrites the same record. Two URLs whose codes collide overwrite each
/// other; no collision detection is performed.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl("URL is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, long_url: String) -> Result<UrlMapping, ShortenerError> {
        Self::validate_url(&long_url)?;

        let short_code = self.generator.generate(&long_url);
        let mapping = UrlMapping::new(short_code, long_url);

        self.repository.put(&mapping).await?;

        debug!(code = %mapping.short_code, url = %mapping.long_url, "stored mapping");
        Ok(mapping)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlMapping>, ShortenerError> {
        trace!(code = %code, "resolving short code");

        let mapping = self.repository.get(code).await?;
        if mapping.is_none() {
            trace!(code = %code, "short code not found");
        }
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_generator::Sha1Generator;
    use snip_storage::InMemoryRepository;

    fn test_service() -> ShortenerService<InMemoryRepository, Sha1Generator> {
        ShortenerService::new(InMemoryRepository::new(), Sha1Generator::new())
    }

    #[tokio::test]
    async fn shorten_derives_code_from_url() {
        let service = test_service();

        let mapping = service
            .shorten("https://openai.com".to_string())
            .await
            .unwrap();

        assert_eq!(mapping.short_code.as_str(), "505d63af");
        assert_eq!(mapping.long_url, "https://openai.com");
    }

    #[tokio::test]
    async fn shorten_with_empty_url_fails() {
        let service = test_service();

        let err = service.shorten(String::new()).await.unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidUrl(_)));
        assert!(service.repository().is_empty());
    }

    #[tokio::test]
    async fn shorten_accepts_unvalidated_urls() {
        let service = test_service();

        let mapping = service.shorten("not a url".to_string()).await.unwrap();
        assert_eq!(mapping.long_url, "not a url");
    }

    #[tokio::test]
    async fn shorten_twice_is_idempotent() {
        let service = test_service();

        let first = service
            .shorten("http://example.com".to_string())
            .await
            .unwrap();
        let second = service
            .shorten("http://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(service.repository().len(), 1);
    }

    #[tokio::test]
    async fn colliding_codes_overwrite() {
        let service = ShortenerService::new(InMemoryRepository::new(), |_: &str| {
            ShortCode::new_unchecked("deadbeef")
        });

        service
            .shorten("https://first.example".to_string())
            .await
            .unwrap();
        service
            .shorten("https://second.example".to_string())
            .await
            .unwrap();

        let resolved = service
            .resolve(&ShortCode::new_unchecked("deadbeef"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.long_url, "https://second.example");
    }

    #[tokio::test]
    async fn resolve_existing_code() {
        let service = test_service();
        let created = service
            .shorten("http://example.com".to_string())
            .await
            .unwrap();

        let resolved = service.resolve(&created.short_code).await.unwrap();
        assert_eq!(resolved, Some(created));
    }

    #[tokio::test]
    async fn resolve_nonexistent_code() {
        let service = test_service();

        let resolved = service
            .resolve(&ShortCode::new_unchecked("00000000"))
            .await
            .unwrap();
        assert!(resolved.is_none());
    }
}
