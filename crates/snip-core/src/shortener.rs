use crate::repository::UrlMapping;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Derives the short code for `long_url`, stores the mapping and returns it.
    async fn shorten(&self, long_url: String) -> Result<UrlMapping>;

    /// Resolves a short code to its stored mapping.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlMapping>>;
}
