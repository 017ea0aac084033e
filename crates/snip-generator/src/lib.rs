pub mod hash;

pub use hash::{generate_short_code, Sha1Generator, SHORT_CODE_LEN};

use snip_core::ShortCode;

/// Trait for deriving short codes from the URL being shortened.
///
/// Implementations are pure generators that don't interact with storage.
/// The same input must always produce the same code. Distinct inputs may
/// collide; callers overwrite on collision rather than resolving it.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self, input: &str) -> ShortCode;
}

impl<F> Generator for F
where
    F: Fn(&str) -> ShortCode + Send + Sync + 'static,
{
    fn generate(&self, input: &str) -> ShortCode {
        self(input)
    }
}
