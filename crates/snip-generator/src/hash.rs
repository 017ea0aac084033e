use crate::Generator;
use sha1::{Digest, Sha1};
use snip_core::ShortCode;

/// Number of hex characters kept from the digest.
pub const SHORT_CODE_LEN: usize = 8;

/// Derives the short code for `input`: the first [`SHORT_CODE_LEN`]
/// characters of the lowercase hex SHA-1 digest of its UTF-8 bytes.
///
/// Total over all strings, including the empty one.
pub fn generate_short_code(input: &str) -> ShortCode {
    let digest = Sha1::digest(input.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(SHORT_CODE_LEN);
    ShortCode::new_unchecked(encoded)
}

/// The production [`Generator`], hashing URLs with [`generate_short_code`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Generator;

impl Sha1Generator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for Sha1Generator {
    fn generate(&self, input: &str) -> ShortCode {
        generate_short_code(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_sha1_prefix() {
        assert_eq!(generate_short_code("https://openai.com").as_str(), "505d63af");
        assert_eq!(generate_short_code("http://example.com").as_str(), "89dce6a4");
    }

    #[test]
    fn code_is_deterministic() {
        let first = generate_short_code("https://example.com/a");
        let second = generate_short_code("https://example.com/a");
        assert_eq!(first, second);
    }

    #[test]
    fn code_is_eight_lowercase_hex_chars() {
        let long = "a".repeat(4096);
        for input in ["", "https://example.com", "ünïcödé", long.as_str()] {
            let code = generate_short_code(input);
            assert_eq!(code.as_str().len(), SHORT_CODE_LEN);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn empty_input_is_hashed() {
        assert_eq!(generate_short_code("").as_str(), "da39a3ee");
    }

    #[test]
    fn distinct_prefixes_give_distinct_codes() {
        let a = generate_short_code("https://example.com/a");
        let b = generate_short_code("https://example.com/b");
        assert_eq!(a.as_str(), "c4ed1c21");
        assert_eq!(b.as_str(), "69a42cc2");
        assert_ne!(a, b);
    }

    #[test]
    fn generator_delegates_to_hash() {
        let generator = Sha1Generator::new();
        assert_eq!(
            generator.generate("https://openai.com"),
            generate_short_code("https://openai.com")
        );
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sha1Generator>();
    }
}
