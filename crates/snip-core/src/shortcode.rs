use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The lookup key of a stored mapping.
///
/// Generated codes are 8 lowercase hexadecimal characters. Codes taken from
/// a request path are opaque: the only requirement is that they are not
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode`, rejecting the empty string.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL: `base_url`, a `/`, then the code.
    ///
    /// The base URL is used as given, so a trailing `/` on it is kept.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("a").is_ok());
        assert!(ShortCode::new("0a4d55a8").is_ok());
        assert!(ShortCode::new("nested/path").is_ok());
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = ShortCode::new("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidShortCode(_)));
    }

    #[test]
    fn display() {
        let code = ShortCode::new("0a4d55a8").unwrap();
        assert_eq!(code.to_string(), "0a4d55a8");
        assert_eq!(code.as_str(), "0a4d55a8");
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new_unchecked("0a4d55a8");
        assert_eq!(code.to_url("http://sn.ip"), "http://sn.ip/0a4d55a8");
        assert_eq!(code.to_url("http://sn.ip/"), "http://sn.ip//0a4d55a8");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new_unchecked("0a4d55a8");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"0a4d55a8\"");

        let parsed: ShortCode = serde_json::from_str("\"0a4d55a8\"").unwrap();
        assert_eq!(parsed, code);
    }
}
