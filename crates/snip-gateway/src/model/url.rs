use serde::{Deserialize, Serialize};

/// Body of a shorten request.
///
/// A missing or `null` `url` deserializes to `None` and is rejected by the
/// handler, the same as an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
