mod health;
mod url;

pub use health::health_handler;
pub use url::url_handler;
