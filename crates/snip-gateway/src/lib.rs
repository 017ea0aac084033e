//! HTTP front end of the snip URL shortener.
//!
//! [`App::router`] builds the axum router: `POST` on any path shortens the
//! JSON body's `url`, `GET` on any path redirects to the URL stored under the
//! path, and `/health` answers liveness probes.

pub mod app;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::{AppState, Timeouts};
