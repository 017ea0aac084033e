use axum::http::StatusCode;
use axum::middleware;
use axum::routing::any;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::cors::cors;
use crate::handlers::{health_handler, url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// `/health` is routed on its own and bypasses CORS. Every other request
    /// falls through to [`url_handler`], behind the CORS middleware. The write
    /// timeout sits inside CORS so a timed-out response still carries the
    /// CORS headers.
    pub fn router(state: AppState) -> Router {
        let write_timeout = state.timeouts().write;

        let shortener = Router::<AppState>::new()
            .fallback(url_handler)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                write_timeout,
            ))
            .layer(middleware::from_fn(cors));

        Router::new()
            .route("/health", any(health_handler))
            .merge(shortener)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
