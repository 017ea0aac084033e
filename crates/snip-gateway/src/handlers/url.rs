use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::percent_decode_str;
use snip_core::{ShortCode, ShortenerError};
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, error};

/// Upper bound on the size of a shorten request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Dispatches every non-health request by method: `POST` shortens, `GET`
/// resolves the path as a short code, anything else is rejected.
pub async fn url_handler(State(state): State<AppState>, request: Request) -> Result<Response> {
    let (parts, body) = request.into_parts();

    match parts.method {
        Method::POST => create_url(&state, body).await,
        Method::GET => resolve_url(&state, parts.uri.path()).await,
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn create_url(state: &AppState, body: Body) -> Result<Response> {
    let bytes = read_body(body, state.timeouts().read).await?;
    let request: ShortenRequest = serde_json::from_slice(&bytes).map_err(AppError::InvalidJson)?;
    let long_url = request.url.unwrap_or_default();

    let mapping = match state.shortener().shorten(long_url).await {
        Ok(mapping) => mapping,
        Err(ShortenerError::InvalidUrl(_)) => return Err(AppError::UrlRequired),
        Err(e) => {
            error!(error = %e, "failed to store mapping");
            return Err(AppError::Store(e));
        }
    };

    let response = ShortenResponse {
        short_url: mapping.short_code.to_url(state.base_url()),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn resolve_url(state: &AppState, path: &str) -> Result<Response> {
    let path = decode_path(path);
    let key = path.strip_prefix('/').unwrap_or(&path);
    let code = ShortCode::new(key).map_err(|_| AppError::ShortCodeRequired)?;

    let mapping = state
        .shortener()
        .resolve(&code)
        .await
        .map_err(|e| {
            error!(code = %code, error = %e, "failed to retrieve mapping");
            AppError::Retrieve(e)
        })?
        .ok_or(AppError::NotFound)?;

    let location = HeaderValue::try_from(location_value(&mapping.long_url)).map_err(|e| {
        error!(code = %code, error = %e, "stored url cannot be used as a location");
        AppError::InvalidLocation(e.to_string())
    })?;

    debug!(code = %code, "redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Percent-decodes the request path. Malformed escapes are kept verbatim.
fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Line breaks cannot appear in a header value and are sent as spaces.
fn location_value(long_url: &str) -> String {
    long_url.replace(['\r', '\n'], " ")
}

async fn read_body(body: Body, timeout: Duration) -> Result<Bytes> {
    match tokio::time::timeout(timeout, axum::body::to_bytes(body, MAX_BODY_BYTES)).await {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => Err(AppError::BodyRead(e.to_string())),
        Err(_) => Err(AppError::BodyRead(format!(
            "body not received within {timeout:?}"
        ))),
    }
}
