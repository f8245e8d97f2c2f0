//! Keypad web interface for calcpad.
//!
//! Serves an HTML keypad whose whole interaction state travels with each key
//! press, plus a small JSON endpoint over the same evaluator.

pub mod error;
pub mod handlers;
pub mod keypad;
pub mod page;

use axum::{
    Router,
    routing::{get, post},
};
use calcpad_calculator::{Calculator, WebConfig};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use error::{ApiError, ApiErrorResponse};
pub use keypad::{Key, KeypadState};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub fn create_app(calculator: Calculator) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/press", get(handlers::press))
        .route("/api/calculate", post(handlers::calculate))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(calculator)
}

/// Picks `host:port` from `CALCPAD_HOST`/`CALCPAD_PORT`, then the `[web]`
/// table, then the defaults. An unparsable port variable is skipped.
pub fn resolve_bind_addr(
    web: &WebConfig,
    host_env: Option<String>,
    port_env: Option<String>,
) -> String {
    let host = host_env
        .or_else(|| web.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = port_env
        .and_then(|raw| match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                warn!(value = %raw, "CALCPAD_PORT is not a valid port, ignoring it");
                None
            }
        })
        .or(web.port)
        .unwrap_or(DEFAULT_PORT);
    format!("{host}:{port}")
}
