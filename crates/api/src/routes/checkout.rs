//! Route definitions for checkout quoting.

use axum::routing::post;
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Checkout routes, nested under `/checkout`.
///
/// ```text
/// POST   /quote    quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(checkout::quote))
}
