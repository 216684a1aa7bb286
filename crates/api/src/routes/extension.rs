//! Route definitions for owner extension decisions.

use axum::routing::post;
use axum::Router;

use crate::handlers::extension;
use crate::state::AppState;

/// Extension decision routes, nested under `/extensions`.
///
/// ```text
/// POST   /{extension_id}/approve    approve_extension
/// POST   /{extension_id}/reject     reject_extension
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{extension_id}/approve",
            post(extension::approve_extension),
        )
        .route("/{extension_id}/reject", post(extension::reject_extension))
}
