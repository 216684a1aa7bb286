//! Route definitions for the rental lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// Rental routes, nested under `/rentals`.
///
/// ```text
/// GET    /                          list_rentals
/// POST   /                          create_rental
/// GET    /{rental_id}               get_rental
/// POST   /{rental_id}/approve       approve_booking
/// POST   /{rental_id}/reject        reject_booking
/// POST   /{rental_id}/complete      complete_rental
/// POST   /{rental_id}/extend        extend_rental
/// GET    /{rental_id}/extensions    list_extensions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rental::list_rentals).post(rental::create_rental))
        .route("/{rental_id}", get(rental::get_rental))
        .route("/{rental_id}/approve", post(rental::approve_booking))
        .route("/{rental_id}/reject", post(rental::reject_booking))
        .route("/{rental_id}/complete", post(rental::complete_rental))
        .route("/{rental_id}/extend", post(rental::extend_rental))
        .route("/{rental_id}/extensions", get(rental::list_extensions))
}
