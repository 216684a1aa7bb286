//! Extension request entity models.

use serde::Serialize;
use sqlx::FromRow;

use lendhub_core::money::Money;
use lendhub_core::types::{Date, DbId, Timestamp};

/// Status of an extension request awaiting an owner decision.
pub const EXTENSION_PENDING: &str = "pending";
/// The owner accepted the extension; the rental was updated.
pub const EXTENSION_APPROVED: &str = "approved";
/// The owner declined the extension; the rental is untouched.
pub const EXTENSION_REJECTED: &str = "rejected";

/// A row from the `extension_requests` table.
///
/// Created by a borrower action, resolved by an owner action, never
/// mutated otherwise. `additional_cost` is precomputed at request time so
/// the owner decides on a fixed amount.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExtensionRequest {
    pub id: DbId,
    pub rental_id: DbId,
    pub requested_end_date: Date,
    pub additional_cost: Money,
    pub status: String,
    pub created_at: Timestamp,
    pub decided_at: Option<Timestamp>,
}

/// Full insert DTO for a pending extension request.
#[derive(Debug, Clone)]
pub struct NewExtensionRequest {
    pub rental_id: DbId,
    pub requested_end_date: Date,
    pub additional_cost: Money,
}
