//! Rental agreement entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::money::Money;
use lendhub_core::types::{Date, DbId, Timestamp};

/// A row from the `rentals` table.
///
/// `total_amount` and `deposit_amount` are integer paise and never decrease
/// over the rental's life. `version` is the optimistic-concurrency token
/// bumped by every end-date/amount mutation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub product_id: DbId,
    pub borrower_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub status: String,
    pub total_amount: Money,
    pub deposit_amount: Money,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full insert DTO; the service computes the monetary fields.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub product_id: DbId,
    pub borrower_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub total_amount: Money,
    pub deposit_amount: Money,
}

/// Request body for booking a product. The borrower comes from the
/// authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRentalRequest {
    pub product_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
}

/// Request body for extending an active rental.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendRentalRequest {
    pub new_end_date: Date,
}
