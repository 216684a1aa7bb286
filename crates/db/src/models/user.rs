//! User entity model.
//!
//! Identity is minted by the external auth provider; this table only holds
//! the marketplace-facing profile the rest of the schema references.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub display_name: String,
    pub email: String,
}
