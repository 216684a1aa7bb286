//! Repository for the `extension_requests` table.

use sqlx::PgExecutor;

use lendhub_core::types::DbId;

use crate::models::extension::{ExtensionRequest, NewExtensionRequest, EXTENSION_PENDING};

/// Column list for `extension_requests` queries.
const COLUMNS: &str =
    "id, rental_id, requested_end_date, additional_cost, status, created_at, decided_at";

/// Provides CRUD operations for extension requests.
pub struct ExtensionRepo;

impl ExtensionRepo {
    /// Insert a new pending extension request, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &NewExtensionRequest,
    ) -> Result<ExtensionRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO extension_requests \
                (rental_id, requested_end_date, additional_cost) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExtensionRequest>(&query)
            .bind(input.rental_id)
            .bind(input.requested_end_date)
            .bind(input.additional_cost)
            .fetch_one(executor)
            .await
    }

    /// Find an extension request by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<ExtensionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM extension_requests WHERE id = $1");
        sqlx::query_as::<_, ExtensionRequest>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all extension requests for a rental, newest first.
    pub async fn list_for_rental(
        executor: impl PgExecutor<'_>,
        rental_id: DbId,
    ) -> Result<Vec<ExtensionRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM extension_requests \
             WHERE rental_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ExtensionRequest>(&query)
            .bind(rental_id)
            .fetch_all(executor)
            .await
    }

    /// Resolve a pending request to `approved` or `rejected`.
    ///
    /// Returns the updated row, or `None` if the request does not exist or
    /// was already decided (a concurrent decision won).
    pub async fn decide(
        executor: impl PgExecutor<'_>,
        id: DbId,
        decision: &str,
    ) -> Result<Option<ExtensionRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE extension_requests \
             SET status = $2, decided_at = NOW() \
             WHERE id = $1 AND status = '{EXTENSION_PENDING}' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExtensionRequest>(&query)
            .bind(id)
            .bind(decision)
            .fetch_optional(executor)
            .await
    }
}
