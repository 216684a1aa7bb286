//! HTTP-level integration tests for the extension workflow.
//!
//! Extension routing depends on how far "today" is from the rental's end
//! date, so these tests build bookings relative to the current date.
//! The listing rate is 300 rupees per week, so 7 added days always cost
//! exactly 30_000 paise.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, create_product_via_api, create_user, get, post, post_json, token_for};
use sqlx::PgPool;

fn day(offset: i64) -> String {
    (Utc::now().date_naive() + Duration::days(offset)).to_string()
}

/// Seed an approved (active) rental ending `end_offset` days from today.
/// Returns `(owner_token, borrower_token, rental_id, total_amount)`.
async fn seed_active_rental(pool: &PgPool, end_offset: i64) -> (String, String, i64, i64) {
    let owner_id = create_user(pool, "owner@example.com").await;
    let borrower_id = create_user(pool, "borrower@example.com").await;
    let owner_token = token_for(owner_id);
    let borrower_token = token_for(borrower_id);
    let product_id = create_product_via_api(pool, &owner_token, 30_000, "week").await;

    let created = post_json(
        build_test_app(pool.clone()),
        "/api/v1/rentals",
        &borrower_token,
        serde_json::json!({
            "product_id": product_id,
            "start_date": day(end_offset - 7),
            "end_date": day(end_offset),
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let json = body_json(created).await;
    let rental_id = json["data"]["id"].as_i64().unwrap();
    let total_amount = json["data"]["total_amount"].as_i64().unwrap();

    let approved = post(
        build_test_app(pool.clone()),
        &format!("/api/v1/rentals/{rental_id}/approve"),
        &owner_token,
    )
    .await;
    assert_eq!(approved.status(), StatusCode::OK);

    (owner_token, borrower_token, rental_id, total_amount)
}

async fn extend(
    pool: &PgPool,
    token: &str,
    rental_id: i64,
    new_end: String,
) -> axum::response::Response {
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/rentals/{rental_id}/extend"),
        token,
        serde_json::json!({ "new_end_date": new_end }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Auto-approve inside the 7-day window
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_extension_inside_window_applies_immediately(pool: PgPool) {
    // Ends in 3 days; extending by 7 stays inside the window.
    let (_, borrower_token, rental_id, total) = seed_active_rental(&pool, 3).await;

    let response = extend(&pool, &borrower_token, rental_id, day(10)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rental = &json["data"]["rental"];
    assert_eq!(rental["end_date"], day(10));
    assert_eq!(rental["total_amount"], total + 30_000);
    assert_eq!(rental["status"], "active");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_boundary_seven_days_auto_approves(pool: PgPool) {
    let (_, borrower_token, rental_id, _) = seed_active_rental(&pool, 7).await;

    let response = extend(&pool, &borrower_token, rental_id, day(8)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["rental"].is_object());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_boundary_eight_days_requires_owner(pool: PgPool) {
    let (_, borrower_token, rental_id, total) = seed_active_rental(&pool, 8).await;

    let response = extend(&pool, &borrower_token, rental_id, day(9)).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let json = body_json(response).await;
    let extension = &json["data"]["extension"];
    assert_eq!(extension["status"], "pending");
    assert_eq!(extension["requested_end_date"], day(9));

    // The rental itself is untouched.
    let fetched = get(
        build_test_app(pool),
        &format!("/api/v1/rentals/{rental_id}"),
        &borrower_token,
    )
    .await;
    let rental = body_json(fetched).await;
    assert_eq!(rental["data"]["end_date"], day(8));
    assert_eq!(rental["data"]["total_amount"].as_i64().unwrap(), total);
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_lapsed_rental_rejects_extension(pool: PgPool) {
    // Ended yesterday but still active.
    let (_, borrower_token, rental_id, _) = seed_active_rental(&pool, -1).await;

    let response = extend(&pool, &borrower_token, rental_id, day(5)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "RENTAL_EXPIRED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_backward_extension_rejected(pool: PgPool) {
    let (_, borrower_token, rental_id, _) = seed_active_rental(&pool, 5).await;

    let response = extend(&pool, &borrower_token, rental_id, day(5)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pending_rental_cannot_extend(pool: PgPool) {
    let owner_token = token_for(create_user(&pool, "o@example.com").await);
    let borrower_token = token_for(create_user(&pool, "b@example.com").await);
    let product_id = create_product_via_api(&pool, &owner_token, 30_000, "week").await;

    let created = post_json(
        build_test_app(pool.clone()),
        "/api/v1/rentals",
        &borrower_token,
        serde_json::json!({
            "product_id": product_id,
            "start_date": day(0),
            "end_date": day(5),
        }),
    )
    .await;
    let rental_id = body_json(created).await["data"]["id"].as_i64().unwrap();

    // Never approved: still pending.
    let response = extend(&pool, &borrower_token, rental_id, day(9)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "INVALID_STATE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_only_borrower_may_extend(pool: PgPool) {
    let (owner_token, _, rental_id, _) = seed_active_rental(&pool, 3).await;

    let response = extend(&pool, &owner_token, rental_id, day(10)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Owner decision on recorded requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_approval_applies_recorded_cost(pool: PgPool) {
    let (owner_token, borrower_token, rental_id, total) = seed_active_rental(&pool, 10).await;

    let requested = extend(&pool, &borrower_token, rental_id, day(17)).await;
    assert_eq!(requested.status(), StatusCode::ACCEPTED);
    let extension_id = body_json(requested).await["data"]["extension"]["id"]
        .as_i64()
        .unwrap();

    let response = post(
        build_test_app(pool.clone()),
        &format!("/api/v1/extensions/{extension_id}/approve"),
        &owner_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let rental = body_json(response).await;
    assert_eq!(rental["data"]["end_date"], day(17));
    assert_eq!(rental["data"]["total_amount"], total + 30_000);

    // The borrower hears about it.
    let inbox = get(
        build_test_app(pool.clone()),
        "/api/v1/notifications?unread_only=true",
        &borrower_token,
    )
    .await;
    let json = body_json(inbox).await;
    assert_eq!(json["data"][0]["notif_type"], "extension_approved");

    // The request itself is resolved.
    let listed = get(
        build_test_app(pool),
        &format!("/api/v1/rentals/{rental_id}/extensions"),
        &borrower_token,
    )
    .await;
    assert_eq!(body_json(listed).await["data"][0]["status"], "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_rejection_leaves_rental_untouched(pool: PgPool) {
    let (owner_token, borrower_token, rental_id, total) = seed_active_rental(&pool, 10).await;

    let requested = extend(&pool, &borrower_token, rental_id, day(17)).await;
    let extension_id = body_json(requested).await["data"]["extension"]["id"]
        .as_i64()
        .unwrap();

    let response = post(
        build_test_app(pool.clone()),
        &format!("/api/v1/extensions/{extension_id}/reject"),
        &owner_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/rentals/{rental_id}"),
        &borrower_token,
    )
    .await;
    let rental = body_json(fetched).await;
    assert_eq!(rental["data"]["end_date"], day(10));
    assert_eq!(rental["data"]["total_amount"].as_i64().unwrap(), total);

    let inbox = get(
        build_test_app(pool),
        "/api/v1/notifications?unread_only=true",
        &borrower_token,
    )
    .await;
    assert_eq!(
        body_json(inbox).await["data"][0]["notif_type"],
        "extension_rejected"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_owner_cannot_decide_extension(pool: PgPool) {
    let (_, borrower_token, rental_id, _) = seed_active_rental(&pool, 10).await;

    let requested = extend(&pool, &borrower_token, rental_id, day(17)).await;
    let extension_id = body_json(requested).await["data"]["extension"]["id"]
        .as_i64()
        .unwrap();

    let response = post(
        build_test_app(pool),
        &format!("/api/v1/extensions/{extension_id}/approve"),
        &borrower_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_extension_cannot_be_decided_twice(pool: PgPool) {
    let (owner_token, borrower_token, rental_id, _) = seed_active_rental(&pool, 10).await;

    let requested = extend(&pool, &borrower_token, rental_id, day(17)).await;
    let extension_id = body_json(requested).await["data"]["extension"]["id"]
        .as_i64()
        .unwrap();

    let approve = post(
        build_test_app(pool.clone()),
        &format!("/api/v1/extensions/{extension_id}/approve"),
        &owner_token,
    )
    .await;
    assert_eq!(approve.status(), StatusCode::OK);

    let reject = post(
        build_test_app(pool),
        &format!("/api/v1/extensions/{extension_id}/reject"),
        &owner_token,
    )
    .await;
    assert_eq!(reject.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Monotonic total across a sequence of extensions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_total_never_decreases_across_extensions(pool: PgPool) {
    let (_, borrower_token, rental_id, mut last_total) = seed_active_rental(&pool, 2).await;

    for offset in [4, 6, 8] {
        let response = extend(&pool, &borrower_token, rental_id, day(offset)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let total = body_json(response).await["data"]["rental"]["total_amount"]
            .as_i64()
            .unwrap();
        assert!(total > last_total, "total must grow with every extension");
        last_total = total;
    }
}
