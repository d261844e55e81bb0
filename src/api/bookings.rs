//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        ack::{InsertAck, UpdateAck},
        booking::Booking,
    },
};

use super::{AdminUser, AuthenticatedUser, OwnerQuery};

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = Booking,
    responses(
        (status = 200, description = "Insert result", body = InsertAck),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(booking): Json<Booking>,
) -> AppResult<Json<InsertAck>> {
    let ack = state.services.bookings.create(&booking).await?;
    Ok(Json(ack))
}

/// List the requester's bookings, scoped by the query-string email
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(OwnerQuery),
    responses(
        (status = 200, description = "Bookings owned by the requester", body = Vec<Booking>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Email does not match the token", body = crate::error::ErrorResponse)
    )
)]
pub async fn my_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state
        .services
        .bookings
        .owned_by(&claims.email, query.email.as_deref())
        .await?;
    Ok(Json(bookings))
}

/// List all bookings across owners. Unguarded, matching the original
/// surface.
#[utoipa::path(
    get,
    path = "/admin/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "All bookings", body = Vec<Booking>)
    )
)]
pub async fn list_all_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list_all().await?;
    Ok(Json(bookings))
}

/// Confirm a booking (admin only): sets its status to "Confirm"
#[utoipa::path(
    patch,
    path = "/admin/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Update result", body = UpdateAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn confirm_booking(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateAck>> {
    let ack = state.services.bookings.confirm(&id).await?;
    Ok(Json(ack))
}
