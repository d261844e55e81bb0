//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        ack::{DeleteAck, UpdateAck},
        user::{AdminStatus, UpsertUser, User},
    },
};

use super::{AdminUser, AuthenticatedUser};

/// Upsert a user by email. Unguarded: the frontend calls this on every
/// sign-in, before any token exists.
#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email (upsert key)")
    ),
    request_body = UpsertUser,
    responses(
        (status = 200, description = "Upsert result", body = UpdateAck),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_user(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
    Json(profile): Json<UpsertUser>,
) -> AppResult<Json<UpdateAck>> {
    profile
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = bson::to_document(&profile).map_err(|e| AppError::Internal(e.to_string()))?;
    let ack = state.services.users.upsert_profile(&email, update).await?;
    Ok(Json(ack))
}

/// Check whether an email holds the admin role. Self-or-admin: a foreign
/// email always reads as not-admin.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("email" = String, Path, description = "Email to check")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatus),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn admin_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatus>> {
    let admin = state.services.users.admin_status(&claims.email, &email).await?;
    Ok(Json(AdminStatus { admin }))
}

/// List all user accounts (admin only)
#[utoipa::path(
    get,
    path = "/users/admin",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Grant the admin role to a user (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Update result", body = UpdateAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn grant_admin(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateAck>> {
    let ack = state.services.users.grant_admin(&id).await?;
    Ok(Json(ack))
}

/// Delete a user by id (admin only)
#[utoipa::path(
    delete,
    path = "/users/admin/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let ack = state.services.users.delete(&id).await?;
    Ok(Json(ack))
}
