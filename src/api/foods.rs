//! Food catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        food::Food,
    },
};

use super::AdminUser;

/// Add a food to the catalog (admin only)
#[utoipa::path(
    post,
    path = "/foods/admin",
    tag = "foods",
    security(("bearer_auth" = [])),
    request_body = Food,
    responses(
        (status = 200, description = "Insert result", body = InsertAck),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_food(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Json(food): Json<Food>,
) -> AppResult<Json<InsertAck>> {
    let ack = state.services.foods.create(&food).await?;
    Ok(Json(ack))
}

/// List the food catalog. Unguarded: the public menu.
#[utoipa::path(
    get,
    path = "/foods/admin",
    tag = "foods",
    responses(
        (status = 200, description = "All foods", body = Vec<Food>)
    )
)]
pub async fn list_foods(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Food>>> {
    let foods = state.services.foods.list().await?;
    Ok(Json(foods))
}

/// Get a food by id (admin only). A missing document reads as `null`.
#[utoipa::path(
    get,
    path = "/foods/admin/{id}",
    tag = "foods",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Food id")
    ),
    responses(
        (status = 200, description = "Food or null", body = Food),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_food(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Food>>> {
    let food = state.services.foods.get(&id).await?;
    Ok(Json(food))
}

/// Upsert a food by id (admin only)
#[utoipa::path(
    put,
    path = "/foods/admin/{id}",
    tag = "foods",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Food id")
    ),
    request_body = Food,
    responses(
        (status = 200, description = "Upsert result", body = UpdateAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_food(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
    Json(food): Json<Food>,
) -> AppResult<Json<UpdateAck>> {
    let update = bson::to_document(&food).map_err(|e| AppError::Internal(e.to_string()))?;
    let ack = state.services.foods.upsert(&id, update).await?;
    Ok(Json(ack))
}

/// Delete a food by id (admin only)
#[utoipa::path(
    delete,
    path = "/foods/admin/{id}",
    tag = "foods",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Food id")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or not admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_food(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let ack = state.services.foods.delete(&id).await?;
    Ok(Json(ack))
}
