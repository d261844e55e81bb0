//! User-submitted food endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, InsertAck},
        user_food::UserFood,
    },
};

use super::{AuthenticatedUser, OwnerQuery};

/// Submit a food
#[utoipa::path(
    post,
    path = "/userFoods",
    tag = "userFoods",
    security(("bearer_auth" = [])),
    request_body = UserFood,
    responses(
        (status = 200, description = "Insert result", body = InsertAck),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user_food(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(food): Json<UserFood>,
) -> AppResult<Json<InsertAck>> {
    let ack = state.services.user_foods.create(&food).await?;
    Ok(Json(ack))
}

/// List the requester's submissions, scoped by the query-string email
#[utoipa::path(
    get,
    path = "/userFoods",
    tag = "userFoods",
    security(("bearer_auth" = [])),
    params(OwnerQuery),
    responses(
        (status = 200, description = "Submissions owned by the requester", body = Vec<UserFood>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Email does not match the token", body = crate::error::ErrorResponse)
    )
)]
pub async fn my_user_foods(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<UserFood>>> {
    let foods = state
        .services
        .user_foods
        .owned_by(&claims.email, query.email.as_deref())
        .await?;
    Ok(Json(foods))
}

/// Delete a submission by id. Any authenticated caller may delete any id;
/// the original surface has no ownership check here.
#[utoipa::path(
    delete,
    path = "/userFoods/{id}",
    tag = "userFoods",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteAck),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user_food(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let ack = state.services.user_foods.delete(&id).await?;
    Ok(Json(ack))
}
