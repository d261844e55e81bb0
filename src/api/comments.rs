//! Comment endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{ack::InsertAck, comment::Comment},
};

use super::AuthenticatedUser;

/// Post a comment
#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    request_body = Comment,
    responses(
        (status = 200, description = "Insert result", body = InsertAck),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_comment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(comment): Json<Comment>,
) -> AppResult<Json<InsertAck>> {
    let ack = state.services.comments.create(&comment).await?;
    Ok(Json(ack))
}

/// List all comments
#[utoipa::path(
    get,
    path = "/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All comments", body = Vec<Comment>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_comments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.services.comments.list().await?;
    Ok(Json(comments))
}
