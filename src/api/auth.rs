//! Token issuance endpoint

use axum::{extract::State, Json};
use bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

/// Identity payload signed into the token. The payload is arbitrary:
/// `email` must be present so the guards have an identity to consume, but
/// its shape is not checked, and extra fields ride along in the claims
/// untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Signed token response
#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Sign an identity payload into a bearer token valid for one hour
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse)
    )
)]
pub async fn issue_token(
    State(state): State<crate::AppState>,
    Json(request): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.services.auth.issue_token(request.email, request.extra)?;
    Ok(Json(TokenResponse { token }))
}
