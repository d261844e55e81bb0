//! API handlers for FoodHub REST endpoints

pub mod auth;
pub mod bookings;
pub mod comments;
pub mod foods;
pub mod health;
pub mod openapi;
pub mod user_foods;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppError, models::user::Claims, AppState};

/// Extractor for an authenticated request: verifies the bearer token and
/// carries the decoded claims.
///
/// A missing header, a malformed header and a bad or expired token all
/// reject identically; the response does not reveal which check failed.
pub struct AuthenticatedUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let claims = state.services.auth.verify_token(token)?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Extractor for an admin request: runs the authentication guard, then
/// re-reads the stored role for the claim's email on every request.
pub struct AdminUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) = AuthenticatedUser::from_request_parts(parts, state).await?;

        state.services.auth.require_admin(&claims.email).await?;

        Ok(AdminUser(claims))
    }
}

/// Query string of the ownership-scoped list endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct OwnerQuery {
    /// Owner email; omitting it yields an empty list
    pub email: Option<String>,
}
