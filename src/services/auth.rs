//! Token issuance and role authorization

use bson::Document;
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::Claims,
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Sign the caller-supplied identity payload into a bearer token.
    ///
    /// Whatever extra fields the sign-in payload carries are embedded in
    /// the claims untouched; only `email` is consumed by the guards.
    pub fn issue_token(&self, email: String, extra: Document) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            email,
            iat: now,
            exp: now + self.config.token_expiration_hours * 3600,
            extra,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify a presented bearer token
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        Claims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))
    }

    /// Whether the user behind this email currently holds the admin role.
    /// Re-reads the stored role on every call; no caching.
    pub async fn is_admin(&self, email: &str) -> AppResult<bool> {
        let user = self.repository.users.find_by_email(email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    /// Fail unless the user behind this email holds the admin role
    pub async fn require_admin(&self, email: &str) -> AppResult<()> {
        if self.is_admin(email).await? {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "{} does not hold the admin role",
                email
            )))
        }
    }
}
