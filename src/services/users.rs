//! User account operations

use bson::Document;

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, UpdateAck},
        user::User,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Upsert a user profile by email (first sign-in creates the document)
    pub async fn upsert_profile(&self, email: &str, profile: Document) -> AppResult<UpdateAck> {
        self.repository.users.upsert_by_email(email, profile).await
    }

    /// Self-or-admin check: a requester may only learn the admin status of
    /// their own account; any other email reads as not-admin.
    pub async fn admin_status(&self, requester: &str, email: &str) -> AppResult<bool> {
        if requester != email {
            return Ok(false);
        }
        let user = self.repository.users.find_by_email(email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    /// List all user accounts
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.find_all().await
    }

    /// Grant the admin role to the user with the given id
    pub async fn grant_admin(&self, id: &str) -> AppResult<UpdateAck> {
        self.repository.users.grant_admin(id).await
    }

    /// Delete the user with the given id
    pub async fn delete(&self, id: &str) -> AppResult<DeleteAck> {
        self.repository.users.delete_by_id(id).await
    }
}
