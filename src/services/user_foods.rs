//! User-submitted food operations

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, InsertAck},
        user_food::UserFood,
    },
    repository::Repository,
};

use super::{authorize_owner, OwnerScope};

#[derive(Clone)]
pub struct UserFoodsService {
    repository: Repository,
}

impl UserFoodsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, food: &UserFood) -> AppResult<InsertAck> {
        self.repository.user_foods.insert(food).await
    }

    /// Ownership-scoped list: only the owner may read their submissions
    pub async fn owned_by(
        &self,
        requester: &str,
        owner: Option<&str>,
    ) -> AppResult<Vec<UserFood>> {
        match authorize_owner(requester, owner)? {
            OwnerScope::Empty => Ok(Vec::new()),
            OwnerScope::Owner(email) => self.repository.user_foods.find_by_email(email).await,
        }
    }

    /// Delete by id. Deliberately not ownership-checked: any authenticated
    /// caller may delete any submission.
    pub async fn delete(&self, id: &str) -> AppResult<DeleteAck> {
        self.repository.user_foods.delete_by_id(id).await
    }
}
