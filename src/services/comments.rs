//! Comment operations

use crate::{
    error::AppResult,
    models::{ack::InsertAck, comment::Comment},
    repository::Repository,
};

#[derive(Clone)]
pub struct CommentsService {
    repository: Repository,
}

impl CommentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, comment: &Comment) -> AppResult<InsertAck> {
        self.repository.comments.insert(comment).await
    }

    /// List all comments; comments are global, not owner-scoped
    pub async fn list(&self) -> AppResult<Vec<Comment>> {
        self.repository.comments.find_all().await
    }
}
