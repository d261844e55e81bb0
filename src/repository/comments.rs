//! Comments repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::{
    error::AppResult,
    models::{ack::InsertAck, comment::Comment},
};

#[derive(Clone)]
pub struct CommentsRepository {
    collection: Collection<Comment>,
}

impl CommentsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("comments"),
        }
    }

    /// Insert a new comment
    pub async fn insert(&self, comment: &Comment) -> AppResult<InsertAck> {
        let result = self.collection.insert_one(comment, None).await?;
        Ok(result.into())
    }

    /// List all comments
    pub async fn find_all(&self) -> AppResult<Vec<Comment>> {
        let comments = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;
        Ok(comments)
    }
}
