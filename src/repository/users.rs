//! Users repository for document operations

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{options::UpdateOptions, Collection, Database};

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, UpdateAck},
        user::{User, ROLE_ADMIN},
    },
};

use super::parse_object_id;

#[derive(Clone)]
pub struct UsersRepository {
    collection: Collection<User>,
}

impl UsersRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Get user by email (unique lookup key)
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }, None).await?;
        Ok(user)
    }

    /// List all users
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }

    /// Upsert a user by email, field-merging the provided document
    pub async fn upsert_by_email(&self, email: &str, update: Document) -> AppResult<UpdateAck> {
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": update },
                options,
            )
            .await?;
        Ok(result.into())
    }

    /// Set role to admin on the user with the given id
    pub async fn grant_admin(&self, id: &str) -> AppResult<UpdateAck> {
        let oid = parse_object_id(id)?;
        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "role": ROLE_ADMIN } },
                None,
            )
            .await?;
        Ok(result.into())
    }

    /// Delete a user by id
    pub async fn delete_by_id(&self, id: &str) -> AppResult<DeleteAck> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.into())
    }
}
