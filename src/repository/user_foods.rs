//! User-submitted foods repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, InsertAck},
        user_food::UserFood,
    },
};

use super::parse_object_id;

#[derive(Clone)]
pub struct UserFoodsRepository {
    collection: Collection<UserFood>,
}

impl UserFoodsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("userFoods"),
        }
    }

    /// Insert a new user food
    pub async fn insert(&self, food: &UserFood) -> AppResult<InsertAck> {
        let result = self.collection.insert_one(food, None).await?;
        Ok(result.into())
    }

    /// List user foods owned by the given email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<UserFood>> {
        let foods = self
            .collection
            .find(doc! { "email": email }, None)
            .await?
            .try_collect()
            .await?;
        Ok(foods)
    }

    /// Delete a user food by id
    pub async fn delete_by_id(&self, id: &str) -> AppResult<DeleteAck> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.into())
    }
}
