//! Foods repository for document operations

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{options::UpdateOptions, Collection, Database};

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        food::Food,
    },
};

use super::parse_object_id;

#[derive(Clone)]
pub struct FoodsRepository {
    collection: Collection<Food>,
}

impl FoodsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("foods"),
        }
    }

    /// Insert a new food
    pub async fn insert(&self, food: &Food) -> AppResult<InsertAck> {
        let result = self.collection.insert_one(food, None).await?;
        Ok(result.into())
    }

    /// List all foods
    pub async fn find_all(&self) -> AppResult<Vec<Food>> {
        let foods = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;
        Ok(foods)
    }

    /// Get a food by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Food>> {
        let oid = parse_object_id(id)?;
        let food = self.collection.find_one(doc! { "_id": oid }, None).await?;
        Ok(food)
    }

    /// Upsert a food by id, field-merging the provided document
    pub async fn upsert_by_id(&self, id: &str, update: Document) -> AppResult<UpdateAck> {
        let oid = parse_object_id(id)?;
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": update }, options)
            .await?;
        Ok(result.into())
    }

    /// Delete a food by id
    pub async fn delete_by_id(&self, id: &str) -> AppResult<DeleteAck> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.into())
    }
}
