//! Food catalog operations

use bson::Document;

use crate::{
    error::AppResult,
    models::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        food::Food,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct FoodsService {
    repository: Repository,
}

impl FoodsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, food: &Food) -> AppResult<InsertAck> {
        self.repository.foods.insert(food).await
    }

    pub async fn list(&self) -> AppResult<Vec<Food>> {
        self.repository.foods.find_all().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Food>> {
        self.repository.foods.find_by_id(id).await
    }

    pub async fn upsert(&self, id: &str, food: Document) -> AppResult<UpdateAck> {
        self.repository.foods.upsert_by_id(id, food).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteAck> {
        self.repository.foods.delete_by_id(id).await
    }
}
