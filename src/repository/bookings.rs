//! Bookings repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::{
    error::AppResult,
    models::{
        ack::{InsertAck, UpdateAck},
        booking::{Booking, STATUS_CONFIRMED},
    },
};

use super::parse_object_id;

#[derive(Clone)]
pub struct BookingsRepository {
    collection: Collection<Booking>,
}

impl BookingsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("bookings"),
        }
    }

    /// Insert a new booking
    pub async fn insert(&self, booking: &Booking) -> AppResult<InsertAck> {
        let result = self.collection.insert_one(booking, None).await?;
        Ok(result.into())
    }

    /// List bookings owned by the given email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        let bookings = self
            .collection
            .find(doc! { "email": email }, None)
            .await?
            .try_collect()
            .await?;
        Ok(bookings)
    }

    /// List all bookings
    pub async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let bookings = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;
        Ok(bookings)
    }

    /// Set the booking status to the confirmed value
    pub async fn confirm(&self, id: &str) -> AppResult<UpdateAck> {
        let oid = parse_object_id(id)?;
        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "status": STATUS_CONFIRMED } },
                None,
            )
            .await?;
        Ok(result.into())
    }
}
