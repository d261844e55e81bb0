//! Booking operations

use crate::{
    error::AppResult,
    models::{
        ack::{InsertAck, UpdateAck},
        booking::Booking,
    },
    repository::Repository,
};

use super::{authorize_owner, OwnerScope};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, booking: &Booking) -> AppResult<InsertAck> {
        self.repository.bookings.insert(booking).await
    }

    /// Ownership-scoped list: only the owner may read their bookings
    pub async fn owned_by(
        &self,
        requester: &str,
        owner: Option<&str>,
    ) -> AppResult<Vec<Booking>> {
        match authorize_owner(requester, owner)? {
            OwnerScope::Empty => Ok(Vec::new()),
            OwnerScope::Owner(email) => self.repository.bookings.find_by_email(email).await,
        }
    }

    /// List every booking across all owners
    pub async fn list_all(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.find_all().await
    }

    /// Mark a booking as confirmed
    pub async fn confirm(&self, id: &str) -> AppResult<UpdateAck> {
        self.repository.bookings.confirm(id).await
    }
}
