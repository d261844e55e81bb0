//! Repository layer for document-store operations

pub mod bookings;
pub mod comments;
pub mod foods;
pub mod user_foods;
pub mod users;

use bson::oid::ObjectId;
use mongodb::Database;

use crate::error::{AppError, AppResult};

/// Parse a path id into an `ObjectId`, turning an unparsable id into a
/// typed failure instead of letting it crash the request.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::MalformedId(format!("Invalid id: {}", id)))
}

/// Main repository struct holding one handle per collection
#[derive(Clone)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub foods: foods::FoodsRepository,
    pub user_foods: user_foods::UserFoodsRepository,
    pub bookings: bookings::BookingsRepository,
    pub comments: comments::CommentsRepository,
}

impl Repository {
    /// Create a new repository over the given database handle
    pub fn new(db: &Database) -> Self {
        Self {
            users: users::UsersRepository::new(db),
            foods: foods::FoodsRepository::new(db),
            user_foods: user_foods::UserFoodsRepository::new(db),
            bookings: bookings::BookingsRepository::new(db),
            comments: comments::CommentsRepository::new(db),
        }
    }
}
