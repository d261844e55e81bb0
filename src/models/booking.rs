//! Booking model

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status written by admin confirmation. The exact string is part of the
/// wire contract with the frontend.
pub const STATUS_CONFIRMED: &str = "Confirm";

/// Booking document stored in the `bookings` collection.
///
/// `email` identifies the owner and is the key for ownership-scoped reads;
/// `status` is absent until an admin confirms the booking.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_object_id_as_hex"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}
