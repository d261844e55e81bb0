//! Data models for FoodHub documents and API payloads

pub mod ack;
pub mod booking;
pub mod comment;
pub mod food;
pub mod user;
pub mod user_food;

use bson::oid::ObjectId;
use serde::Serializer;

/// Render a document id as a hex string in JSON responses. Documents are
/// only ever serialized with an id present on the way out; inserts carry
/// `None` and skip the field.
pub(crate) fn serialize_object_id_as_hex<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
