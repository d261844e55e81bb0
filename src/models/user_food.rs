//! User-submitted food model

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Food submitted by a user, stored in the `userFoods` collection.
///
/// `email` identifies the owner and is the key for ownership-scoped reads.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserFood {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_object_id_as_hex"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}
