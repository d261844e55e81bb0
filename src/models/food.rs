//! Food catalog model

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Food document stored in the `foods` collection.
///
/// The catalog shape is owned by the admin frontend; beyond the id and a
/// display name the document is opaque to the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Food {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_object_id_as_hex"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}
