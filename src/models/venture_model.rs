use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::constants::VENTURE_MODELS_COLLECTION;
use crate::models::{Record, timestamped};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VentureModel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Record for VentureModel {
    const COLLECTION_NAME: &'static str = VENTURE_MODELS_COLLECTION;
}

impl VentureModel {
    pub fn new(venture_id: ObjectId) -> Self {
        let mut fields = timestamped();
        fields.insert("ventureId", venture_id);
        Self { id: None, fields }
    }

    pub fn venture_id(&self) -> Option<ObjectId> {
        self.fields.get_object_id("ventureId").ok()
    }
}
