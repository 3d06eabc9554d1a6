use chrono::{DateTime, Utc};
use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::constants::VENTURES_COLLECTION;
use crate::models::{Record, datetime_field, timestamped};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Venture {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Record for Venture {
    const COLLECTION_NAME: &'static str = VENTURES_COLLECTION;
}

impl Venture {
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = timestamped();
        fields.insert("name", name.into());
        Self { id: None, fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get_str("name").ok()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        datetime_field(&self.fields, "createdAt")
    }
}
