//! Record shapes stored in the twin database.
//!
//! The layout of each document belongs to the code that reads and writes
//! it. A record only pins `_id`; everything else is carried as a flattened
//! BSON document, so any stored document deserializes.

mod sim_run;
mod venture;
mod venture_model;

pub use sim_run::SimRun;
pub use venture::Venture;
pub use venture_model::VentureModel;

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document};
use serde::{Serialize, de::DeserializeOwned};

/// Binds a record type to the collection it lives in.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Unpin {
    const COLLECTION_NAME: &'static str;
}

pub(crate) fn timestamped() -> Document {
    let now = bson::DateTime::now();
    let mut fields = Document::new();
    fields.insert("createdAt", now);
    fields.insert("updatedAt", now);
    fields
}

pub(crate) fn datetime_field(fields: &Document, key: &str) -> Option<DateTime<Utc>> {
    fields.get_datetime(key).ok().map(|dt| dt.to_chrono())
}
