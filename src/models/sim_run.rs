use std::str::FromStr;

use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::constants::SIM_RUNS_COLLECTION;
use crate::enums::SimRunStatus;
use crate::models::{Record, timestamped};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimRun {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Record for SimRun {
    const COLLECTION_NAME: &'static str = SIM_RUNS_COLLECTION;
}

impl SimRun {
    pub fn queued(venture_model_id: ObjectId) -> Self {
        let mut fields = timestamped();
        fields.insert("ventureModelId", venture_model_id);
        fields.insert("status", SimRunStatus::Queued.to_string());
        Self { id: None, fields }
    }

    /// `None` when the status is absent or not one this crate knows.
    pub fn status(&self) -> Option<SimRunStatus> {
        let status = self.fields.get_str("status").ok()?;
        SimRunStatus::from_str(status).ok()
    }
}
