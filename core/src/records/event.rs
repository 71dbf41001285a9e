//! Events.
use super::{date, Dated};
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// When the event takes place.
    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub location: String,
}

impl Dated for Event {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}
