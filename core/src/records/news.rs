//! News and board minutes.
use super::{date, Author, Dated};
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NewsPost {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,
}

impl Dated for NewsPost {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Minutes of a board meeting, published as a pdf.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoardMinutes {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub file_url: String,

    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,
}

impl Dated for BoardMinutes {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}
