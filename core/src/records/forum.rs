//! Forum threads.
use super::{date, Author, Dated};
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ForumThread {
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

    #[serde(default)]
    pub replies: Vec<ForumReply>,
}

impl Dated for ForumThread {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ForumReply {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,
}
