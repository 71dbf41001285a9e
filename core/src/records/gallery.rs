//! Gallery images.
use super::{date, Author, Dated};
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Location of the uploaded image.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub uploader: Option<Author>,

    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,
}

impl Dated for GalleryImage {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}
