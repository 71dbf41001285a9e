//! Members.
use crate::types::{RecordId, Role};
use serde::{Deserialize, Serialize};

/// A registered member, as listed by the directory and admin views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, deserialize_with = "graduation_year")]
    pub graduation_year: Option<u16>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub profile_pic: Option<String>,

    #[serde(default)]
    pub role: Role,

    #[serde(default)]
    pub is_approved: bool,
}

impl Member {
    pub fn is_pending(&self) -> bool {
        !self.is_approved
    }
}

/// Author reference embedded in posts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

/// Splits members into `(pending, approved)`.
pub fn partition_by_approval(members: &[Member]) -> (Vec<&Member>, Vec<&Member>) {
    members.iter().partition(|member| member.is_pending())
}

/// Graduation years arrive as numbers or strings.
fn graduation_year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(u16),
        Text(String),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Number(year)) => Some(year),
        Some(Year::Text(year)) => year.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
#[path = "./member_test.rs"]
mod member_test;
