//! Donations.
use super::{date, Author, Dated};
use crate::constants::DONATION_GOAL;
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Amount in naira, if recorded.
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub donor: Option<Author>,

    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default, deserialize_with = "date::deserialize")]
    pub date: Option<DateTime<Utc>>,
}

impl Dated for Donation {
    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Result of verifying a payment reference.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DonationVerification {
    #[serde(default)]
    pub success: bool,
}

/// Aggregate of public donations toward the fundraising goal.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationSummary {
    pub total: f64,
    pub count: usize,
    pub goal: u64,
}

impl DonationSummary {
    pub fn from_donations(donations: &[Donation]) -> Self {
        Self {
            total: donations.iter().filter_map(|donation| donation.amount).sum(),
            count: donations.len(),
            goal: DONATION_GOAL,
        }
    }

    /// Progress toward the goal, in percent, capped at 100.
    pub fn percent(&self) -> f64 {
        if self.goal == 0 {
            return 100.0;
        }

        (self.total / self.goal as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
#[path = "./donation_test.rs"]
mod donation_test;
