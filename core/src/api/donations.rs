//! Donations.
use super::client::ApiClient;
use super::transport::{Request, Transport};
use crate::records::{newest_first, Donation, DonationVerification};
use crate::system::Credentials;
use crate::{Error, Result};
use serde::Deserialize;

/// Payment started for a pledged donation.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationCheckout {
    /// Payment page to send the donor to.
    #[serde(default, alias = "authorization_url")]
    pub authorization_url: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// Donations shown publicly on the home page.
    #[tracing::instrument(skip(self))]
    pub async fn public_donations(&self) -> Result<Vec<Donation>> {
        self.fetch(Request::get("/api/public/donations")).await
    }

    /// Donations visible to the member, newest first.
    #[tracing::instrument(skip_all)]
    pub async fn donations(&self, credentials: &Credentials) -> Result<Vec<Donation>> {
        let mut donations: Vec<Donation> = self
            .fetch(Request::get("/api/donations").bearer(credentials.token()))
            .await?;

        newest_first(&mut donations);
        Ok(donations)
    }

    /// Pledges a donation.
    #[tracing::instrument(skip(self, credentials))]
    pub async fn donate(&self, credentials: &Credentials, amount: u64) -> Result<DonationCheckout> {
        if amount == 0 {
            return Err(Error::Validation("Enter an amount to donate".to_string()));
        }

        let request = Request::post("/api/donations")
            .bearer(credentials.token())
            .json(serde_json::json!({ "amount": amount }));

        self.fetch(request).await
    }

    /// Verifies a payment reference returned by the payment provider.
    #[tracing::instrument(skip(self, credentials))]
    pub async fn verify_donation(
        &self,
        credentials: &Credentials,
        reference: &str,
    ) -> Result<DonationVerification> {
        let request = Request::get(format!("/api/donations/verify/{reference}"))
            .bearer(credentials.token());

        self.fetch(request).await
    }
}
