use super::*;

fn donation(amount: Option<f64>) -> Donation {
    Donation {
        amount,
        ..Default::default()
    }
}

#[test]
fn summary_should_skip_unrecorded_amounts() {
    let donations = vec![donation(Some(1_000.0)), donation(None), donation(Some(2_500.0))];
    let summary = DonationSummary::from_donations(&donations);

    assert_eq!(3_500.0, summary.total);
    assert_eq!(3, summary.count, "every donation should be counted");
    assert_eq!(DONATION_GOAL, summary.goal);
}

#[test]
fn percent_should_be_capped() {
    let summary = DonationSummary::from_donations(&[donation(Some(2_500_000.0))]);
    assert_eq!(50.0, summary.percent());

    let summary = DonationSummary::from_donations(&[donation(Some(9_000_000.0))]);
    assert_eq!(100.0, summary.percent(), "progress should not exceed goal");

    let summary = DonationSummary::from_donations(&[]);
    assert_eq!(0.0, summary.percent());
}

#[test]
fn donation_should_deserialize_backend_shape() {
    let json = r#"{"_id":"d1","amount":5000,"donor":{"name":"Ada"},"date":"2025-03-01T10:00:00.000Z"}"#;
    let donation: Donation = serde_json::from_str(json).expect("could not deserialize donation");

    assert_eq!(Some(5000.0), donation.amount);
    assert_eq!(Some("Ada".to_string()), donation.donor.and_then(|donor| donor.name));
    assert!(donation.date.is_some(), "date should be parsed");
}
