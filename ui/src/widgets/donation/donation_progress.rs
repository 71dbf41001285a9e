//! Progress toward the fundraising goal.
use alumni_core::records::DonationSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationProgressProps {
    pub summary: DonationSummary,
}

#[function_component(DonationProgress)]
pub fn donation_progress(props: &DonationProgressProps) -> Html {
    let summary = &props.summary;
    let percent = summary.percent();
    let style = format!("width: {percent:.1}%");
    let raised = group_thousands(summary.total.round() as u64);
    let goal = group_thousands(summary.goal);

    html! {
        <div class={classes!("alumni-ui-donation-progress")}>
            <div class={"progress-bar"}>
                <div class={"progress"} {style}></div>
            </div>
            <p>
                { format!("₦{raised} raised of ₦{goal} goal") }
            </p>
            <p>{ format!("{} donations · {percent:.0}%", summary.count) }</p>
        </div>
    }
}

/// Formats a whole amount with thousands separators, e.g. `5,000,000`.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
#[path = "./donation_progress_test.rs"]
mod donation_progress_test;
