use std::fmt::Display;

use chrono::{DateTime, Duration, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ClassifiedCases, RunMode};
use crate::utils::sanitize_field;

const SECTION_RULE: &str = "  ------------------------------------------";

/// A composed report, ready for any delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Cost rounded to cents, always with two decimals
pub fn format_cost(cost: Decimal) -> String {
    let mut rounded = cost.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// Build the subject and plain-text body for a run's new cases
///
/// Each case lists its title, filing date, case type, case number and link,
/// in that order, under its category heading.
pub fn compose_report<Tz>(
    classified: &ClassifiedCases,
    cost: Decimal,
    mode: RunMode,
    sender: &str,
    recipient: &str,
    now: &DateTime<Tz>,
) -> Report
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = now.format("%m/%d/%Y").to_string();
    let time = now.format("%I:%M %p").to_string();

    let mut lines = vec![format!(
        "Hello,\nSince the last search, there are {} new cases in PACER",
        classified.total
    )];

    for (category, cases) in classified.iter() {
        lines.push(format!("\n   {}", category.label()));
        lines.push(SECTION_RULE.to_string());
        for case in cases {
            lines.push(format!("  {}", sanitize_field(&case.title)));
            lines.push(format!("  {}", case.date_filed.format("%Y-%m-%d")));
            lines.push(format!("  Case Type: {}", sanitize_field(&case.jurisdiction_type)));
            lines.push(format!("  {}", sanitize_field(&case.case_number)));
            lines.push(format!("  {}\n", sanitize_field(&case.link)));
        }
    }

    lines.push(format!("Search conducted at {} on {}.", time, date));
    lines.push(format!("This search cost ${}.", format_cost(cost)));

    let subject = match mode {
        RunMode::Daily => format!("PACER Updates {}", date),
        RunMode::Weekly => {
            let week_ago = (now.clone() - Duration::days(7)).format("%m/%d/%Y").to_string();
            format!("PACER Updates Week Of {}", week_ago)
        }
    };

    Report { from: sender.to_string(), to: recipient.to_string(), subject, text: lines.join("\n") }
}
