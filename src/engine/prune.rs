use chrono::{DateTime, Duration, NaiveTime, TimeZone};

use crate::models::CaseRecord;

/// How long a case stays in history after it is filed
pub const RETENTION_DAYS: i64 = 14;

/// Searched cases that history does not hold yet, each listed once
///
/// This is what gets merged back into history: every category, not only
/// the cases that ended up in a report.
pub fn unseen_cases(cases: &[CaseRecord], history: &[CaseRecord]) -> Vec<CaseRecord> {
    let mut unseen: Vec<CaseRecord> = Vec::new();
    for case in cases {
        if !history.contains(case) && !unseen.contains(case) {
            unseen.push(case.clone());
        }
    }
    unseen
}

/// Merge `new_cases` into `history` and drop what has aged out
///
/// The result is sorted newest filing first; equal dates keep their
/// relative order (history before new cases). A case is retained while the
/// start of its filing day, in `now`'s time zone, is no earlier than the
/// instant `now - 14 days`, so a DST change inside the window shifts the
/// boundary by the offset difference. The merge itself does not deduplicate; pass the output
/// of [`unseen_cases`].
pub fn prune<Tz: TimeZone>(
    history: Vec<CaseRecord>,
    new_cases: Vec<CaseRecord>,
    now: &DateTime<Tz>,
) -> Vec<CaseRecord> {
    let cutoff = now.clone() - Duration::days(RETENTION_DAYS);
    let tz = now.timezone();

    let mut merged = history;
    merged.extend(new_cases);
    // sort_by is stable
    merged.sort_by(|a, b| b.date_filed.cmp(&a.date_filed));
    merged.retain(|case| {
        // A day that starts inside a DST gap has no local midnight; keep it
        tz.from_local_datetime(&case.date_filed.and_time(NaiveTime::MIN))
            .earliest()
            .is_none_or(|start| start >= cutoff)
    });
    merged
}
