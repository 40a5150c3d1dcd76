use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CaseCategory, CaseRecord, ClassifiedCases};

/// The United States as a named party: `USA v.`, `U.S. v`, `US A. v.`,
/// `United States of America vs.` and similar, in any case.
static UNITED_STATES_PARTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:U\.?\s?S\.?\s?A\.?|U\.?S\.?|United\s+States(?:\s+of\s+America)?)\s*\bvs?\b\.?",
    )
    .expect("party pattern is valid")
});

/// Category a case is reported under, decided by its title
pub fn classify(case: &CaseRecord) -> CaseCategory {
    if UNITED_STATES_PARTY.is_match(&case.title) {
        CaseCategory::UnitedStatesParty
    } else {
        CaseCategory::Other
    }
}

/// Classify every searched case that is not already in history
///
/// Membership is structural equality on the whole record. Order within each
/// category follows the search order.
pub fn detect(cases: &[CaseRecord], history: &[CaseRecord]) -> ClassifiedCases {
    let mut classified = ClassifiedCases::new();
    for case in cases.iter().filter(|case| !history.contains(case)) {
        classified.push(classify(case), case.clone());
    }
    classified
}
