use std::fmt;

use super::CaseRecord;

/// Report buckets, in the order they appear in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseCategory {
    UnitedStatesParty,
    Other,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 2] = [CaseCategory::UnitedStatesParty, CaseCategory::Other];

    pub fn label(&self) -> &'static str {
        match self {
            CaseCategory::UnitedStatesParty => "U.S. Criminal and Civil Cases",
            CaseCategory::Other => "Other Cases",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// New cases grouped by category, plus the number of new cases found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCases {
    united_states: Vec<CaseRecord>,
    other: Vec<CaseRecord>,
    pub total: usize,
}

impl ClassifiedCases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: CaseCategory, case: CaseRecord) {
        match category {
            CaseCategory::UnitedStatesParty => self.united_states.push(case),
            CaseCategory::Other => self.other.push(case),
        }
        self.total += 1;
    }

    pub fn cases(&self, category: CaseCategory) -> &[CaseRecord] {
        match category {
            CaseCategory::UnitedStatesParty => &self.united_states,
            CaseCategory::Other => &self.other,
        }
    }

    /// Buckets in report order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (CaseCategory, &[CaseRecord])> {
        CaseCategory::ALL.into_iter().map(move |category| (category, self.cases(category)))
    }
}
