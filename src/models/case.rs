use chrono::NaiveDate;

/// Number of columns in a persisted history row
pub const CASE_FIELD_COUNT: usize = 5;

/// A filed case as reported by the case locator.
///
/// Two records are the same case only when all five fields match; no
/// narrower identity key is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseRecord {
    pub case_number: String,
    pub title: String,
    pub date_filed: NaiveDate,
    pub link: String,
    pub jurisdiction_type: String,
}

impl CaseRecord {
    pub fn new(
        case_number: impl Into<String>,
        title: impl Into<String>,
        date_filed: NaiveDate,
        link: impl Into<String>,
        jurisdiction_type: impl Into<String>,
    ) -> Self {
        Self {
            case_number: case_number.into(),
            title: title.into(),
            date_filed,
            link: link.into(),
            jurisdiction_type: jurisdiction_type.into(),
        }
    }

    /// Fields in persisted column order: number, title, date, link, jurisdiction
    pub fn to_row(&self) -> [String; CASE_FIELD_COUNT] {
        [
            self.case_number.clone(),
            self.title.clone(),
            self.date_filed.format("%Y-%m-%d").to_string(),
            self.link.clone(),
            self.jurisdiction_type.clone(),
        ]
    }
}
