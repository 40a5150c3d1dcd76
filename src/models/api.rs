//! Wire types for the PACER authentication and case locator services.
//!
//! These are parsed at the service boundary; the engine only sees
//! [`CaseRecord`](super::CaseRecord) values built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CaseRecord;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    #[serde(rename = "loginId")]
    pub login_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest<'a> {
    #[serde(rename = "nextGenCSO")]
    pub next_gen_cso: &'a str,
}

/// Response from both `cso-auth` and `cso-logout`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(
        rename = "loginResult",
        deserialize_with = "crate::parsers::deserializers::deserialize_login_result"
    )]
    pub login_result: i64,
    #[serde(rename = "nextGenCSO", default)]
    pub next_gen_cso: Option<String>,
    #[serde(rename = "errorDescription", default)]
    pub error_description: Option<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.login_result == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "dateFiledFrom")]
    pub date_filed_from: String,
    #[serde(rename = "dateFiledTo")]
    pub date_filed_to: String,
    #[serde(rename = "courtId")]
    pub court_id: Vec<String>,
}

/// One page of case locator results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub content: Vec<CaseHit>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub receipt: Receipt,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    #[serde(
        rename = "searchFee",
        deserialize_with = "crate::parsers::deserializers::deserialize_fee"
    )]
    pub search_fee: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseHit {
    #[serde(rename = "caseNumberFull")]
    pub case_number_full: String,
    #[serde(rename = "caseTitle")]
    pub case_title: String,
    #[serde(rename = "dateFiled")]
    pub date_filed: NaiveDate,
    #[serde(
        rename = "dateTermed",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_date"
    )]
    pub date_termed: Option<NaiveDate>,
    #[serde(rename = "caseLink")]
    pub case_link: String,
    #[serde(rename = "jurisdictionType")]
    pub jurisdiction_type: String,
}

impl CaseHit {
    /// A case terminated on or after the day it was filed is already closed
    pub fn is_terminated(&self) -> bool {
        self.date_termed.is_some_and(|termed| termed >= self.date_filed)
    }

    pub fn into_record(self) -> CaseRecord {
        CaseRecord {
            case_number: self.case_number_full,
            title: self.case_title,
            date_filed: self.date_filed,
            link: self.case_link,
            jurisdiction_type: self.jurisdiction_type,
        }
    }
}
