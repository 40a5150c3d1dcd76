//! Data models for case tracking.
//!
//! - [`CaseRecord`] - A filed case, the unit stored in history
//! - [`RunMode`] - Daily or weekly run cadence
//! - [`CaseCategory`] / [`ClassifiedCases`] - New cases grouped for reporting
//! - [`api`] - Typed request/response bodies for the PACER services
//!
//! Wire types use serde with custom deserializers for fields the service
//! reports loosely (fees, login results, optional dates), found in
//! `parsers::deserializers`.

pub mod api;
pub mod case;
pub mod category;
pub mod mode;

pub use case::{CASE_FIELD_COUNT, CaseRecord};
pub use category::{CaseCategory, ClassifiedCases};
pub use mode::RunMode;
