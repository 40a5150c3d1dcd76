//! Parsers for persisted history and loosely-typed service fields
//!
//! # Error Handling Strategy
//!
//! History decoding follows a **graceful degradation** approach:
//!
//! - **Individual row failures**: Rows with the wrong field count or an unparseable filing date
//!   are logged as warnings and skipped, so one damaged row does not lose the whole history.
//!
//! - **Catastrophic failure detection**: If >50% of rows fail, or >100 consecutive rows fail,
//!   decoding returns an error. A run must not treat a corrupted history as empty, since that
//!   would re-report every case in the search window as new.
//!
//! Service response fields are parsed strictly; see [`deserializers`].

pub mod deserializers;
pub mod history;

pub use history::{decode_history, encode_history};
