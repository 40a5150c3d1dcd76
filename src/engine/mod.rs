//! Incremental case discovery.
//!
//! A run flows through these stages, each usable on its own:
//!
//! 1. [`window`] - Which filing dates to search for a mode and time
//! 2. [`search`] - Page through the case locator, summing fees
//! 3. [`detect`] - Find and classify cases missing from history
//! 4. [`prune`] - Merge searched cases into history, drop expired ones
//! 5. [`run`] - The [`Engine`] that sequences the stages with auth, storage
//!    and delivery
//!
//! No stage terminates the process; errors travel back to the caller.

pub mod detect;
pub mod prune;
pub mod run;
pub mod search;
pub mod window;

pub use detect::{classify, detect};
pub use prune::{RETENTION_DAYS, prune, unseen_cases};
pub use run::{Engine, RunSummary};
pub use search::{SearchAggregator, SearchOutcome};
pub use window::{SearchWindow, compute_window, window_ending_on};
