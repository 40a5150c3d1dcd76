use rust_decimal::Decimal;

use super::window::SearchWindow;
use crate::client::{Result, SearchService};
use crate::models::CaseRecord;

/// Every open case found in a window, and what the search cost
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub cases: Vec<CaseRecord>,
    pub cost: Decimal,
    pub pages: u32,
}

/// Drives a paginated search to completion
pub struct SearchAggregator<'a> {
    service: &'a dyn SearchService,
}

impl<'a> SearchAggregator<'a> {
    pub fn new(service: &'a dyn SearchService) -> Self {
        Self { service }
    }

    /// Fetch every page of results for `window` in `court_id`
    ///
    /// The total page count is taken from each response as it arrives, so a
    /// stale count on an early page cannot cut the search short. Cases
    /// terminated on or after their filing date are dropped. Results keep the
    /// service's order.
    ///
    /// # Errors
    ///
    /// The first failed page fails the whole search. No partial list is
    /// returned, since reporting a partial list as complete would hide filings.
    pub fn search(&self, window: &SearchWindow, token: &str, court_id: &str) -> Result<SearchOutcome> {
        let request = window.to_request(court_id);
        let mut outcome = SearchOutcome::default();
        let mut page = 0;
        let mut total_pages = 1;

        while page < total_pages {
            let response = self.service.fetch_page(&request, page, token)?;

            outcome.cost += response.receipt.search_fee;
            total_pages = response.page_info.total_pages;

            let received = response.content.len();
            let before = outcome.cases.len();
            outcome.cases.extend(
                response.content.into_iter().filter(|hit| !hit.is_terminated()).map(|hit| hit.into_record()),
            );

            tracing::debug!(
                page,
                total_pages,
                received,
                kept = outcome.cases.len() - before,
                fee = %response.receipt.search_fee,
                "Fetched search page"
            );

            page += 1;
        }

        outcome.pages = page;
        Ok(outcome)
    }
}
