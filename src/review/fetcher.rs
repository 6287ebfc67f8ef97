//! Page-by-page walk over the authenticated user's repositories.

use std::num::NonZeroU32;

use tracing::{debug, warn};

use crate::error::TidyError;
use crate::github::gateway::{ListRepositoriesParams, RepositoryListingGateway, RepositoryPage};

/// Fetches listing pages in order until GitHub reports no next page.
///
/// Termination relies on the upstream `Link` header. An optional page cap
/// stops the walk early; without one the walk is unbounded. A next page that
/// does not advance past the current one ends the walk.
pub struct PageFetcher<'client, Gateway>
where
    Gateway: RepositoryListingGateway,
{
    gateway: &'client Gateway,
    params: ListRepositoriesParams,
    max_pages: Option<NonZeroU32>,
    pages_fetched: u32,
    exhausted: bool,
}

impl<'client, Gateway> PageFetcher<'client, Gateway>
where
    Gateway: RepositoryListingGateway,
{
    /// Starts at page 1 with the review listing parameters.
    #[must_use]
    pub const fn new(gateway: &'client Gateway) -> Self {
        Self::with_params(gateway, ListRepositoriesParams::for_review())
    }

    /// Starts from explicit listing parameters.
    #[must_use]
    pub const fn with_params(gateway: &'client Gateway, params: ListRepositoriesParams) -> Self {
        Self {
            gateway,
            params,
            max_pages: None,
            pages_fetched: 0,
            exhausted: false,
        }
    }

    /// Caps the number of pages fetched. `None` leaves the walk unbounded.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: Option<NonZeroU32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Whether another call to [`Self::fetch_next`] may return a page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Fetches the next page, or `None` once the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged; the fetcher does not retry.
    pub async fn fetch_next(&mut self) -> Result<Option<RepositoryPage>, TidyError> {
        if self.exhausted {
            return Ok(None);
        }

        if let Some(limit) = self.max_pages
            && self.pages_fetched >= limit.get()
        {
            warn!(
                limit = limit.get(),
                "stopping repository review at the configured page limit"
            );
            self.exhausted = true;
            return Ok(None);
        }

        let page = self.gateway.list_owned_repositories(&self.params).await?;
        self.pages_fetched = self.pages_fetched.saturating_add(1);

        let current = page.page_info.current_page();
        debug!(
            page = current,
            items = page.items.len(),
            next_page = ?page.page_info.next_page(),
            "fetched repository page"
        );

        match page.page_info.next_page() {
            None => self.exhausted = true,
            Some(next) if next > current => self.params.page = next,
            Some(next) => {
                warn!(
                    page = current,
                    next_page = next,
                    "listing reported a next page that does not advance; stopping"
                );
                self.exhausted = true;
            }
        }

        Ok(Some(page))
    }
}
