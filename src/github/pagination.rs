//! Pagination state for the repository listing endpoint.
//!
//! GitHub reports continuation through the `Link` response header. The
//! gateway reduces that header to the number of the next page, which is the
//! only continuation token the review loop relies on.

/// Page position of one listing response.
///
/// # Example
///
/// ```
/// use tidyhub::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2).with_next_page(Some(3));
/// assert_eq!(info.current_page(), 2);
/// assert_eq!(info.next_page(), Some(3));
/// assert!(!info.is_last_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Next page number, `None` once the listing is exhausted.
    next_page: Option<u32>,
}

impl PageInfo {
    /// Creates page info for a page with no known successor.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            next_page: None,
        }
    }

    /// Sets the next page number. Zero is normalised to `None`.
    #[must_use]
    pub const fn with_next_page(mut self, next_page: Option<u32>) -> Self {
        self.next_page = match next_page {
            Some(0) | None => None,
            Some(page) => Some(page),
        };
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the next page number, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    /// Returns true if no further page exists.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }
}
