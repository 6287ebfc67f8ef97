//! Public types for repository listing operations.

use crate::github::models::RepositorySummary;
use crate::github::pagination::PageInfo;

/// Sort key for the repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositorySort {
    /// Last push time.
    #[default]
    Pushed,
}

impl RepositorySort {
    /// Returns the API parameter value for this sort key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pushed => "pushed",
        }
    }
}

/// Visibility filter for the repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryVisibility {
    /// Only public repositories.
    #[default]
    Public,
}

impl RepositoryVisibility {
    /// Returns the API parameter value for this visibility.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
        }
    }
}

/// Relationship between the authenticated user and listed repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryAffiliation {
    /// Repositories owned by the user.
    #[default]
    Owner,
}

impl RepositoryAffiliation {
    /// Returns the API parameter value for this affiliation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
        }
    }
}

/// Parameters for listing the authenticated user's repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRepositoriesParams {
    /// Sort key. Defaults to most recently pushed.
    pub sort: RepositorySort,
    /// Visibility filter. Defaults to public.
    pub visibility: RepositoryVisibility,
    /// Affiliation filter. Defaults to owner.
    pub affiliation: RepositoryAffiliation,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListRepositoriesParams {
    /// Page size used by the review loop.
    pub const REVIEW_PAGE_SIZE: u8 = 10;

    /// Parameters for the first page of the archive review.
    #[must_use]
    pub const fn for_review() -> Self {
        Self {
            sort: RepositorySort::Pushed,
            visibility: RepositoryVisibility::Public,
            affiliation: RepositoryAffiliation::Owner,
            page: 1,
            per_page: Self::REVIEW_PAGE_SIZE,
        }
    }

    /// Returns a copy pointing at `page`.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Default for ListRepositoriesParams {
    fn default() -> Self {
        Self::for_review()
    }
}

/// One page of the repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Repository summaries in listing order.
    pub items: Vec<RepositorySummary>,
    /// Pagination state, including the next page number.
    pub page_info: PageInfo,
}
