//! Repository gateway for listing and archiving the user's repositories.

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};
use serde_json::json;

use crate::error::TidyError;
use crate::github::locator::{ApiBase, PersonalAccessToken, RepositoryName, RepositoryOwner};
use crate::github::models::{ApiRepository, RepositorySummary};
use crate::github::pagination::PageInfo;

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{RepositoryArchiveGateway, RepositoryListingGateway};

mod types;

pub use types::{
    ListRepositoriesParams, RepositoryAffiliation, RepositoryPage, RepositorySort,
    RepositoryVisibility,
};

const USER_REPOS_PATH: &str = "/user/repos";

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// Passing `None` yields an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns `TidyError::InvalidUrl` when the base URI cannot be parsed or
    /// `TidyError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        api_base: &ApiBase,
    ) -> Result<Self, TidyError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl RepositoryListingGateway for OctocrabRepositoryGateway {
    async fn list_owned_repositories(
        &self,
        params: &ListRepositoriesParams,
    ) -> Result<RepositoryPage, TidyError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();

        let query_params = [
            ("sort", params.sort.as_str()),
            ("visibility", params.visibility.as_str()),
            ("affiliation", params.affiliation.as_str()),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiRepository> = self
            .client
            .get(USER_REPOS_PATH, Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list repositories", &error))?;

        let next_page = page_result
            .next
            .as_ref()
            .map(|uri| page_number_from_uri(uri).unwrap_or(params.page.saturating_add(1)));

        let items: Vec<RepositorySummary> = page_result
            .items
            .into_iter()
            .map(ApiRepository::into)
            .collect();

        let page_info = PageInfo::new(params.page)
            .with_next_page(next_page);

        Ok(RepositoryPage { items, page_info })
    }
}

#[async_trait]
impl RepositoryArchiveGateway for OctocrabRepositoryGateway {
    async fn archive_repository(&self, full_name: &str) -> Result<(), TidyError> {
        let (owner, name) = split_full_name(full_name)?;
        let route = format!("/repos/{}/{}", owner.as_str(), name.as_str());

        let _updated: serde_json::Value = self
            .client
            .patch(route, Some(&json!({ "archived": true })))
            .await
            .map_err(|error| map_octocrab_error("archive repository", &error))?;

        Ok(())
    }
}

/// Reads the `page` query parameter from a `Link` URI.
fn page_number_from_uri(uri: &Uri) -> Option<u32> {
    uri.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "page" { value.parse().ok() } else { None }
    })
}

fn split_full_name(full_name: &str) -> Result<(RepositoryOwner, RepositoryName), TidyError> {
    let (owner, name) = full_name
        .split_once('/')
        .ok_or_else(|| TidyError::InvalidIssue {
            message: format!("repository `{full_name}` is not in owner/name form"),
        })?;
    Ok((RepositoryOwner::new(owner)?, RepositoryName::new(name)?))
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), TidyError> {
    if page == 0 {
        return Err(TidyError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(TidyError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > 100 {
        return Err(TidyError::InvalidPagination {
            message: "per_page must not exceed 100".to_owned(),
        });
    }

    Ok(())
}
