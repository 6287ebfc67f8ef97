//! Selection of repositories worth asking about.

use tracing::debug;

use crate::github::models::RepositorySummary;

/// Returns true for repositories that are neither forks nor archived.
#[must_use]
pub const fn is_reviewable(repository: &RepositorySummary) -> bool {
    !repository.is_fork && !repository.is_archived
}

/// Lazily keeps the reviewable repositories, preserving order.
pub fn reviewable<I>(repositories: I) -> impl Iterator<Item = RepositorySummary>
where
    I: IntoIterator<Item = RepositorySummary>,
{
    repositories.into_iter().filter(|repository| {
        let keep = is_reviewable(repository);
        if !keep {
            debug!(
                repository = repository.full_name.as_str(),
                fork = repository.is_fork,
                archived = repository.is_archived,
                "skipping repository"
            );
        }
        keep
    })
}
