//! The interactive archive review loop.

use std::io::Write;
use std::num::NonZeroU32;

use tracing::debug;

use crate::error::TidyError;
use crate::github::gateway::RepositoryListingGateway;
use crate::github::models::RepositorySummary;

use super::answer::{parse_yes_no, validate_yes_no};
use super::decision::{ArchiveDecision, Archiver};
use super::fetcher::PageFetcher;
use super::filter::reviewable;
use super::prompt::Prompt;

/// Label shown on every archive question.
pub const ARCHIVE_LABEL: &str = "Archive";

/// Counters describing a completed review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewReport {
    /// Listing pages fetched.
    pub pages_fetched: u32,
    /// Repositories returned by the listing, before filtering.
    pub repositories_seen: usize,
    /// Repositories the operator was asked about.
    pub prompted: usize,
    /// Repositories the operator chose to archive.
    pub marked_for_archive: usize,
}

/// Walks every listing page and asks about each reviewable repository.
///
/// Pages and repositories are handled strictly in listing order. Any gateway,
/// archive, or prompt failure ends the review immediately; there is no
/// checkpoint, so a new review starts again from the first page.
pub struct ReviewSession<'deps, Gateway, Arch>
where
    Gateway: RepositoryListingGateway,
    Arch: Archiver,
{
    gateway: &'deps Gateway,
    archiver: &'deps Arch,
    max_pages: Option<NonZeroU32>,
}

impl<'deps, Gateway, Arch> ReviewSession<'deps, Gateway, Arch>
where
    Gateway: RepositoryListingGateway,
    Arch: Archiver,
{
    /// Creates a session over the listing gateway and archive action.
    #[must_use]
    pub const fn new(gateway: &'deps Gateway, archiver: &'deps Arch) -> Self {
        Self {
            gateway,
            archiver,
            max_pages: None,
        }
    }

    /// Caps how many listing pages the session fetches.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: Option<NonZeroU32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Runs the review, writing summaries to `writer` and reading answers
    /// through `prompt`.
    ///
    /// # Errors
    ///
    /// Returns the first listing, archive, prompt, or I/O error unchanged.
    pub async fn run<P, W>(&self, prompt: &mut P, writer: &mut W) -> Result<ReviewReport, TidyError>
    where
        P: Prompt,
        W: Write,
    {
        let mut fetcher = PageFetcher::new(self.gateway).with_max_pages(self.max_pages);
        let mut report = ReviewReport::default();

        while let Some(page) = fetcher.fetch_next().await? {
            report.repositories_seen = report.repositories_seen.saturating_add(page.items.len());

            for repository in reviewable(page.items) {
                let decision = ask_about(repository, prompt, writer)?;
                report.prompted = report.prompted.saturating_add(1);

                if decision.archive {
                    self.archiver.archive(&decision).await?;
                    report.marked_for_archive = report.marked_for_archive.saturating_add(1);
                } else {
                    debug!(repository = decision.target.full_name.as_str(), "keeping");
                }
            }
        }

        report.pages_fetched = fetcher.pages_fetched();
        Ok(report)
    }
}

fn ask_about<P, W>(
    repository: RepositorySummary,
    prompt: &mut P,
    writer: &mut W,
) -> Result<ArchiveDecision, TidyError>
where
    P: Prompt,
    W: Write,
{
    write_repository_summary(writer, &repository)?;

    let answer = prompt.ask(ARCHIVE_LABEL, &validate_yes_no)?;
    let archive = parse_yes_no(&answer).map_err(|error| TidyError::Prompt {
        message: format!("prompt accepted an invalid answer: {error}"),
    })?;

    Ok(ArchiveDecision {
        target: repository,
        archive,
    })
}

/// Writes the multi-line summary shown before each question.
///
/// # Errors
///
/// Returns [`TidyError::Io`] when writing fails.
pub fn write_repository_summary<W: Write>(
    writer: &mut W,
    repository: &RepositorySummary,
) -> Result<(), TidyError> {
    let pushed_at = repository
        .last_pushed_at
        .map_or_else(|| "never".to_owned(), |pushed| pushed.to_rfc3339());

    writeln!(
        writer,
        "{name}\n\tFork: {fork}\n\tArchived: {archived}\n\tPushedAt: {pushed_at}",
        name = repository.full_name,
        fork = repository.is_fork,
        archived = repository.is_archived,
    )
    .map_err(|error| TidyError::io(&error))
}
