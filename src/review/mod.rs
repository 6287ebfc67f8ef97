//! Interactive review of repositories that might be archived.
//!
//! Pages of the user's public, owned repositories are fetched most recently
//! pushed first. Forks and already archived repositories are skipped; every
//! other repository is summarised and the operator answers a yes/no archive
//! question for it.

pub mod answer;
pub mod decision;
pub mod fetcher;
pub mod filter;
pub mod prompt;
pub mod session;

pub use answer::{ValidationError, parse_yes_no, validate_yes_no};
pub use decision::{ArchiveDecision, Archiver, GatewayArchiver, LoggingArchiver};
pub use fetcher::PageFetcher;
pub use filter::{is_reviewable, reviewable};
pub use prompt::{LinePrompt, Prompt};
pub use session::{ARCHIVE_LABEL, ReviewReport, ReviewSession, write_repository_summary};
