//! Output formatting utilities for CLI operations.

use std::io::Write;

use tidyhub::{ReviewReport, TidyError, ToggleOutcome};

/// Writes the closing summary of an archive review.
pub fn write_review_report<W: Write>(
    writer: &mut W,
    report: &ReviewReport,
) -> Result<(), TidyError> {
    writeln!(
        writer,
        "Reviewed {prompted} of {seen} repositories across {pages} page(s); {marked} marked for archive.",
        prompted = report.prompted,
        seen = report.repositories_seen,
        pages = report.pages_fetched,
        marked = report.marked_for_archive,
    )
    .map_err(|e| io_error(&e))
}

/// Writes the post-mutation reaction groups as pretty JSON.
pub fn write_toggle_outcome<W: Write>(
    writer: &mut W,
    outcome: &ToggleOutcome,
) -> Result<(), TidyError> {
    let json = serde_json::to_string_pretty(&outcome.reaction_groups).map_err(|error| {
        TidyError::Io {
            message: format!("failed to serialise reaction groups: {error}"),
        }
    })?;

    writeln!(writer, "{json}").map_err(|e| io_error(&e))
}

fn io_error(error: &std::io::Error) -> TidyError {
    TidyError::Io {
        message: error.to_string(),
    }
}
