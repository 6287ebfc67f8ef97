//! Interactive archive review operation.

use std::io::{self, Write};

use tidyhub::github::{RepositoryArchiveGateway, RepositoryListingGateway};
use tidyhub::{
    ApiBase, GatewayArchiver, LinePrompt, LoggingArchiver, OctocrabRepositoryGateway,
    PersonalAccessToken, Prompt, ReviewReport, ReviewSession, TidyError, TidyhubConfig,
};
use tracing::info;

use super::output::write_review_report;

/// Reviews the authenticated user's public repositories on stdin/stdout.
///
/// # Errors
///
/// Returns the first listing, archive, or prompt error. A missing token
/// surfaces as [`TidyError::Authentication`] from the first listing call.
pub async fn run(config: &TidyhubConfig) -> Result<(), TidyError> {
    let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
    let mut stdout = io::stdout();
    run_with_gateway_builder(
        config,
        OctocrabRepositoryGateway::for_token,
        &mut prompt,
        &mut stdout,
    )
    .await
    .map(|_report| ())
}

/// Runs the review using a custom gateway builder.
///
/// This function is exposed for testing with fake gateways.
pub async fn run_with_gateway_builder<G, F, P, W>(
    config: &TidyhubConfig,
    build_gateway: F,
    prompt: &mut P,
    writer: &mut W,
) -> Result<ReviewReport, TidyError>
where
    G: RepositoryListingGateway + RepositoryArchiveGateway,
    F: FnOnce(Option<&PersonalAccessToken>, &ApiBase) -> Result<G, TidyError>,
    P: Prompt,
    W: Write,
{
    let token = config.personal_access_token();
    let api_base = config.api_base()?;
    let gateway = build_gateway(token.as_ref(), &api_base)?;

    let report = if config.apply_archive {
        let archiver = GatewayArchiver::new(&gateway);
        ReviewSession::new(&gateway, &archiver)
            .with_max_pages(config.max_pages())
            .run(prompt, writer)
            .await?
    } else {
        ReviewSession::new(&gateway, &LoggingArchiver)
            .with_max_pages(config.max_pages())
            .run(prompt, writer)
            .await?
    };

    info!(
        pages = report.pages_fetched,
        prompted = report.prompted,
        marked_for_archive = report.marked_for_archive,
        "review finished"
    );
    write_review_report(writer, &report)?;
    Ok(report)
}
