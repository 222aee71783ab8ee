use crate::cli::{Cli, OrderArg, TypeArg};
use crate::commands::{spinner, Result};
use crate::output;
use chrono::NaiveDate;
use tubescan_core::report::build_report;
use tubescan_core::{ReportOptions, YouTubeClient, YouTubeConfig};

pub async fn run(
    cli: &Cli,
    queries: &[String],
    video_type: TypeArg,
    order: OrderArg,
    after: Option<NaiveDate>,
    before: Option<NaiveDate>,
    max: usize,
) -> Result<()> {
    let client = YouTubeClient::new(YouTubeConfig::from_env()?)?;
    let options = ReportOptions {
        kind_filter: video_type.into(),
        order: order.into(),
        published_after: after,
        published_before: before,
        max_results: max,
    };

    tracing::debug!(queries = queries.len(), max, "building report");
    let bar = spinner("Fetching videos...");
    let report = build_report(&client, queries, &options).await;
    bar.finish_and_clear();

    output::print_report(&report?, cli.output)
}
