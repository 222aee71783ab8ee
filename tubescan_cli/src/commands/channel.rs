use crate::cli::{Cli, OrderArg};
use crate::commands::{spinner, Result};
use crate::output;
use tubescan_core::report::channel_report;
use tubescan_core::{ChannelQuery, YouTubeClient, YouTubeConfig};

pub async fn run(cli: &Cli, url: &str, order: OrderArg, max: usize) -> Result<()> {
    let client = YouTubeClient::new(YouTubeConfig::from_env()?)?;
    let query = ChannelQuery {
        channel: url.to_string(),
        order: order.into(),
        max_results: max,
    };

    let bar = spinner("Fetching channel uploads...");
    let fetch = channel_report(&client, &query).await;
    bar.finish_and_clear();

    output::print_channel(&fetch, url, cli.output)
}
