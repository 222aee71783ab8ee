//! Terminal rendering for reports: compact tables per section, or raw JSON.

use crate::cli::OutputFormat;
use crate::commands::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use tubescan_core::{ChannelFetch, ChannelUpload, Report, SearchHit, Stat, VideoKind};

const TITLE_WIDTH: usize = 60;

pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("{}", "No results found.".yellow());
        return Ok(());
    }

    for section in &report.sections {
        println!();
        println!(
            "{}  {}",
            section.query.bold().cyan(),
            format!("({} videos)", section.hits.len()).dimmed()
        );
        if section.interrupted {
            println!(
                "{}",
                "  fetch was interrupted upstream; results are partial".yellow()
            );
        }
        println!("{}", hits_table(&section.hits));
    }
    println!();
    Ok(())
}

pub fn print_channel(fetch: &ChannelFetch, channel: &str, format: OutputFormat) -> Result<()> {
    match fetch {
        ChannelFetch::NotFound => {
            if format == OutputFormat::Json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "channel": channel,
                        "found": false,
                    }))?
                );
            } else {
                println!("{} {}", "Channel not found:".yellow(), channel);
            }
        }
        ChannelFetch::Found(uploads) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(uploads)?);
                return Ok(());
            }
            println!();
            println!(
                "{}  {}",
                channel.bold().cyan(),
                format!("({} uploads)", uploads.len()).dimmed()
            );
            println!("{}", uploads_table(uploads));
            println!();
        }
    }
    Ok(())
}

fn hits_table(hits: &[SearchHit]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Channel", "Published", "Views", "Duration", "Type"]);
    for hit in hits {
        table.add_row(vec![
            Cell::new(truncate(&hit.title, TITLE_WIDTH)),
            Cell::new(&hit.channel),
            Cell::new(&hit.published_at),
            Cell::new(fmt_stat(hit.views)),
            Cell::new(fmt_duration(hit.duration_seconds)),
            Cell::new(fmt_kind(hit.kind)),
        ]);
    }
    table
}

fn uploads_table(uploads: &[ChannelUpload]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Uploaded", "Views", "Likes", "Duration", "Type"]);
    for upload in uploads {
        table.add_row(vec![
            Cell::new(truncate(&upload.video_title, TITLE_WIDTH)),
            Cell::new(&upload.uploaded_at),
            Cell::new(upload.view_count.to_string()),
            Cell::new(upload.like_count.to_string()),
            Cell::new(fmt_duration(upload.duration_seconds)),
            Cell::new(fmt_kind(upload.format)),
        ]);
    }
    table
}

fn fmt_kind(kind: VideoKind) -> &'static str {
    match kind {
        VideoKind::Short => "Short",
        VideoKind::Long => "Long",
    }
}

fn fmt_stat(stat: Stat) -> String {
    match stat {
        Stat::Count(n) => n.to_string(),
        Stat::Unavailable => "N/A".to_string(),
    }
}

fn fmt_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
