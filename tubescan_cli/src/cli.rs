use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tubescan_core::{KindFilter, SearchOrder};

#[derive(Parser)]
#[command(name = "tubescan")]
#[command(about = "tubescan - YouTube search reports in the terminal")]
#[command(version)]
#[command(after_help = "\x1b[1;36mQuick Start:\x1b[0m
  tubescan search \"rust tutorial\"             Search videos for one query
  tubescan search \"lofi\" \"city pop\" --max 30  One report section per query
  tubescan search \"speedrun\" --type short     Only shorts (<= 60s)
  tubescan channel https://youtube.com/@veritasium --order view-count

\x1b[1;36mAuthentication:\x1b[0m
  Set YOUTUBE_API_KEY to a YouTube Data API v3 key.

\x1b[1;36mMore Info:\x1b[0m
  tubescan <command> --help                   Get help for any command")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search videos by one or more queries and build a report
    ///
    /// Each query becomes one report section; empty sections are dropped.
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  tubescan search \"rust async\"
  tubescan search \"rust\" \"golang\" --order view-count --max 50
  tubescan search \"news\" --after 2024-01-01 --before 2024-06-30")]
    Search {
        /// One or more search queries
        #[arg(required = true)]
        queries: Vec<String>,
        /// Keep only shorts, only longer videos, or both
        #[arg(long = "type", value_enum, default_value_t = TypeArg::Any)]
        video_type: TypeArg,
        /// Result ordering requested from the API
        #[arg(long, value_enum, default_value_t = OrderArg::Relevance)]
        order: OrderArg,
        /// Only videos published on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        after: Option<NaiveDate>,
        /// Only videos published on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        before: Option<NaiveDate>,
        /// Maximum videos per query
        #[arg(long, default_value_t = 20)]
        max: usize,
    },

    /// List a channel's latest uploads by URL or @handle
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  tubescan channel https://www.youtube.com/@veritasium
  tubescan channel @mkbhd --order view-count --max 25")]
    Channel {
        /// Channel URL or @handle
        url: String,
        /// Result ordering
        #[arg(long, value_enum, default_value_t = OrderArg::Date)]
        order: OrderArg,
        /// Maximum uploads to list (one API page at most)
        #[arg(long, default_value_t = 20)]
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Any,
    Short,
    Long,
}

impl From<TypeArg> for KindFilter {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Any => KindFilter::Any,
            TypeArg::Short => KindFilter::Short,
            TypeArg::Long => KindFilter::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Relevance,
    Date,
    ViewCount,
    Rating,
    Title,
}

impl From<OrderArg> for SearchOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Relevance => SearchOrder::Relevance,
            OrderArg::Date => SearchOrder::Date,
            OrderArg::ViewCount => SearchOrder::ViewCount,
            OrderArg::Rating => SearchOrder::Rating,
            OrderArg::Title => SearchOrder::Title,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("'{raw}' is not a date in YYYY-MM-DD form"))
}
