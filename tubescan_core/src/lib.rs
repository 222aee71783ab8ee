// src/lib.rs
pub mod config;
pub mod duration;
pub mod error;
pub mod insights;
pub mod records;
pub mod report;
pub mod utils;
pub mod youtube;

pub use config::YouTubeConfig;
pub use error::SourceError;
pub use records::{ChannelFetch, ChannelUpload, SearchHit, SearchOutcome, Stat, VideoKind};
pub use report::{Report, ReportOptions, Section};
pub use youtube::{ChannelQuery, KindFilter, SearchOrder, SearchRequest, YouTubeClient};
