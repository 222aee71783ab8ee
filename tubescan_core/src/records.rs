// src/records.rs
//
// Result record shapes. The query path and the channel path intentionally
// produce two distinct shapes with different field names and different
// missing-value conventions; downstream consumers key on the field names, so
// the shapes are never unified.

use crate::error::SourceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Short-form/long-form classification, keyed off the parsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoKind {
    Short,
    Long,
}

impl VideoKind {
    /// Anything at or under 60 seconds counts as a Short.
    pub fn classify(duration_seconds: u64) -> Self {
        if duration_seconds <= 60 {
            VideoKind::Short
        } else {
            VideoKind::Long
        }
    }
}

/// A per-video statistic as reported by the query path.
///
/// The statistics part of a video resource may omit any counter; the query
/// path surfaces those gaps as the literal placeholder `"N/A"` rather than a
/// number, and that convention is preserved on the wire here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Count(u64),
    Unavailable,
}

impl Stat {
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.parse::<u64>().ok())
            .map(Stat::Count)
            .unwrap_or(Stat::Unavailable)
    }

    /// Numeric view for sorting; unavailable counts order as 0.
    pub fn as_u64_or_zero(self) -> u64 {
        match self {
            Stat::Count(n) => n,
            Stat::Unavailable => 0,
        }
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stat::Count(n) => serializer.serialize_u64(*n),
            Stat::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Stat::Count(n),
            Raw::Text(t) => t.parse::<u64>().map(Stat::Count).unwrap_or(Stat::Unavailable),
        })
    }
}

/// One video as returned by the query-based search path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub id: String,
    pub url: String,
    pub channel: String,
    pub channel_id: String,
    pub published_at: String,
    pub views: Stat,
    pub likes: Stat,
    pub comments: Stat,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub duration_seconds: u64,
    pub kind: VideoKind,
}

/// One video as returned by the channel-based path.
///
/// Parallel to [`SearchHit`] but deliberately not the same shape: the field
/// names differ and missing counters collapse to 0 instead of a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelUpload {
    pub video_title: String,
    pub video_id: String,
    pub video_url: String,
    pub channel_title: String,
    pub channel_id: String,
    pub uploaded_at: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub duration_seconds: u64,
    pub format: VideoKind,
}

/// Outcome of a query-based fetch.
///
/// A fetch that hits an upstream failure mid-pagination stops where it is and
/// reports the accumulated records together with the cause, so callers can
/// tell "zero matches" from "the lookup died" without the fetch ever raising.
#[derive(Debug)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub interrupted: Option<SourceError>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Outcome of a channel-based fetch. `NotFound` (the channel reference did
/// not resolve) is distinct from `Found` with zero uploads.
#[derive(Debug)]
pub enum ChannelFetch {
    Found(Vec<ChannelUpload>),
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_uses_sixty_second_boundary() {
        assert_eq!(VideoKind::classify(0), VideoKind::Short);
        assert_eq!(VideoKind::classify(60), VideoKind::Short);
        assert_eq!(VideoKind::classify(61), VideoKind::Long);
    }

    #[test]
    fn stat_parses_missing_and_garbage_as_unavailable() {
        assert_eq!(Stat::parse(Some("12345")), Stat::Count(12345));
        assert_eq!(Stat::parse(None), Stat::Unavailable);
        assert_eq!(Stat::parse(Some("many")), Stat::Unavailable);
        assert_eq!(Stat::Unavailable.as_u64_or_zero(), 0);
    }

    #[test]
    fn stat_serializes_placeholder() {
        assert_eq!(serde_json::to_value(Stat::Count(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(Stat::Unavailable).unwrap(),
            json!("N/A")
        );
    }

    #[test]
    fn record_shapes_stay_divergent() {
        let hit = SearchHit {
            title: "t".into(),
            id: "v1".into(),
            url: "https://www.youtube.com/watch?v=v1".into(),
            channel: "c".into(),
            channel_id: "UC1".into(),
            published_at: "2024-01-01T00:00:00Z".into(),
            views: Stat::Unavailable,
            likes: Stat::Count(1),
            comments: Stat::Count(2),
            description: String::new(),
            thumbnail: None,
            duration_seconds: 61,
            kind: VideoKind::Long,
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["views"], json!("N/A"));
        assert!(value.get("view_count").is_none());

        let upload = ChannelUpload {
            video_title: "t".into(),
            video_id: "v1".into(),
            video_url: "https://www.youtube.com/watch?v=v1".into(),
            channel_title: "c".into(),
            channel_id: "UC1".into(),
            uploaded_at: "2024-01-01T00:00:00Z".into(),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            description: String::new(),
            thumbnail: None,
            duration_seconds: 30,
            format: VideoKind::Short,
        };
        let value = serde_json::to_value(&upload).unwrap();
        assert_eq!(value["view_count"], json!(0));
        assert!(value.get("views").is_none());
    }
}
