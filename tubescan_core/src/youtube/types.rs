// src/youtube/types.rs
//
// Wire types for the YouTube Data API v3 responses this crate consumes, and
// the mapping from detail items into the two public record shapes.

use crate::duration::parse_iso8601_seconds;
use crate::records::{ChannelUpload, SearchHit, Stat, VideoKind};
use serde::Deserialize;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

// --- search.list ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

impl SearchListResponse {
    /// Candidate video ids for the current page, restricted to actual video
    /// results (the endpoint can interleave channels/playlists).
    pub fn video_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.id.kind == "youtube#video")
            .filter_map(|item| item.id.video_id.clone())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchResultId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: String,
    pub video_id: Option<String>,
}

// --- videos.list ---

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub content_details: ContentDetails,
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentDetails {
    #[serde(default)]
    pub duration: String,
}

/// Counters arrive as decimal strings and each one may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

impl VideoItem {
    pub fn duration_seconds(&self) -> u64 {
        parse_iso8601_seconds(&self.content_details.duration)
    }

    fn stat(&self, pick: fn(&Statistics) -> Option<&String>) -> Stat {
        Stat::parse(
            self.statistics
                .as_ref()
                .and_then(pick)
                .map(String::as_str),
        )
    }

    fn count(&self, pick: fn(&Statistics) -> Option<&String>) -> u64 {
        self.statistics
            .as_ref()
            .and_then(pick)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0)
    }

    fn thumbnail_url(&self) -> Option<String> {
        self.snippet.thumbnails.high.as_ref().map(|t| t.url.clone())
    }

    /// Maps a detail item into the query path's record shape. Missing
    /// counters become the `"N/A"` placeholder.
    pub fn into_search_hit(self) -> SearchHit {
        let duration_seconds = self.duration_seconds();
        SearchHit {
            url: format!("{WATCH_URL_PREFIX}{}", self.id),
            views: self.stat(|s| s.view_count.as_ref()),
            likes: self.stat(|s| s.like_count.as_ref()),
            comments: self.stat(|s| s.comment_count.as_ref()),
            thumbnail: self.thumbnail_url(),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            channel_id: self.snippet.channel_id,
            published_at: self.snippet.published_at,
            description: self.snippet.description,
            id: self.id,
            duration_seconds,
            kind: VideoKind::classify(duration_seconds),
        }
    }

    /// Maps a detail item into the channel path's record shape. Missing or
    /// non-numeric counters collapse to 0 here, not to a placeholder.
    pub fn into_channel_upload(self) -> ChannelUpload {
        let duration_seconds = self.duration_seconds();
        ChannelUpload {
            video_url: format!("{WATCH_URL_PREFIX}{}", self.id),
            view_count: self.count(|s| s.view_count.as_ref()),
            like_count: self.count(|s| s.like_count.as_ref()),
            comment_count: self.count(|s| s.comment_count.as_ref()),
            thumbnail: self.thumbnail_url(),
            video_title: self.snippet.title,
            channel_title: self.snippet.channel_title,
            channel_id: self.snippet.channel_id,
            uploaded_at: self.snippet.published_at,
            description: self.snippet.description,
            video_id: self.id,
            duration_seconds,
            format: VideoKind::classify(duration_seconds),
        }
    }
}

// --- channels.list ---

#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub id: String,
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

// --- playlistItems.list ---

#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

impl PlaylistItemsResponse {
    pub fn video_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.content_details.as_ref())
            .map(|details| details.video_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_item(value: serde_json::Value) -> VideoItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn search_response_keeps_only_video_ids() {
        let response: SearchListResponse = serde_json::from_value(json!({
            "nextPageToken": "CAUQAA",
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc"}},
                {"id": {"kind": "youtube#channel", "channelId": "UCx"}},
                {"id": {"kind": "youtube#video", "videoId": "def"}}
            ]
        }))
        .unwrap();

        assert_eq!(response.video_ids(), vec!["abc", "def"]);
        assert_eq!(response.next_page_token.as_deref(), Some("CAUQAA"));
    }

    #[test]
    fn detail_item_maps_to_search_hit() {
        let item = detail_item(json!({
            "id": "v123",
            "snippet": {
                "title": "A video",
                "channelTitle": "A channel",
                "channelId": "UC123",
                "publishedAt": "2024-05-01T12:00:00Z",
                "description": "hello",
                "thumbnails": {"high": {"url": "https://i.ytimg.com/vi/v123/hq.jpg"}}
            },
            "contentDetails": {"duration": "PT1M5S"},
            "statistics": {"viewCount": "1000", "commentCount": "5"}
        }));

        let hit = item.into_search_hit();
        assert_eq!(hit.url, "https://www.youtube.com/watch?v=v123");
        assert_eq!(hit.duration_seconds, 65);
        assert_eq!(hit.kind, VideoKind::Long);
        assert_eq!(hit.views, Stat::Count(1000));
        // likeCount absent from statistics -> placeholder, not zero.
        assert_eq!(hit.likes, Stat::Unavailable);
        assert_eq!(hit.comments, Stat::Count(5));
        assert_eq!(
            hit.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/v123/hq.jpg")
        );
    }

    #[test]
    fn detail_item_maps_to_channel_upload() {
        let item = detail_item(json!({
            "id": "v9",
            "snippet": {
                "title": "Upload",
                "channelTitle": "Chan",
                "channelId": "UC9",
                "publishedAt": "2023-11-11T00:00:00Z"
            },
            "contentDetails": {"duration": "PT30S"},
            "statistics": {"viewCount": "42"}
        }));

        let upload = item.into_channel_upload();
        assert_eq!(upload.video_url, "https://www.youtube.com/watch?v=v9");
        assert_eq!(upload.view_count, 42);
        // Absent counters collapse to 0 on this path.
        assert_eq!(upload.like_count, 0);
        assert_eq!(upload.comment_count, 0);
        assert_eq!(upload.format, VideoKind::Short);
        assert!(upload.thumbnail.is_none());
    }

    #[test]
    fn missing_statistics_and_duration_use_sentinels() {
        let item = detail_item(json!({
            "id": "v0",
            "snippet": {"title": "bare"}
        }));
        assert_eq!(item.duration_seconds(), 0);

        let hit = item.into_search_hit();
        assert_eq!(hit.views, Stat::Unavailable);
        assert_eq!(hit.kind, VideoKind::Short);
        assert_eq!(hit.description, "");
    }

    #[test]
    fn playlist_items_surface_video_ids() {
        let response: PlaylistItemsResponse = serde_json::from_value(json!({
            "items": [
                {"contentDetails": {"videoId": "a"}},
                {},
                {"contentDetails": {"videoId": "b"}}
            ]
        }))
        .unwrap();

        assert_eq!(response.video_ids(), vec!["a", "b"]);
    }
}
