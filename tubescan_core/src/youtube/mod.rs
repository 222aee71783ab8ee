// src/youtube/mod.rs

use crate::config::YouTubeConfig;
use crate::error::SourceError;
use crate::records::{ChannelFetch, ChannelUpload, SearchHit, SearchOutcome, VideoKind};
use crate::utils::{collect_paginated, end_of_day_utc, start_of_day_utc, Page};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub mod types;

use types::{
    ChannelListResponse, PlaylistItemsResponse, SearchListResponse, VideoItem, VideoListResponse,
};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Hard page-size cap of the search/playlist endpoints.
const PAGE_LIMIT: usize = 50;

/// Upper bound on pages fetched per call, so a filter that discards every
/// candidate cannot spin on cursors forever.
const MAX_REQUESTS: usize = 100;

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9._%\-]+)").expect("handle pattern"));

/// Duration-class filter applied after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    #[default]
    Any,
    Short,
    Long,
}

impl KindFilter {
    pub fn accepts(self, kind: VideoKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Short => kind == VideoKind::Short,
            KindFilter::Long => kind == VideoKind::Long,
        }
    }
}

/// Sort orders understood by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    #[default]
    Relevance,
    Date,
    ViewCount,
    Rating,
    Title,
}

impl SearchOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::Date => "date",
            SearchOrder::ViewCount => "viewCount",
            SearchOrder::Rating => "rating",
            SearchOrder::Title => "title",
        }
    }
}

/// Parameters for one query-based fetch.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub kind_filter: KindFilter,
    pub order: SearchOrder,
    /// Inclusive calendar-date bounds, converted to RFC 3339 and applied
    /// server-side. An inverted range is passed through unvalidated.
    pub published_after: Option<NaiveDate>,
    pub published_before: Option<NaiveDate>,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            kind_filter: KindFilter::Any,
            order: SearchOrder::Relevance,
            published_after: None,
            published_before: None,
            max_results: 20,
        }
    }
}

/// Parameters for one channel-based fetch.
#[derive(Debug, Clone)]
pub struct ChannelQuery {
    /// Channel URL or bare `@handle` reference.
    pub channel: String,
    pub order: SearchOrder,
    pub max_results: usize,
}

/// Client for the YouTube Data API v3.
///
/// Cheap to construct and immutable afterwards; all calls are awaited one at
/// a time, so a multi-page fetch serializes its network traffic.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent("tubescan/0.1.0")
            .build()
            .map_err(|e| SourceError::Other(e.to_string()))?;
        Ok(YouTubeClient { client, config })
    }

    /// Fetches up to `max_results` videos matching the request.
    ///
    /// Each page is a two-phase call: `search.list` for candidate ids, then
    /// one `videos.list` batch for their snippet/statistics/contentDetails.
    /// Candidates that fail the duration-class filter are dropped after
    /// classification and the loop keeps paging until the request is filled
    /// or the upstream runs out. An upstream failure mid-loop ends the fetch
    /// and is reported on the outcome next to everything accumulated so far;
    /// it never propagates as an `Err`.
    pub async fn search_videos(&self, req: &SearchRequest) -> Result<SearchOutcome, SourceError> {
        if req.query.trim().is_empty() {
            return Err(SourceError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let (hits, interrupted) = collect_paginated(
            req.max_results,
            MAX_REQUESTS,
            |cursor: Option<String>, remaining| async move {
                let page_size = remaining.min(PAGE_LIMIT);
                let page = self.search_page(req, page_size, cursor.as_deref()).await?;

                let ids = page.video_ids();
                if ids.is_empty() {
                    // No candidates on this page; treat the cursor as spent.
                    return Ok(Page {
                        items: vec![],
                        next: None,
                    });
                }

                let details = self.video_details(&ids).await?;
                let hits: Vec<SearchHit> = details
                    .into_iter()
                    .map(VideoItem::into_search_hit)
                    .filter(|hit| req.kind_filter.accepts(hit.kind))
                    .collect();

                Ok(Page {
                    items: hits,
                    next: page.next_page_token,
                })
            },
        )
        .await;

        if let Some(err) = &interrupted {
            tracing::warn!(query = %req.query, error = %err, "search fetch aborted, returning partial results");
        }

        Ok(SearchOutcome { hits, interrupted })
    }

    async fn search_page(
        &self,
        req: &SearchRequest,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<SearchListResponse, SourceError> {
        let params = search_params(req, page_size, cursor, &self.config.api_key);
        self.get_json(&format!("{API_BASE}/search"), &params).await
    }

    /// Batch detail lookup for up to one page worth of video ids.
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoItem>, SourceError> {
        let params = vec![
            ("part".to_string(), "snippet,contentDetails,statistics".to_string()),
            ("id".to_string(), ids.join(",")),
            ("key".to_string(), self.config.api_key.clone()),
        ];
        let response: VideoListResponse = self.get_json(&format!("{API_BASE}/videos"), &params).await?;
        Ok(response.items)
    }

    /// Maps a channel URL/handle to a channel id.
    ///
    /// Returns `Ok(None)` without touching the network when the reference
    /// carries no `@handle` token, and `Ok(None)` when the lookup matches
    /// nothing.
    pub async fn resolve_channel_id(&self, channel_url: &str) -> Result<Option<String>, SourceError> {
        let Some(handle) = extract_handle(channel_url) else {
            return Ok(None);
        };

        let params = vec![
            ("part".to_string(), "id".to_string()),
            ("forHandle".to_string(), handle),
            ("key".to_string(), self.config.api_key.clone()),
        ];
        let response: ChannelListResponse =
            self.get_json(&format!("{API_BASE}/channels"), &params).await?;
        Ok(response.items.into_iter().next().map(|item| item.id))
    }

    /// Fetches up to `max_results` uploads of the referenced channel.
    ///
    /// An unresolvable reference yields `ChannelFetch::NotFound`, which is
    /// distinct from a resolved channel with zero uploads.
    pub async fn fetch_by_channel(&self, query: &ChannelQuery) -> Result<ChannelFetch, SourceError> {
        if query.channel.trim().is_empty() {
            return Err(SourceError::InvalidInput(
                "channel reference must not be empty".to_string(),
            ));
        }

        let Some(channel_id) = self.resolve_channel_id(&query.channel).await? else {
            return Ok(ChannelFetch::NotFound);
        };

        let Some(playlist_id) = self.uploads_playlist_id(&channel_id).await? else {
            return Ok(ChannelFetch::NotFound);
        };

        // Single page only: channels with more uploads than one page are
        // truncated here. Known limitation of this path.
        let ids = self
            .playlist_video_ids(&playlist_id, query.max_results.min(PAGE_LIMIT))
            .await?;
        if ids.is_empty() {
            return Ok(ChannelFetch::Found(vec![]));
        }

        let details = self.video_details(&ids).await?;
        let mut uploads: Vec<ChannelUpload> = details
            .into_iter()
            .map(VideoItem::into_channel_upload)
            .collect();

        sort_uploads(&mut uploads, query.order);
        uploads.truncate(query.max_results);
        Ok(ChannelFetch::Found(uploads))
    }

    async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>, SourceError> {
        let params = vec![
            ("part".to_string(), "contentDetails".to_string()),
            ("id".to_string(), channel_id.to_string()),
            ("key".to_string(), self.config.api_key.clone()),
        ];
        let response: ChannelListResponse =
            self.get_json(&format!("{API_BASE}/channels"), &params).await?;
        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details)
            .and_then(|details| details.related_playlists.uploads))
    }

    async fn playlist_video_ids(
        &self,
        playlist_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, SourceError> {
        let params = vec![
            ("part".to_string(), "contentDetails".to_string()),
            ("playlistId".to_string(), playlist_id.to_string()),
            ("maxResults".to_string(), max_results.to_string()),
            ("key".to_string(), self.config.api_key.clone()),
        ];
        let response: PlaylistItemsResponse = self
            .get_json(&format!("{API_BASE}/playlistItems"), &params)
            .await?;
        Ok(response.video_ids())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(SourceError::HttpRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!(
                "YouTube API returned {status}: {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Other(format!("Failed to parse JSON response: {e}")))
    }
}

/// Builds the `search.list` query parameters for one page.
fn search_params(
    req: &SearchRequest,
    page_size: usize,
    cursor: Option<&str>,
    api_key: &str,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("part".to_string(), "id,snippet".to_string()),
        ("q".to_string(), req.query.clone()),
        ("type".to_string(), "video".to_string()),
        ("maxResults".to_string(), page_size.to_string()),
        ("order".to_string(), req.order.as_param().to_string()),
        ("key".to_string(), api_key.to_string()),
    ];
    if let Some(token) = cursor {
        params.push(("pageToken".to_string(), token.to_string()));
    }
    if let Some(after) = req.published_after {
        params.push(("publishedAfter".to_string(), start_of_day_utc(after)));
    }
    if let Some(before) = req.published_before {
        params.push(("publishedBefore".to_string(), end_of_day_utc(before)));
    }
    params
}

/// Extracts and percent-decodes the `@handle` token from a channel reference.
fn extract_handle(channel_url: &str) -> Option<String> {
    let raw = HANDLE_RE
        .captures(channel_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())?;
    Some(
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

/// Re-sorts channel uploads in place. View-count order compares the numeric
/// counts (missing counts were already mapped to 0); date order compares the
/// formatted publish timestamps.
pub fn sort_uploads(uploads: &mut [ChannelUpload], order: SearchOrder) {
    match order {
        SearchOrder::ViewCount => {
            uploads.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        }
        SearchOrder::Date => {
            uploads.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        }
        SearchOrder::Relevance | SearchOrder::Rating | SearchOrder::Title => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(view_count: u64, uploaded_at: &str) -> ChannelUpload {
        ChannelUpload {
            video_title: "t".into(),
            video_id: "v".into(),
            video_url: String::new(),
            channel_title: "c".into(),
            channel_id: "UC".into(),
            uploaded_at: uploaded_at.into(),
            view_count,
            like_count: 0,
            comment_count: 0,
            description: String::new(),
            thumbnail: None,
            duration_seconds: 10,
            format: VideoKind::Short,
        }
    }

    #[test]
    fn kind_filter_matches_classification() {
        assert!(KindFilter::Any.accepts(VideoKind::Short));
        assert!(KindFilter::Any.accepts(VideoKind::Long));
        assert!(KindFilter::Short.accepts(VideoKind::Short));
        assert!(!KindFilter::Short.accepts(VideoKind::Long));
        assert!(KindFilter::Long.accepts(VideoKind::Long));
        assert!(!KindFilter::Long.accepts(VideoKind::Short));
    }

    #[test]
    fn search_params_cap_page_size_and_pass_dates_through() {
        let mut req = SearchRequest::new("rust tutorial");
        req.order = SearchOrder::ViewCount;
        // Inverted range on purpose: it is forwarded untouched, not rejected.
        req.published_after = NaiveDate::from_ymd_opt(2024, 6, 1);
        req.published_before = NaiveDate::from_ymd_opt(2024, 1, 1);

        let params = search_params(&req, 50, Some("TOKEN"), "KEY");
        let get = |name: &str| {
            params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("q"), Some("rust tutorial"));
        assert_eq!(get("type"), Some("video"));
        assert_eq!(get("maxResults"), Some("50"));
        assert_eq!(get("order"), Some("viewCount"));
        assert_eq!(get("pageToken"), Some("TOKEN"));
        assert_eq!(get("publishedAfter"), Some("2024-06-01T00:00:00Z"));
        assert_eq!(get("publishedBefore"), Some("2024-01-01T23:59:59Z"));
    }

    #[test]
    fn search_params_omit_absent_options() {
        let req = SearchRequest::new("cats");
        let params = search_params(&req, 20, None, "KEY");
        assert!(!params.iter().any(|(k, _)| k == "pageToken"));
        assert!(!params.iter().any(|(k, _)| k == "publishedAfter"));
        assert!(!params.iter().any(|(k, _)| k == "publishedBefore"));
    }

    #[test]
    fn extracts_and_decodes_handles() {
        assert_eq!(
            extract_handle("https://www.youtube.com/@SomeChannel/videos"),
            Some("SomeChannel".to_string())
        );
        assert_eq!(extract_handle("@bare.handle"), Some("bare.handle".to_string()));
        assert_eq!(
            extract_handle("https://www.youtube.com/@%E3%83%86%E3%82%B9%E3%83%88"),
            Some("テスト".to_string())
        );
        assert_eq!(extract_handle("https://www.youtube.com/c/LegacyName"), None);
    }

    #[tokio::test]
    async fn missing_handle_resolves_to_none_without_network() {
        let client = YouTubeClient::new(YouTubeConfig::new("unused")).unwrap();
        let resolved = client
            .resolve_channel_id("https://www.youtube.com/channel-page")
            .await
            .unwrap();
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_any_call() {
        let client = YouTubeClient::new(YouTubeConfig::new("unused")).unwrap();
        let err = client
            .search_videos(&SearchRequest::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidInput(_)));
    }

    #[test]
    fn view_count_sort_is_descending_with_zero_for_missing() {
        let mut uploads = vec![
            upload(5, "2024-01-01T00:00:00Z"),
            upload(0, "2024-01-02T00:00:00Z"),
            upload(10, "2024-01-03T00:00:00Z"),
        ];
        sort_uploads(&mut uploads, SearchOrder::ViewCount);
        let counts: Vec<u64> = uploads.iter().map(|u| u.view_count).collect();
        assert_eq!(counts, vec![10, 5, 0]);
    }

    #[test]
    fn date_sort_uses_formatted_timestamp() {
        let mut uploads = vec![
            upload(1, "2023-05-01T00:00:00Z"),
            upload(2, "2024-05-01T00:00:00Z"),
            upload(3, "2022-05-01T00:00:00Z"),
        ];
        sort_uploads(&mut uploads, SearchOrder::Date);
        let dates: Vec<&str> = uploads.iter().map(|u| u.uploaded_at.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-05-01T00:00:00Z",
                "2023-05-01T00:00:00Z",
                "2022-05-01T00:00:00Z"
            ]
        );
    }
}
