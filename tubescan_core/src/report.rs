// src/report.rs
//
// Aggregation layer: one fetch per query, collected into report sections for
// the presentation code (terminal tables, JSON, whatever the caller renders).

use crate::error::SourceError;
use crate::insights::KeywordProvider;
use crate::records::{ChannelFetch, SearchHit};
use crate::youtube::{ChannelQuery, KindFilter, SearchOrder, SearchRequest, YouTubeClient};
use chrono::NaiveDate;
use serde::Serialize;

/// Fetch options shared by every query of a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub kind_filter: KindFilter,
    pub order: SearchOrder,
    pub published_after: Option<NaiveDate>,
    pub published_before: Option<NaiveDate>,
    pub max_results: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            kind_filter: KindFilter::Any,
            order: SearchOrder::Relevance,
            published_after: None,
            published_before: None,
            max_results: 20,
        }
    }
}

impl ReportOptions {
    fn request(&self, query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            kind_filter: self.kind_filter,
            order: self.order,
            published_after: self.published_after,
            published_before: self.published_before,
            max_results: self.max_results,
        }
    }
}

/// Results of one query. `interrupted` marks a section whose fetch was cut
/// short by an upstream failure and therefore holds partial data.
#[derive(Debug, Serialize)]
pub struct Section {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub interrupted: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// True when no query produced any hits; callers render "no results".
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Resolves what to actually search for, mirroring the front-end precedence:
/// a genre (expanded through the provider) wins over a literal query, and
/// both being blank is rejected before any network call.
pub async fn expand_queries(
    genre: Option<&str>,
    query: Option<&str>,
    provider: &dyn KeywordProvider,
) -> Result<Vec<String>, SourceError> {
    let genre = genre.map(str::trim).filter(|s| !s.is_empty());
    let query = query.map(str::trim).filter(|s| !s.is_empty());

    match (genre, query) {
        (None, None) => Err(SourceError::InvalidInput(
            "provide a genre or a search query".to_string(),
        )),
        (Some(genre), _) => {
            let keywords = provider.keywords_for(genre).await?;
            if keywords.is_empty() {
                return Err(SourceError::InvalidInput(format!(
                    "no search keywords could be derived for genre '{genre}'"
                )));
            }
            Ok(keywords)
        }
        (None, Some(query)) => Ok(vec![query.to_string()]),
    }
}

/// Runs one search per query and assembles the non-empty results.
///
/// Queries are fetched serially. A query that returns nothing contributes no
/// section; a fetch interrupted upstream contributes whatever it accumulated,
/// flagged on the section. With view-count order the sections are re-sorted
/// locally, since the fetch itself may have discarded candidates after the
/// server-side ordering.
pub async fn build_report(
    client: &YouTubeClient,
    queries: &[String],
    options: &ReportOptions,
) -> Result<Report, SourceError> {
    let queries: Vec<&str> = queries
        .iter()
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .collect();
    if queries.is_empty() {
        return Err(SourceError::InvalidInput(
            "at least one non-empty query is required".to_string(),
        ));
    }

    let mut sections = Vec::new();
    for query in queries {
        let outcome = client.search_videos(&options.request(query)).await?;
        tracing::debug!(query, hits = outcome.hits.len(), "query fetched");
        if outcome.is_empty() {
            continue;
        }
        sections.push(Section {
            query: query.to_string(),
            interrupted: outcome.interrupted.is_some(),
            hits: outcome.hits,
        });
    }

    if options.order == SearchOrder::ViewCount {
        for section in &mut sections {
            sort_hits_by_views(&mut section.hits);
        }
    }

    Ok(Report { sections })
}

/// Descending view-count sort; unavailable counts sort as 0.
pub fn sort_hits_by_views(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        b.views
            .as_u64_or_zero()
            .cmp(&a.views.as_u64_or_zero())
    });
}

/// Channel-path report with the original boundary semantics: any upstream
/// failure is logged and folded into the none-found outcome instead of
/// propagating. Callers that need the cause use
/// [`YouTubeClient::fetch_by_channel`] directly.
pub async fn channel_report(client: &YouTubeClient, query: &ChannelQuery) -> ChannelFetch {
    match client.fetch_by_channel(query).await {
        Ok(fetch) => fetch,
        Err(err) => {
            tracing::warn!(channel = %query.channel, error = %err, "channel fetch failed");
            ChannelFetch::NotFound
        }
    }
}
