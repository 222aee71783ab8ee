// src/insights.rs
//
// Seam for the generative-AI collaborator. The report layer only needs "a
// genre goes in, search keywords come out"; how the keywords are produced
// (and any prompt/response plumbing) lives behind this trait, outside this
// crate.

use crate::error::SourceError;
use async_trait::async_trait;

#[async_trait]
pub trait KeywordProvider: Send + Sync {
    /// Expands a genre description into concrete search keywords.
    ///
    /// An empty list means the provider could not come up with anything; the
    /// caller treats that as a user-facing rejection, not as "search for
    /// nothing".
    async fn keywords_for(&self, genre: &str) -> Result<Vec<String>, SourceError>;
}

/// Provider backed by a fixed keyword list, for callers that already know
/// their queries and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedKeywords {
    keywords: Vec<String>,
}

impl FixedKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FixedKeywords {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl KeywordProvider for FixedKeywords {
    async fn keywords_for(&self, _genre: &str) -> Result<Vec<String>, SourceError> {
        Ok(self.keywords.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_keywords_ignore_the_genre() {
        let provider = FixedKeywords::new(["lofi", "city pop"]);
        let keywords = provider.keywords_for("music").await.unwrap();
        assert_eq!(keywords, vec!["lofi", "city pop"]);
    }

    #[tokio::test]
    async fn default_provider_is_empty() {
        let provider = FixedKeywords::default();
        assert!(provider.keywords_for("anything").await.unwrap().is_empty());
    }
}
