use std::{collections::BTreeSet, time::Duration};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::SearchQuery,
    services::domain_filter::is_scholarly,
};

/// Result of one search page. A failed call is reported, never raised, so the
/// caller can degrade to "no new links" while still knowing why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<String>),
    /// The search did not complete. The category's cursor is not advanced,
    /// so the next fetch-more asks for the same page again.
    Failed(String),
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }

    pub fn into_links(self) -> Vec<String> {
        match self {
            SearchOutcome::Found(links) => links,
            SearchOutcome::Failed(_) => Vec::new(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LinkSearch: Send + Sync {
    /// Fetches one page of ranked links for `query` starting at `offset`.
    ///
    /// Literature queries keep only scholarly hosts from all `count` raw
    /// results; other queries keep the first `count`. URLs in `exclusions`
    /// are dropped either way.
    async fn search(
        &self,
        query: &SearchQuery,
        count: usize,
        offset: usize,
        exclusions: &BTreeSet<String>,
    ) -> SearchOutcome;
}

/// Client for a SerpAPI-style search-results endpoint.
pub struct SerpApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl SerpApiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.search_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build search client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.serpapi_endpoint.clone(),
            api_key: config.serpapi_api_key.clone(),
        })
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        count: usize,
        offset: usize,
    ) -> Result<Value, String> {
        let count = count.to_string();
        let offset = offset.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("engine", query.engine.as_str()),
                ("q", query.text.as_str()),
                ("api_key", self.api_key.expose_secret()),
                ("num", count.as_str()),
                ("start", offset.as_str()),
            ])
            .send()
            .await
            .map_err(|e| format!("search request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("search API returned {}", status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("search response was not JSON: {}", e))
    }
}

#[async_trait]
impl LinkSearch for SerpApiClient {
    async fn search(
        &self,
        query: &SearchQuery,
        count: usize,
        offset: usize,
        exclusions: &BTreeSet<String>,
    ) -> SearchOutcome {
        log::info!(
            "Searching '{}' (engine={}, num={}, start={})",
            query.text,
            query.engine,
            count,
            offset
        );

        match self.fetch_page(query, count, offset).await {
            Ok(body) => {
                let raw = organic_links(&body);
                let links = select_links(raw, count, query.is_literature, exclusions);
                log::debug!("Search '{}' produced {} links", query.text, links.len());
                SearchOutcome::Found(links)
            }
            Err(reason) => {
                log::warn!("Search '{}' failed: {}", query.text, reason);
                SearchOutcome::Failed(reason)
            }
        }
    }
}

/// Pulls result URLs out of an `organic_results` array, preferring `link`
/// over `url`. Entries carrying neither are skipped; a missing array means
/// no results.
pub fn organic_links(body: &Value) -> Vec<String> {
    let Some(results) = body.get("organic_results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter_map(|result| {
            ["link", "url"].iter().find_map(|field| {
                result
                    .get(field)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .collect()
}

/// Applies the literature filter or the count cap, then removes excluded and
/// repeated URLs while keeping upstream ranking order.
pub fn select_links(
    raw: Vec<String>,
    count: usize,
    is_literature: bool,
    exclusions: &BTreeSet<String>,
) -> Vec<String> {
    let kept: Vec<String> = if is_literature {
        raw.into_iter().filter(|url| is_scholarly(url)).collect()
    } else {
        raw.into_iter().take(count).collect()
    };

    let mut seen = BTreeSet::new();
    kept.into_iter()
        .filter(|url| !exclusions.contains(url))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn organic_links_prefers_link_then_url() {
        let body = json!({
            "organic_results": [
                {"link": "https://a.ie", "url": "https://ignored.ie"},
                {"url": "https://b.ie"},
                {"title": "no address"},
                {"link": "", "url": "https://c.ie"},
                "garbage"
            ]
        });

        assert_eq!(
            organic_links(&body),
            urls(&["https://a.ie", "https://b.ie", "https://c.ie"])
        );
    }

    #[test]
    fn missing_results_array_means_no_links() {
        assert!(organic_links(&json!({"error": "quota"})).is_empty());
        assert!(organic_links(&json!({"organic_results": "nope"})).is_empty());
    }

    #[test]
    fn plain_search_truncates_and_keeps_order() {
        let raw = urls(&[
            "https://etenders.gov.ie/1",
            "https://ted.europa.eu/2",
            "https://example.com/3",
            "https://example.com/4",
        ]);

        let links = select_links(raw, 3, false, &BTreeSet::new());

        assert_eq!(
            links,
            urls(&[
                "https://etenders.gov.ie/1",
                "https://ted.europa.eu/2",
                "https://example.com/3"
            ])
        );
    }

    #[test]
    fn literature_search_keeps_only_scholarly_without_truncating() {
        let raw = urls(&[
            "https://arxiv.org/abs/1",
            "https://blog.example.com/ev",
            "https://link.springer.com/2",
            "https://ieeexplore.ieee.org/3",
            "https://shop.example.com/4",
        ]);

        let links = select_links(raw, 2, true, &BTreeSet::new());

        assert_eq!(
            links,
            urls(&[
                "https://arxiv.org/abs/1",
                "https://link.springer.com/2",
                "https://ieeexplore.ieee.org/3"
            ])
        );
        assert!(links.iter().all(|l| is_scholarly(l)));
    }

    #[test]
    fn exclusions_and_duplicates_are_removed() {
        let raw = urls(&["https://a.ie", "https://b.ie", "https://a.ie", "https://c.ie"]);
        let exclusions: BTreeSet<String> = urls(&["https://b.ie"]).into_iter().collect();

        let links = select_links(raw, 4, false, &exclusions);

        assert_eq!(links, urls(&["https://a.ie", "https://c.ie"]));
    }

    #[test]
    fn outcome_degrades_to_empty_on_failure() {
        let failed = SearchOutcome::Failed("timeout".to_string());
        assert!(failed.is_failure());
        assert!(failed.into_links().is_empty());

        let found = SearchOutcome::Found(urls(&["https://a.ie"]));
        assert_eq!(found.into_links(), urls(&["https://a.ie"]));
    }

    #[actix_rt::test]
    async fn unreachable_endpoint_reports_failure() {
        let mut config = Config::test_config();
        config.serpapi_endpoint = "http://127.0.0.1:1/search".to_string();
        let client = SerpApiClient::new(&config).unwrap();

        let outcome = client
            .search(
                &SearchQuery::new("bins procurement tender", false, "google"),
                3,
                0,
                &BTreeSet::new(),
            )
            .await;

        assert!(outcome.is_failure());
    }
}
