#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{LinkCategory, ResearchSession, SearchQuery};

    /// A session for "street lighting" with the given candidates per category.
    pub fn session_with_candidates(links: &[(LinkCategory, &[&str])]) -> ResearchSession {
        let mut session = ResearchSession::new(false);
        session.product_name = Some("street lighting".to_string());
        for (category, urls) in links {
            session.curation_mut(*category).begin(
                category.search_query("street lighting", "google"),
                urls.iter().map(|u| u.to_string()).collect(),
                urls.len(),
            );
        }
        session
    }

    pub fn tender_query() -> SearchQuery {
        LinkCategory::Tender.search_query("street lighting", "google")
    }
}

#[cfg(test)]
pub mod fakes {
    use std::{collections::BTreeSet, sync::Arc};

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        constants::prompts::DRAFT_ROLE_PROMPT,
        errors::AppResult,
        models::domain::SearchQuery,
        services::{
            content_fetcher::{PageFetcher, PageText},
            model_service::TextGenerator,
            pdf_excerpt_service::PdfExcerptExtractor,
            search_client::{LinkSearch, SearchOutcome},
        },
    };

    pub const FAKE_DRAFT: &str = "1. Introduction & Policy Context\nDraft body";

    /// Deterministic result pages: one URL per rank, keyed by the query text.
    pub struct FakeSearch;

    #[async_trait]
    impl LinkSearch for FakeSearch {
        async fn search(
            &self,
            query: &SearchQuery,
            count: usize,
            offset: usize,
            exclusions: &BTreeSet<String>,
        ) -> SearchOutcome {
            let slug: String = query
                .text
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                .collect();
            let links = (offset..offset + count)
                .map(|rank| format!("https://results.example/{}/{}", slug, rank))
                .filter(|url| !exclusions.contains(url))
                .collect();
            SearchOutcome::Found(links)
        }
    }

    pub struct FakeFetcher;

    #[async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch_text(&self, url: &str, _max_chars: usize, _english_only: bool) -> PageText {
            PageText::Text(format!("Body of {}", url))
        }
    }

    /// Five questions for question prompts, [`FAKE_DRAFT`] for draft prompts.
    pub struct FakeGenerator;

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> AppResult<String> {
            if prompt.starts_with(DRAFT_ROLE_PROMPT) {
                return Ok(FAKE_DRAFT.to_string());
            }
            Ok("QUESTIONS:\n1. Budget?\n2. Sites?\n3. Lots?\n4. SLA?\n5. Timeline?".to_string())
        }
    }

    pub struct FakePdf;

    impl PdfExcerptExtractor for FakePdf {
        fn extract_excerpt(&self, bytes: &[u8]) -> String {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }

    pub fn fake_state() -> AppState {
        AppState::with_collaborators(
            Config::test_config(),
            Arc::new(FakeSearch),
            Arc::new(FakeFetcher),
            Arc::new(FakeGenerator),
            Arc::new(FakePdf),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{fakes::*, fixtures::*};
    use crate::{
        models::domain::LinkCategory,
        services::{content_fetcher::PageFetcher, search_client::LinkSearch},
    };
    use std::collections::BTreeSet;

    #[tokio::test]
    async fn fake_search_pages_and_excludes() {
        let query = tender_query();
        let mut excluded = BTreeSet::new();
        excluded.insert(
            "https://results.example/street-lighting-procurement-tender/1".to_string(),
        );

        let links = FakeSearch.search(&query, 3, 0, &excluded).await.into_links();

        assert_eq!(
            links,
            vec![
                "https://results.example/street-lighting-procurement-tender/0".to_string(),
                "https://results.example/street-lighting-procurement-tender/2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn fake_fetcher_echoes_url() {
        let text = FakeFetcher.fetch_text("https://a.ie", 10, true).await.into_text();
        assert_eq!(text, "Body of https://a.ie");
    }

    #[test]
    fn fixture_session_has_candidates() {
        let session = session_with_candidates(&[(LinkCategory::Supplier, &["https://s.ie"][..])]);

        assert_eq!(
            session.curation(LinkCategory::Supplier).candidates().to_vec(),
            vec!["https://s.ie".to_string()]
        );
        assert!(!session.curation(LinkCategory::Tender).has_visible_links());
    }
}
