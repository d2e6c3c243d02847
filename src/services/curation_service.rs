use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{LinkCategory, ResearchSession},
        dto::request::{DiscoverLinksRequest, LinkRequest},
    },
    services::search_client::{LinkSearch, SearchOutcome},
};

fn checked_url(request: &LinkRequest) -> AppResult<&str> {
    request.validate()?;
    Ok(request.url.trim())
}

/// Drives link discovery and the accept / reject / add / more actions for
/// each category of a session.
pub struct CurationService {
    search: Arc<dyn LinkSearch>,
    engine: String,
}

impl CurationService {
    pub fn new(search: Arc<dyn LinkSearch>, engine: impl Into<String>) -> Self {
        Self {
            search,
            engine: engine.into(),
        }
    }

    /// Runs the first search for every selected category. Unselected
    /// categories lose their query and candidates; accepted and rejected
    /// links survive in all of them.
    pub async fn discover_links(
        &self,
        session: &mut ResearchSession,
        request: DiscoverLinksRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let product = request.product_name.trim().to_string();
        session.product_name = Some(product.clone());
        session.results_per_query = request.results_per_query;
        if let Some(english_only) = request.english_only {
            session.english_only = english_only;
        }
        session.clear_generated();

        for category in LinkCategory::ALL {
            if request.categories.contains(&category) {
                self.fetch_initial(session, category, &product).await;
            } else {
                session.curation_mut(category).reset();
            }
        }

        Ok(())
    }

    async fn fetch_initial(&self, session: &mut ResearchSession, category: LinkCategory, product: &str) {
        let query = category.search_query(product, &self.engine);
        let requested = category.requested_count(session.results_per_query);

        let outcome = self
            .search
            .search(&query, requested, 0, session.curation(category).rejected())
            .await;

        let cursor = if outcome.is_failure() { 0 } else { requested };
        let links = outcome.into_links();
        log::info!(
            "Session {}: {} initial {} links",
            session.id,
            links.len(),
            category
        );

        session.curation_mut(category).begin(query, links, cursor);
    }

    pub fn accept(
        &self,
        session: &mut ResearchSession,
        category: LinkCategory,
        request: &LinkRequest,
    ) -> AppResult<bool> {
        let url = checked_url(request)?;
        session.curation_mut(category).accept(url)
    }

    /// Rejected URLs join the exclusion set for later searches, so only
    /// well-formed web URLs are taken.
    pub fn reject(
        &self,
        session: &mut ResearchSession,
        category: LinkCategory,
        request: &LinkRequest,
    ) -> AppResult<bool> {
        let url = checked_url(request)?;
        Ok(session.curation_mut(category).reject(url))
    }

    pub fn manual_add(
        &self,
        session: &mut ResearchSession,
        category: LinkCategory,
        request: &LinkRequest,
    ) -> AppResult<bool> {
        let url = checked_url(request)?;
        Ok(session.curation_mut(category).manual_add(url))
    }

    /// Requests the next page of the stored query and appends unseen links.
    /// Returns how many were appended. The cursor moves by the requested
    /// count on every successful search, however many links were new; a
    /// failed search leaves it in place.
    pub async fn fetch_more(
        &self,
        session: &mut ResearchSession,
        category: LinkCategory,
    ) -> AppResult<usize> {
        let requested = category.requested_count(session.results_per_query);
        let state = session.curation(category);
        let query = state.query().cloned().ok_or_else(|| {
            AppError::ValidationError(format!("No search has been run for {} links", category))
        })?;

        let outcome = self
            .search
            .search(&query, requested, state.cursor(), state.rejected())
            .await;

        let links = match outcome {
            SearchOutcome::Found(links) => links,
            SearchOutcome::Failed(reason) => {
                log::warn!(
                    "Session {}: more {} links unavailable: {}",
                    session.id,
                    category,
                    reason
                );
                return Ok(0);
            }
        };

        let state = session.curation_mut(category);
        let added = state.absorb(links);
        state.advance_cursor(requested);
        Ok(added)
    }
}
