use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::search_query::SearchQuery,
};

/// Accept/reject bookkeeping for one link category.
///
/// `accepted`, `rejected` and `candidates` are pairwise disjoint after every
/// mutation. `rejected` also acts as the exclusion filter for later searches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurationState {
    candidates: Vec<String>,
    accepted: Vec<String>,
    rejected: BTreeSet<String>,
    cursor: usize,
    query: Option<SearchQuery>,
}

impl CurationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn rejected(&self) -> &BTreeSet<String> {
        &self.rejected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn is_accepted(&self, url: &str) -> bool {
        self.accepted.iter().any(|u| u == url)
    }

    pub fn is_known(&self, url: &str) -> bool {
        self.rejected.contains(url)
            || self.is_accepted(url)
            || self.candidates.iter().any(|u| u == url)
    }

    /// Starts a fresh query: replaces the candidate page and points the
    /// cursor just past the results that were requested.
    pub fn begin(&mut self, query: SearchQuery, links: Vec<String>, cursor: usize) {
        self.query = Some(query);
        self.candidates.clear();
        self.absorb(links);
        self.cursor = cursor;
    }

    /// Forgets the query and candidate page. Accepted and rejected survive.
    pub fn reset(&mut self) {
        self.query = None;
        self.candidates.clear();
        self.cursor = 0;
    }

    /// Moves a candidate into the accepted set. Accepting an already accepted
    /// URL is a no-op and returns `Ok(false)`.
    pub fn accept(&mut self, url: &str) -> AppResult<bool> {
        if self.is_accepted(url) {
            return Ok(false);
        }

        let position = self
            .candidates
            .iter()
            .position(|u| u == url)
            .ok_or_else(|| AppError::NotFound(format!("'{}' is not a candidate link", url)))?;

        let url = self.candidates.remove(position);
        self.accepted.push(url);
        Ok(true)
    }

    /// Excludes a URL for the rest of the session, overriding an earlier accept.
    pub fn reject(&mut self, url: &str) -> bool {
        self.candidates.retain(|u| u != url);
        self.accepted.retain(|u| u != url);
        self.rejected.insert(url.to_string())
    }

    /// Appends a user-supplied URL unless it is already known in any list.
    pub fn manual_add(&mut self, url: &str) -> bool {
        if self.is_known(url) {
            return false;
        }
        self.candidates.push(url.to_string());
        true
    }

    /// Appends every unknown URL in order and returns how many were added.
    pub fn absorb(&mut self, links: Vec<String>) -> usize {
        let mut added = 0;
        for link in links {
            if !self.is_known(&link) {
                self.candidates.push(link);
                added += 1;
            }
        }
        added
    }

    pub fn advance_cursor(&mut self, by: usize) {
        self.cursor += by;
    }

    /// Candidates in display order, then every accepted URL.
    pub fn display_view(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .chain(self.accepted.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn has_visible_links(&self) -> bool {
        !self.candidates.is_empty() || !self.accepted.is_empty()
    }

    /// Links whose page text feeds question generation: accepted first, then
    /// candidates, capped at `limit`.
    pub fn document_links(&self, limit: usize) -> Vec<String> {
        self.accepted
            .iter()
            .chain(self.candidates.iter())
            .take(limit)
            .cloned()
            .collect()
    }
}
