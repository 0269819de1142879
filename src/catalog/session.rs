//! Search pagination session.
//!
//! Tracks the current query, page, accumulated results and whether another
//! page exists. At most one request is in flight. Every new query bumps a
//! generation counter, and a response whose generation is no longer current
//! is dropped instead of being merged into newer results.
//!
//! The session can be driven two ways:
//! - `run_search` / `load_more` await a `CatalogClient` directly.
//! - `begin_*` / `complete` split a request in two for event loops that
//!   issue the fetch themselves.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cards::CardRef;
use crate::core::CatalogError;

use super::client::{CatalogClient, SearchPage};
use super::query::{build_query, Filter};

/// A page fetch the session has agreed to issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub filter: Filter,
    pub page: usize,
    pub page_size: usize,
}

/// What happened to a completed page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Results were appended.
    Applied {
        page: usize,
        added: usize,
        has_more: bool,
    },
    /// A newer query superseded this request; results were discarded.
    Stale,
    /// No request was issued (already loading, no more pages, or no query).
    Ignored,
}

/// Pagination state for one search box.
#[derive(Clone, Debug)]
pub struct SearchSession {
    query: String,
    filter: Filter,
    page: usize,
    page_size: usize,
    has_more: bool,
    loading: bool,
    generation: u64,
    results: Vec<CardRef>,
}

impl SearchSession {
    /// Create an idle session.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            filter: Filter::Any,
            page: 0,
            page_size: page_size.max(1),
            has_more: false,
            loading: false,
            generation: 0,
            results: Vec::new(),
        }
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last requested page (0 before any search).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Results per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True iff the last page came back full.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the current query.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Results accumulated across pages.
    #[must_use]
    pub fn results(&self) -> &[CardRef] {
        &self.results
    }

    /// Start a new query: reset to page 1 and clear results.
    ///
    /// Returns `None` for blank input. A request still in flight for an
    /// older query becomes stale.
    pub fn begin_search(&mut self, raw: &str) -> Option<PageRequest> {
        let query = raw.trim();
        if query.is_empty() {
            debug!("search: blank query ignored");
            return None;
        }
        if self.loading {
            debug!(generation = self.generation, "search: superseding in-flight request");
        }

        self.generation += 1;
        self.query = query.to_string();
        self.filter = build_query(query);
        self.page = 1;
        self.has_more = false;
        self.results.clear();
        self.loading = true;

        Some(self.request())
    }

    /// Request the next page of the current query.
    ///
    /// Returns `None` while loading, after the last page, or with no query.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more || self.query.is_empty() {
            debug!(
                loading = self.loading,
                has_more = self.has_more,
                "search: load more ignored"
            );
            return None;
        }
        self.page += 1;
        self.loading = true;
        Some(self.request())
    }

    /// Apply the result of a request issued by `begin_*`.
    ///
    /// Clears the loading flag whether the request succeeded or failed. A
    /// failed load-more rolls the page back so it can be retried. Another
    /// page exists when the catalog sent a full page, counting records that
    /// were dropped as invalid.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<SearchPage, CatalogError>,
    ) -> Result<PageOutcome, CatalogError> {
        if request.generation != self.generation {
            warn!(
                stale = request.generation,
                current = self.generation,
                "search: discarding stale response"
            );
            return Ok(PageOutcome::Stale);
        }

        self.loading = false;
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, page = request.page, "search: request failed");
                if request.page > 1 {
                    self.page = request.page - 1;
                }
                return Err(e);
            }
        };

        let received = page.received;
        let added = page.cards.len();
        self.has_more = received >= self.page_size;
        self.results.extend(page.cards.into_iter().map(Arc::new));
        info!(
            query = %self.query,
            page = request.page,
            received,
            added,
            has_more = self.has_more,
            "search: page applied"
        );

        Ok(PageOutcome::Applied {
            page: request.page,
            added,
            has_more: self.has_more,
        })
    }

    /// Start a new query and fetch its first page.
    pub async fn run_search<C>(&mut self, client: &C, raw: &str) -> Result<PageOutcome, CatalogError>
    where
        C: CatalogClient + ?Sized,
    {
        let Some(request) = self.begin_search(raw) else {
            return Ok(PageOutcome::Ignored);
        };
        self.fetch(client, request).await
    }

    /// Fetch the next page of the current query.
    pub async fn load_more<C>(&mut self, client: &C) -> Result<PageOutcome, CatalogError>
    where
        C: CatalogClient + ?Sized,
    {
        let Some(request) = self.begin_load_more() else {
            return Ok(PageOutcome::Ignored);
        };
        self.fetch(client, request).await
    }

    async fn fetch<C>(&mut self, client: &C, request: PageRequest) -> Result<PageOutcome, CatalogError>
    where
        C: CatalogClient + ?Sized,
    {
        let result = client
            .search(&request.filter, request.page, request.page_size)
            .await;
        self.complete(&request, result)
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            generation: self.generation,
            filter: self.filter.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(20)
    }
}
