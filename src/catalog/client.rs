//! Catalog client.
//!
//! `CatalogClient` is the seam between the deck builder and the remote
//! catalog. `HttpCatalogClient` talks to the Pokémon TCG API over reqwest;
//! tests can substitute any other implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cards::{Card, CardSet};
use crate::core::{BuilderConfig, CatalogError};

use super::query::Filter;

/// Largest page the catalog serves for `/sets`.
const SETS_PAGE_SIZE: usize = 250;

/// One page of search results.
#[derive(Clone, Debug, Default)]
pub struct SearchPage {
    pub cards: Vec<Card>,
    /// Records the catalog sent, before invalid ones were dropped. Decides
    /// whether another page exists.
    pub received: usize,
    /// Total matches reported by the catalog, when it reports one.
    pub total_count: Option<usize>,
}

impl From<Vec<Card>> for SearchPage {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            received: cards.len(),
            cards,
            total_count: None,
        }
    }
}

/// Source of catalog data.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of cards matching `filter`. Pages start at 1.
    async fn search(
        &self,
        filter: &Filter,
        page: usize,
        page_size: usize,
    ) -> Result<SearchPage, CatalogError>;

    /// Fetch every set the catalog knows.
    async fn sets(&self) -> Result<Vec<CardSet>, CatalogError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiList<T> {
    data: Vec<T>,
    #[serde(default)]
    total_count: Option<usize>,
}

/// HTTP client for the Pokémon TCG API.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpCatalogClient {
    /// Build a client from config. The request timeout applies to every call.
    pub fn new(config: &BuilderConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL requests go to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<T>(&self, path: &str, params: &[(&str, String)]) -> Result<ApiList<T>, CatalogError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{path}", self.base_url);
        let mut request = self.http.get(&url).query(params);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog: request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<ApiList<T>>().await?)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search(
        &self,
        filter: &Filter,
        page: usize,
        page_size: usize,
    ) -> Result<SearchPage, CatalogError> {
        let mut params = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if !filter.is_any() {
            params.push(("q", filter.render()));
        }
        debug!(q = %filter, page, page_size, "catalog: search");

        let list: ApiList<Card> = self.get_list("cards", &params).await?;
        let received = list.data.len();
        let cards: Vec<Card> = list.data.into_iter().filter(Card::is_valid).collect();
        if cards.len() != received {
            warn!(dropped = received - cards.len(), "catalog: dropped cards without a name");
        }
        info!(page, count = cards.len(), "catalog: page received");

        Ok(SearchPage {
            cards,
            received,
            total_count: list.total_count,
        })
    }

    async fn sets(&self) -> Result<Vec<CardSet>, CatalogError> {
        let mut sets = Vec::new();
        for page in 1.. {
            let params = [
                ("page", page.to_string()),
                ("pageSize", SETS_PAGE_SIZE.to_string()),
            ];
            let list: ApiList<CardSet> = self.get_list("sets", &params).await?;
            let received = list.data.len();
            sets.extend(list.data);
            debug!(page, received, "catalog: sets page");
            if received < SETS_PAGE_SIZE {
                break;
            }
        }
        info!(count = sets.len(), "catalog: sets received");
        Ok(sets)
    }
}

/// Resolve the card back image, falling back to `fallback` on any failure.
pub async fn card_back_url<C>(client: &C, fallback: &str) -> String
where
    C: CatalogClient + ?Sized,
{
    // `!name` asks the catalog for an exact name match.
    let filter = Filter::exact("!name", "Card Back");
    match client.search(&filter, 1, 20).await {
        Ok(page) => page
            .cards
            .iter()
            .find(|c| c.name == "Card Back")
            .and_then(|c| c.images.small.clone())
            .unwrap_or_else(|| fallback.to_string()),
        Err(e) => {
            warn!(error = %e, "catalog: card back lookup failed, using fallback");
            fallback.to_string()
        }
    }
}
