//! Builder configuration.
//!
//! `BuilderConfig` carries every tunable of the deck builder: catalog
//! endpoint, paging, simulation sizes and export naming. It starts from
//! `Default`, can be layered from a TOML file, and finally from environment
//! variables.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Public catalog endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Image used when a card has no image or the card back cannot be resolved.
pub const DEFAULT_CARD_BACK_URL: &str = "https://images.pokemontcg.io/cardback.png";

/// File name offered for deck exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "pokemon-deck.json";

/// Default config file looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "deckbuilder.toml";

/// Complete deck builder configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Catalog API base URL (no trailing slash).
    pub api_base_url: String,

    /// Optional catalog API key, sent as `X-Api-Key`.
    pub api_key: Option<String>,

    /// Results per catalog page. A page shorter than this ends the search.
    pub page_size: usize,

    /// Per-request timeout for catalog calls.
    pub request_timeout_secs: u64,

    /// Minimum deck size before a deal simulation is offered.
    pub simulation_threshold: usize,

    /// Cards dealt to the opening hand.
    pub hand_size: usize,

    /// Cards set aside as prizes after the hand.
    pub prize_count: usize,

    /// Card back image used as placeholder.
    pub card_back_fallback_url: String,

    /// File name for deck exports.
    pub export_file_name: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            page_size: 20,
            request_timeout_secs: 30,
            simulation_threshold: 40,
            hand_size: 7,
            prize_count: 6,
            card_back_fallback_url: DEFAULT_CARD_BACK_URL.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl BuilderConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file if it exists, otherwise return defaults.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }
            .into()),
        }
    }

    /// Load the file (if any), then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a closure so tests don't touch process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DECKBUILDER_API_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("POKEMONTCG_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("DECKBUILDER_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("DECKBUILDER_PAGE_SIZE") {
            self.page_size = v.parse().map_err(|_| ConfigError::Invalid {
                key: "DECKBUILDER_PAGE_SIZE",
                reason: format!("not a number: {v}"),
            })?;
        }
        self.validate()
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_base_url",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Set the catalog base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the simulation threshold.
    #[must_use]
    pub fn with_simulation_threshold(mut self, threshold: usize) -> Self {
        self.simulation_threshold = threshold;
        self
    }

    /// Set hand and prize sizes for the deal.
    #[must_use]
    pub fn with_deal_sizes(mut self, hand_size: usize, prize_count: usize) -> Self {
        self.hand_size = hand_size;
        self.prize_count = prize_count;
        self
    }
}
