// src/fetch/mod.rs

pub mod harvest;

pub use harvest::{gather, harvest, select_bob_lists, BobList, Harvest};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{Config, Credentials};
use crate::types::{BoardList, RawCard};

/// Thin read-only client for the board API. No retries: a failed request
/// fails the run.
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    api_url: Url,
    credentials: Credentials,
}

impl BoardClient {
    pub fn new(client: Client, api_url: Url, credentials: Credentials) -> Self {
        Self {
            client,
            api_url,
            credentials,
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.api_url.clone(), config.credentials.clone())
    }

    /// `{api}/boards/{board_id}/lists`
    pub fn lists_url(&self, board_id: &str) -> Result<Url> {
        self.endpoint(&format!("boards/{}/lists", board_id))
    }

    /// `{api}/lists/{list_id}/cards`
    pub fn cards_url(&self, list_id: &str) -> Result<Url> {
        self.endpoint(&format!("lists/{}/cards", list_id))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .with_context(|| format!("joining {} onto {}", path, self.api_url))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        self.client
            .get(url.clone())
            .query(&self.credentials.query())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", url))?
            .json::<T>()
            .await
            .with_context(|| format!("decoding JSON from {}", url))
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        self.get_json(self.lists_url(board_id)?).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_cards(&self, list_id: &str) -> Result<Vec<RawCard>> {
        self.get_json(self.cards_url(list_id)?).await
    }
}
