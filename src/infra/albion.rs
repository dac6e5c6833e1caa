//! Thin asynchronous client for the Albion Online Data price API.
//!
//! - One GET per identifier list, always scoped to the royal cities.
//! - Responses are memoized for the session; there is no retry and no
//!   stale fallback.

use std::sync::Arc;

use reqwest::{Client, Url};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::{PriceRecord, ROYAL_CITIES};
use crate::infra::cache::{CachedPayload, PriceMemo};
use crate::util::version::version_label;

const PRICES_PATH: &str = "api/v2/stats/prices/";

#[derive(Debug, Error)]
pub enum AlbionClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no item identifiers requested")]
    EmptyRequest,
}

#[derive(Clone)]
pub struct AlbionClient {
    http: Client,
    base_url: Url,
    memo: Arc<Mutex<PriceMemo>>,
}

impl AlbionClient {
    pub fn new(config: &AppConfig) -> Result<Self, AlbionClientError> {
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut builder =
            Client::builder().user_agent(format!("albion-refining-calculator/{}", version_label()));
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            memo: Arc::new(Mutex::new(PriceMemo::default())),
        })
    }

    /// Prices for `identifiers` across the royal cities.
    ///
    /// An identical identifier list seen earlier in the session is answered
    /// from memory.
    pub async fn get_prices(
        &self,
        identifiers: &[String],
    ) -> Result<CachedPayload<Vec<PriceRecord>>, AlbionClientError> {
        if identifiers.is_empty() {
            return Err(AlbionClientError::EmptyRequest);
        }

        if let Some(payload) = self.memo.lock().await.get(identifiers) {
            debug!(items = %identifiers.join(","), "serving memoized prices");
            return Ok(payload);
        }

        let url = self.prices_url(identifiers)?;
        info!(%url, "requesting prices");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let records = parse_price_records(&body)?;

        if records.is_empty() {
            warn!(items = %identifiers.join(","), "price API returned no rows");
        } else {
            debug!(rows = records.len(), "parsed price rows");
        }

        Ok(self.memo.lock().await.insert(identifiers, records))
    }

    /// Forgets every memoized response so the next request hits the API.
    pub async fn clear_cache(&self) {
        self.memo.lock().await.clear();
    }

    fn prices_url(&self, identifiers: &[String]) -> Result<Url, url::ParseError> {
        let mut url = self
            .base_url
            .join(PRICES_PATH)?
            .join(&identifiers.join(","))?;
        url.set_query(Some(&format!("locations={}", ROYAL_CITIES.join(","))));
        Ok(url)
    }
}

fn parse_price_records(body: &[u8]) -> Result<Vec<PriceRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
