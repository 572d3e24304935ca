//! HTTP enrichment backed by a word-association API (datamuse-style) and a
//! random-quote API (quotable-style).
//!
//! One attempt per call, bounded by the client timeout. Every failure is
//! logged at `warn` and folded into the empty default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::{Enricher, Quote};

pub const DEFAULT_WORDS_URL: &str = "https://api.datamuse.com/words";
pub const DEFAULT_QUOTES_URL: &str = "https://api.quotable.io/random";

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    word: String,
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    content: String,
    #[serde(default)]
    author: String,
}

#[derive(Clone)]
pub struct HttpEnricher {
    client: Client,
    words_url: String,
    quotes_url: String,
}

impl HttpEnricher {
    pub fn new(
        words_url: impl Into<String>,
        quotes_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EnrichmentError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            words_url: words_url.into(),
            quotes_url: quotes_url.into(),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, EnrichmentError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Api {
                status: status.as_u16(),
            });
        }
        // Read as text first so a shape mismatch is a Parse error, not Http.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn try_fetch_synonyms(&self, topic: &str) -> Result<Vec<String>, EnrichmentError> {
        let entries: Vec<WordEntry> = self
            .get_json(self.client.get(&self.words_url).query(&[("rel_syn", topic)]))
            .await?;
        Ok(entries
            .into_iter()
            .map(|e| e.word)
            .filter(|w| !w.trim().is_empty())
            .collect())
    }

    async fn try_fetch_quote(&self) -> Result<Option<Quote>, EnrichmentError> {
        let payload: QuotePayload = self.get_json(self.client.get(&self.quotes_url)).await?;
        if payload.content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Quote {
            content: payload.content,
            author: payload.author,
        }))
    }
}

#[async_trait]
impl Enricher for HttpEnricher {
    async fn fetch_synonyms(&self, topic: &str) -> Vec<String> {
        match self.try_fetch_synonyms(topic).await {
            Ok(words) => {
                debug!("Fetched {} synonyms for topic {:?}", words.len(), topic);
                words
            }
            Err(e) => {
                warn!("Synonym lookup for {:?} failed, continuing without: {e}", topic);
                Vec::new()
            }
        }
    }

    async fn fetch_quote(&self) -> Option<Quote> {
        match self.try_fetch_quote().await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Quote lookup failed, continuing without: {e}");
                None
            }
        }
    }
}
