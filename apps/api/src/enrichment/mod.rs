//! Enrichment: best-effort word and quote lookups that diversify generated text.
//!
//! No method on `Enricher` returns an error. Implementations swallow failures
//! and return the empty default; generation proceeds with less variety.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpEnricher;

/// An inspirational quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Source of synonym words and quotes. Carried as `Arc<dyn Enricher>`.
#[async_trait]
pub trait Enricher: Send + Sync {
    /// Words associated with `topic`. Empty on any failure.
    async fn fetch_synonyms(&self, topic: &str) -> Vec<String>;

    /// A random quote. `None` on any failure.
    async fn fetch_quote(&self) -> Option<Quote>;
}

/// Never returns anything. Used when enrichment is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEnricher;

#[async_trait]
impl Enricher for NoopEnricher {
    async fn fetch_synonyms(&self, _topic: &str) -> Vec<String> {
        Vec::new()
    }

    async fn fetch_quote(&self) -> Option<Quote> {
        None
    }
}

/// Fixed words and quote, regardless of topic.
#[derive(Debug, Clone, Default)]
pub struct StaticEnricher {
    pub words: Vec<String>,
    pub quote: Option<Quote>,
}

impl StaticEnricher {
    pub fn new(words: &[&str], quote: Option<(&str, &str)>) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            quote: quote.map(|(content, author)| Quote {
                content: content.to_string(),
                author: author.to_string(),
            }),
        }
    }
}

#[async_trait]
impl Enricher for StaticEnricher {
    async fn fetch_synonyms(&self, _topic: &str) -> Vec<String> {
        self.words.clone()
    }

    async fn fetch_quote(&self) -> Option<Quote> {
        self.quote.clone()
    }
}
