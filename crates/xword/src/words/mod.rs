use crate::prelude::*;
use async_trait::async_trait;
use std::time::Duration;
use xword_core::suggestions::{collect_words, ServiceWord};

pub mod generate;
pub mod synonyms;

/// Kind of association requested from the word service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupMode {
    /// Words with a similar meaning
    SimilarMeaning,
    /// Words statistically triggered by the query
    Triggered,
}

impl LookupMode {
    fn query_param(&self) -> &'static str {
        match self {
            LookupMode::SimilarMeaning => "ml",
            LookupMode::Triggered => "rel_trg",
        }
    }
}

/// Source of word associations
///
/// Every call is an independent request. Implementations do not retry or cache.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(
        &self,
        query: &str,
        mode: LookupMode,
        max: usize,
    ) -> Result<Vec<String>, Error>;
}

/// Word lookups backed by the Datamuse API
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DatamuseClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("xword/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(&global.api_base, Duration::from_secs(global.timeout))
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout.as_secs())
        } else if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

#[async_trait]
impl WordLookup for DatamuseClient {
    async fn lookup(
        &self,
        query: &str,
        mode: LookupMode,
        max: usize,
    ) -> Result<Vec<String>, Error> {
        let url = format!("{}/words", self.base_url);
        let param = mode.query_param();
        log::debug!("GET {url} {param}={query:?} max={max}");

        let response = self
            .client
            .get(&url)
            .query(&[(param, query.to_string()), ("max", max.to_string())])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!("HTTP {}", response.status())));
        }

        let body: Vec<ServiceWord> = response.json().await.map_err(|e| self.classify(e))?;
        let words = collect_words(body);
        log::debug!("{param} {query:?} returned {} words", words.len());

        Ok(words)
    }
}
