//! researchmap API client.
//!
//! Thin async HTTP client over the three public endpoints: researcher
//! search, profile, and published papers. Calls are strictly sequential and
//! single-shot: no retries, no response caching.

use reqwest::Client;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Profile, PublicationPage, ResearcherSearchPage};

/// Query parameters for a publication page request.
///
/// Only supplied, non-empty values end up in the outgoing request; empty
/// strings and zero limits are never sent.
#[derive(Debug, Clone, Default)]
pub struct PublicationQuery {
    /// Maximum number of items to retrieve.
    pub limit: Option<u32>,

    /// Starting publication date, e.g. `2016` or `2016-01-01`.
    pub from_date: Option<String>,

    /// Ending publication date.
    pub to_date: Option<String>,
}

impl PublicationQuery {
    /// A query with only a limit set.
    #[must_use]
    pub const fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit), from_date: None, to_date: None }
    }

    /// Query-string pairs for the supplied, non-empty parameters.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(from) = self.from_date.as_deref().filter(|d| !d.is_empty()) {
            params.push(("from_date".to_string(), from.to_string()));
        }
        if let Some(to) = self.to_date.as_deref().filter(|d| !d.is_empty()) {
            params.push(("to_date".to_string(), to.to_string()));
        }

        params
    }
}

/// researchmap API client.
#[derive(Clone)]
pub struct ResearchmapClient {
    /// Pooled HTTP client.
    client: Client,

    /// API base URL.
    base_url: String,

    /// Public site base URL, used for outbound profile links.
    site_url: String,
}

impl ResearchmapClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(crate::config::api::MAX_KEEPALIVE)
            .pool_idle_timeout(crate::config::api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.base_url, site_url: config.site_url })
    }

    /// Base URL of the public site, for building outbound links.
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Search researchers by name.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or non-2xx status.
    pub async fn search_researchers(
        &self,
        name: &str,
        count: u32,
    ) -> Result<ResearcherSearchPage> {
        let url = format!("{}/researchers", self.base_url);
        let params =
            vec![("name".to_string(), name.to_string()), ("count".to_string(), count.to_string())];

        self.get(&url, &params).await
    }

    /// Get a researcher profile by permalink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileNotFound`] on non-2xx status, so callers can
    /// show the profile-specific wording.
    pub async fn get_profile(&self, permalink: &str) -> Result<Profile> {
        let url = format!("{}/{}", self.base_url, permalink);
        let params: Vec<(String, String)> = vec![];

        match self.get(&url, &params).await {
            Err(Error::Fetch { status }) => Err(Error::profile_not_found(status)),
            other => other,
        }
    }

    /// Get one page of a researcher's publications.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or non-2xx status.
    pub async fn get_publications(
        &self,
        permalink: &str,
        query: &PublicationQuery,
    ) -> Result<PublicationPage> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            permalink,
            crate::config::api::PUBLISHED_PAPERS
        );

        self.get(&url, &query.params()).await
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, "fetching");

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();

        tracing::debug!(url, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(Error::fetch(status.as_u16()));
        }

        let value: serde_json::Value = response.json().await?;
        serde_json::from_value(value).map_err(Error::from)
    }
}

impl std::fmt::Debug for ResearchmapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchmapClient").field("base_url", &self.base_url).finish()
    }
}
