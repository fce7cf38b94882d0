//! HTTP client for the api
//!
//! Thin transport layer over `reqwest`: serializes a filter into query
//! parameters, issues the GET, lifts the `Link` header into a [`LinkMap`]
//! and decodes the JSON body. All pagination and filter logic lives in the
//! `pagination` and `filter` modules and is pure computation.

use crate::error::{Error, Result};
use crate::filter::{BookFilter, CharacterFilter, Filter, HouseFilter};
use crate::pagination::{parse_link_header, LinkMap, Paged};
use crate::resource::{Book, Character, House, Resource};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://anapioficeandfire.com/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for [`IceAndFireClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the api
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("iceandfire/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL (useful for tests and mirrors)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Client for An API of Ice and Fire
///
/// Exposes the three resource kinds of the api. List endpoints accept a
/// filter and return a [`Paged`] result; single-resource endpoints fetch
/// by id. Requests are issued serially; the client holds no mutable state
/// and can be shared freely.
#[derive(Debug, Clone)]
pub struct IceAndFireClient {
    http: Client,
    config: ClientConfig,
}

impl IceAndFireClient {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("failed to build HTTP client");

        Self { http, config }
    }

    /// List books matching the given filter
    pub async fn books(&self, filter: BookFilter) -> Result<Paged<Book>> {
        self.list(&filter).await
    }

    /// Fetch a single book by id
    pub async fn book(&self, id: u64) -> Result<Book> {
        self.fetch_by_id(id).await
    }

    /// List characters matching the given filter
    pub async fn characters(&self, filter: CharacterFilter) -> Result<Paged<Character>> {
        self.list(&filter).await
    }

    /// Fetch a single character by id
    pub async fn character(&self, id: u64) -> Result<Character> {
        self.fetch_by_id(id).await
    }

    /// List houses matching the given filter
    pub async fn houses(&self, filter: HouseFilter) -> Result<Paged<House>> {
        self.list(&filter).await
    }

    /// Fetch a single house by id
    pub async fn house(&self, id: u64) -> Result<House> {
        self.fetch_by_id(id).await
    }

    async fn list<T: Resource>(&self, filter: &T::Filter) -> Result<Paged<T>> {
        let url = format!("{}/{}", self.base_url(), T::ENDPOINT);
        let params = filter.to_query_params();
        debug!(%url, params = ?params, "listing resources");

        let response = self.http.get(&url).query(&params).send().await?;
        let response = check_status(response).await?;

        let links = links_from_response(&response)?;
        let data: Vec<T> = response.json().await?;
        debug!(count = data.len(), links = links.len(), "decoded page");

        Ok(Paged::new(data, links))
    }

    async fn fetch_by_id<T: Resource>(&self, id: u64) -> Result<T> {
        let url = format!("{}/{}/{}", self.base_url(), T::ENDPOINT, id);
        debug!(%url, "fetching resource");

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        Ok(response.json().await?)
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

impl Default for IceAndFireClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map non-success statuses to errors; 404 gets its own variant
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(Error::ResourceNotFound);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::http_status(status.as_u16(), body));
    }
    Ok(response)
}

/// Extract and parse the `Link` header, if the response carries one
fn links_from_response(response: &reqwest::Response) -> Result<LinkMap> {
    match response.headers().get("link") {
        None => Ok(LinkMap::new()),
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| Error::link_header("<link header>", "value is not valid ASCII"))?;
            parse_link_header(raw)
        }
    }
}
