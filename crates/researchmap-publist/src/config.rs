//! Configuration for the researchmap client and flows.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the researchmap JSON API.
    pub const BASE_URL: &str = "https://api.researchmap.jp";

    /// Base URL of the public researchmap site (outbound profile links).
    pub const SITE_URL: &str = "https://researchmap.jp";

    /// Resource path for publication achievements under a permalink.
    pub const PUBLISHED_PAPERS: &str = "published_papers";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Fixed limits used by the flows.
pub mod limits {
    /// Default `limit` for the direct publication list flow.
    pub const LIST_LIMIT: u32 = 1000;

    /// Default `limit` for publications fetched by the search flow.
    pub const SEARCH_LIST_LIMIT: u32 = 100;

    /// Result cap for researcher-name search calls.
    pub const SEARCH_COUNT: u32 = 10;
}

/// Client configuration.
///
/// There is no environment or file surface here on purpose: everything a
/// caller can vary is a function parameter, and `Config` only carries the
/// endpoint URLs and timeouts so tests can point the client at a mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the JSON API.
    pub base_url: String,

    /// Base URL for outbound links to the public site.
    pub site_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the production API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            site_url: api::SITE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            site_url: api::SITE_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
