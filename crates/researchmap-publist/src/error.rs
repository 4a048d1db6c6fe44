//! Error types for the researchmap client and flows.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.
//!
//! An empty publication page is deliberately not represented here: a
//! successful call with zero items is a valid terminal state rendered as a
//! placeholder entry, never an error.

/// Errors from resolution, fetching, or response parsing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status from the API.
    #[error("API returned status {status}")]
    Fetch {
        /// HTTP status code
        status: u16,
    },

    /// Non-2xx status from the profile endpoint. Kept separate from
    /// [`Error::Fetch`] so the search flow can show its distinct wording.
    #[error("researcher profile not found ({status})")]
    ProfileNotFound {
        /// HTTP status code
        status: u16,
    },

    /// Researcher search succeeded but matched no usable researcher.
    #[error("no researchers found matching the query")]
    NoResearcherFound,

    /// JSON parsing error.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Create a fetch failure from a status code.
    #[must_use]
    pub const fn fetch(status: u16) -> Self {
        Self::Fetch { status }
    }

    /// Create a profile-not-found failure from a status code.
    #[must_use]
    pub const fn profile_not_found(status: u16) -> Self {
        Self::ProfileNotFound { status }
    }

    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status } | Self::ProfileNotFound { status } => Some(*status),
            _ => None,
        }
    }

    /// Convert to the message shown inside a container.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoResearcherFound => "No researchers found matching your query.".to_string(),
            _ => format!("Error: {self}"),
        }
    }
}

/// Result type alias for client and flow operations.
pub type Result<T> = std::result::Result<T, Error>;
