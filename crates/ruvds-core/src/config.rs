//! Configuration for RUVDS clients.
//!
//! This module provides the configuration handed to a client at construction:
//! the API endpoint, the bearer token, and the request timeout. The token is
//! kept behind [`SecretString`] so it never shows up in debug output.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Production endpoint of the RUVDS v2 API.
pub const DEFAULT_API_URL: &str = "https://api.ruvds.com";

/// Configuration for a RUVDS client instance.
#[derive(Debug, Deserialize, Validate)]
pub struct RuvdsConfig {
    /// Base URL of the API
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token used for authentication
    pub api_token: SecretString,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl RuvdsConfig {
    /// Create a configuration for the production endpoint.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_url: default_api_url(),
            api_token: SecretString::from(api_token.into()),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Point the client at a different endpoint (staging, mock server).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Check the configuration against its constraints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the endpoint is not a URL or the
    /// timeout is out of range.
    pub fn ensure_valid(&self) -> Result<(), Error> {
        self.validate().map_err(Error::from)
    }

    /// Render the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.api_token.expose_secret())
    }

    /// Parse the configured endpoint into a [`Url`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] when the endpoint is not a valid URL.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url).map_err(|err| {
            Error::InvalidEndpoint(format!("Invalid API URL `{}`: {err}", self.api_url))
        })
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
