//! Shared daemon client, auth header, and response helpers.
//!
//! # Design
//! - One `CoreClient` per settings snapshot; cloning shares the connection pool.
//! - Status handling is left to each operation: probes, lookups, and the
//!   storage call each accept different statuses.

use reqwest::header::AUTHORIZATION;
#[cfg(not(target_arch = "wasm32"))]
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use stackport_config::ApiSettings;

use crate::error::{CoreClientError, CoreResult};

/// Authorization header value for a daemon password.
#[must_use]
pub fn authorization_header_value(core_api_password: &str) -> String {
    format!("bearer {core_api_password}")
}

/// HTTP client bound to a settings snapshot.
#[derive(Clone, Debug)]
pub struct CoreClient {
    pub(crate) http: Client,
    pub(crate) settings: ApiSettings,
}

impl CoreClient {
    /// Create a client with a default HTTP stack.
    #[must_use]
    pub fn new(settings: ApiSettings) -> Self {
        Self::with_http(Client::new(), settings)
    }

    /// Create a client around an existing HTTP client (timeouts, default headers).
    #[must_use]
    pub const fn with_http(http: Client, settings: ApiSettings) -> Self {
        Self { http, settings }
    }

    /// Settings this client was built from.
    #[must_use]
    pub const fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    pub(crate) fn authorize(
        &self,
        request: RequestBuilder,
        password: Option<&str>,
    ) -> RequestBuilder {
        match password.or(self.settings.core_api_password.as_deref()) {
            Some(password) => request.header(AUTHORIZATION, authorization_header_value(password)),
            None => request,
        }
    }

    /// Browsers get the fetch cache mode so no CORS preflight is triggered.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn uncached(request: RequestBuilder) -> RequestBuilder {
        request.fetch_cache_no_store()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn uncached(request: RequestBuilder) -> RequestBuilder {
        request.header(CACHE_CONTROL, "no-store")
    }

    pub(crate) async fn send(url: &str, request: RequestBuilder) -> CoreResult<Response> {
        request
            .send()
            .await
            .map_err(|source| CoreClientError::Transport {
                url: url.to_string(),
                source,
            })
    }

    pub(crate) async fn decode<T: DeserializeOwned>(
        url: &str,
        response: Response,
    ) -> CoreResult<T> {
        let text = response
            .text()
            .await
            .map_err(|source| CoreClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| CoreClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub(crate) fn ensure_success(url: &str, response: Response) -> CoreResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(CoreClientError::status(url, response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::authorization_header_value;

    #[test]
    fn bearer_prefix_is_lowercase() {
        assert_eq!(authorization_header_value("s3cret"), "bearer s3cret");
    }
}
