// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP client for the upstream authentication service.
//!
//! A single call per gateway request: no retries, no caching. Every call
//! resolves to an [`UpstreamOutcome`] so the normalizer can classify it
//! without inspecting transport errors itself.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

/// How a transport-level failure manifested.
///
/// Distinguished for observability; [`crate::normalize::normalize`] collapses
/// `ConnectionRefused` and `Timeout` into the same client-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    ConnectionRefused,
    Timeout,
    ProtocolError,
    Other,
}

/// Result of a single upstream call.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    /// An HTTP response was received. `body` is `None` when the response
    /// body could not be decoded as JSON.
    Success { status: u16, body: Option<Value> },
    /// No HTTP response was received.
    TransportFailure(TransportFailureKind),
}

#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    base_url: String,
    http: Client,
}

impl AuthServiceClient {
    /// Build a client for the given upstream base URL.
    ///
    /// The timeout covers the whole request, connect included; on expiry the
    /// call resolves to `TransportFailure(Timeout)`.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Issue one request to `base_url + path` and classify the result.
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> UpstreamOutcome {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return UpstreamOutcome::TransportFailure(classify_error(&e)),
        };

        let status = response.status().as_u16();
        // Decode failure is reported through an absent body, not as a
        // transport failure, so the normalizer decides what the client sees.
        let body = response.json::<Value>().await.ok();

        UpstreamOutcome::Success { status, body }
    }
}

fn classify_error(e: &reqwest::Error) -> TransportFailureKind {
    if e.is_timeout() {
        TransportFailureKind::Timeout
    } else if e.is_connect() {
        TransportFailureKind::ConnectionRefused
    } else if e.is_request() {
        TransportFailureKind::ProtocolError
    } else {
        TransportFailureKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let url = Url::parse("http://auth.internal:5001/").expect("valid url");
        let client =
            AuthServiceClient::new(&url, Duration::from_secs(5)).expect("client builds");
        assert_eq!(client.base_url, "http://auth.internal:5001");
    }

    #[tokio::test]
    async fn connection_refused_is_classified() {
        // Port 1 is in the reserved range; nothing listens there.
        let url = Url::parse("http://127.0.0.1:1").expect("valid url");
        let client =
            AuthServiceClient::new(&url, Duration::from_secs(5)).expect("client builds");

        let outcome = client.call(Method::POST, "/login", None).await;
        assert_eq!(
            outcome,
            UpstreamOutcome::TransportFailure(TransportFailureKind::ConnectionRefused)
        );
    }
}
