// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Upstream outcome normalization.
//!
//! Maps every [`UpstreamOutcome`] to a [`ClientResponse`] with a status from
//! the closed set `{2xx pass-through, 4xx pass-through, 502, 503}` and a JSON
//! body. Upstream 2xx and 4xx responses are meaningful to the caller and pass
//! through; all upstream 5xx codes collapse into a single 503 so internal
//! upstream error granularity never reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::upstream::{TransportFailureKind, UpstreamOutcome};

/// The response returned to the gateway's caller. Always fully built; the
/// route handlers return it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ClientResponse {
    fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    fn message(status: StatusCode, message: &str) -> Self {
        Self::new(status, json!({ "message": message }))
    }
}

impl IntoResponse for ClientResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map an upstream outcome to the client-facing response.
///
/// Pure and total: every outcome, including malformed status codes, resolves
/// to a well-formed response.
pub fn normalize(outcome: UpstreamOutcome) -> ClientResponse {
    match outcome {
        UpstreamOutcome::TransportFailure(
            TransportFailureKind::ConnectionRefused | TransportFailureKind::Timeout,
        ) => ClientResponse::message(
            StatusCode::SERVICE_UNAVAILABLE,
            "Authentication service is unavailable",
        ),
        UpstreamOutcome::TransportFailure(TransportFailureKind::ProtocolError) => {
            ClientResponse::message(StatusCode::BAD_GATEWAY, "HTTP error occurred")
        }
        UpstreamOutcome::TransportFailure(TransportFailureKind::Other) => {
            ClientResponse::message(
                StatusCode::BAD_GATEWAY,
                "An error occurred while connecting to authentication service",
            )
        }
        UpstreamOutcome::Success { body: None, .. } => ClientResponse::message(
            StatusCode::BAD_GATEWAY,
            "Invalid response from authentication service",
        ),
        UpstreamOutcome::Success {
            status,
            body: Some(body),
        } => match StatusCode::from_u16(status) {
            Ok(status) if status.is_success() => ClientResponse::new(status, body),
            Ok(status) if status.is_client_error() => {
                // Preserve the upstream message value as-is, string or not.
                let message = body
                    .get("message")
                    .cloned()
                    .unwrap_or_else(|| Value::String("Client error".to_string()));
                ClientResponse::new(status, json!({ "message": message }))
            }
            Ok(status) if status.is_server_error() => ClientResponse::message(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service encountered an error",
            ),
            // 1xx, 3xx, and codes outside [100,600) are all unexpected from
            // a JSON auth API.
            _ => ClientResponse::message(
                StatusCode::BAD_GATEWAY,
                "Unexpected response from authentication service",
            ),
        },
    }
}
