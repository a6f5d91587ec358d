// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Forwarding handlers for the authentication routes.
//!
//! Each handler mirrors its local path onto the upstream service, forwards
//! the JSON body untouched, and returns the normalized upstream outcome.
//! Handlers are infallible: every upstream failure mode is already folded
//! into the [`ClientResponse`] by the normalizer.

use axum::{
    extract::{Path, State},
    Json,
};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::{
    models::{
        CompleteResetRequest, DeactivateAccountRequest, LoginRequest, MessageBody,
        RefreshTokenRequest, RegisterRequest, ResetPasswordRequest,
    },
    normalize::{normalize, ClientResponse},
    state::AppState,
};

async fn forward(state: &AppState, path: &str, body: Option<Json<Value>>) -> ClientResponse {
    let body = body.map(|Json(value)| value);
    let outcome = state
        .auth_client
        .call(Method::POST, path, body.as_ref())
        .await;
    normalize(outcome)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn login(State(state): State<AppState>, body: Option<Json<Value>>) -> ClientResponse {
    info!("Login request received");
    forward(&state, "/login", body).await
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn register(State(state): State<AppState>, body: Option<Json<Value>>) -> ClientResponse {
    info!("Register request received");
    forward(&state, "/register", body).await
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    request_body = ResetPasswordRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn reset_password_request(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ClientResponse {
    info!("Reset password request received");
    forward(&state, "/reset-password", body).await
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password/{token}",
    request_body = CompleteResetRequest,
    params(("token" = String, Path, description = "Password reset token")),
    tag = "Auth",
    responses(
        (status = 200, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Option<Json<Value>>,
) -> ClientResponse {
    info!("Reset password with token request received");
    forward(&state, &format!("/reset-password/{token}"), body).await
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh-token",
    request_body = RefreshTokenRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ClientResponse {
    info!("Refresh token request received");
    forward(&state, "/refresh-token", body).await
}

#[utoipa::path(
    post,
    path = "/api/auth/deactivate-account",
    request_body = DeactivateAccountRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Upstream response passed through"),
        (status = 503, description = "Authentication service unavailable", body = MessageBody)
    )
)]
pub async fn deactivate_account(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ClientResponse {
    info!("Deactivate account request received");
    forward(&state, "/deactivate-account", body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::AuthServiceClient;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::time::Duration;
    use url::Url;

    fn unreachable_state() -> AppState {
        // Nothing listens on port 1; every call fails to connect.
        let url = Url::parse("http://127.0.0.1:1").expect("valid url");
        let client =
            AuthServiceClient::new(&url, Duration::from_secs(1)).expect("client builds");
        AppState::new(client)
    }

    #[tokio::test]
    async fn login_with_unreachable_upstream_is_service_unavailable() {
        let response = login(
            State(unreachable_state()),
            Some(Json(json!({ "username": "user", "password": "pass" }))),
        )
        .await;

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.body,
            json!({ "message": "Authentication service is unavailable" })
        );
    }

    #[tokio::test]
    async fn forward_accepts_missing_body() {
        let response = forward(&unreachable_state(), "/login", None).await;
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
