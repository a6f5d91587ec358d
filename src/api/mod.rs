// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        CompleteResetRequest, DeactivateAccountRequest, HealthResponse, LoginRequest, MessageBody,
        RefreshTokenRequest, RegisterRequest, ResetPasswordRequest,
    },
    state::AppState,
};

pub mod auth;
pub mod health;

pub fn router(state: AppState, mount_docs: bool) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/reset-password", post(auth::reset_password_request))
        .route("/reset-password/{token}", post(auth::reset_password))
        .route("/refresh-token", post(auth::refresh_token))
        .route("/deactivate-account", post(auth::deactivate_account))
        .route("/health", get(health::health))
        .with_state(state);

    let mut app = Router::new().nest("/api/auth", auth_routes);

    if mount_docs {
        app = app.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// A panic in a handler is a gateway defect, never an upstream condition;
/// it is the one case where the client status is decoupled from upstream.
fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal server error" })),
    )
        .into_response()
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::register,
        auth::reset_password_request,
        auth::reset_password,
        auth::refresh_token,
        auth::deactivate_account,
        health::health
    ),
    components(
        schemas(
            LoginRequest,
            RegisterRequest,
            ResetPasswordRequest,
            CompleteResetRequest,
            RefreshTokenRequest,
            DeactivateAccountRequest,
            MessageBody,
            HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Forwarded authentication operations"),
        (name = "Health", description = "Gateway liveness")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::AuthServiceClient;
    use std::time::Duration;
    use url::Url;

    fn test_state() -> AppState {
        let url = Url::parse("http://127.0.0.1:1").expect("valid url");
        let client =
            AuthServiceClient::new(&url, Duration::from_secs(1)).expect("client builds");
        AppState::new(client)
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(test_state(), true);
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn router_builds_without_docs() {
        let app = router(test_state(), false);
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn panic_response_is_internal_server_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        assert_eq!(bytes.as_ref(), br#"{"message":"Internal server error"}"#);
    }
}
