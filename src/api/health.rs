// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::models::HealthResponse;

/// Health check endpoint handler.
///
/// Reports that the gateway process itself is running. Deliberately makes no
/// upstream call: upstream reachability is surfaced per-request as 503, not
/// through health.
#[utoipa::path(
    get,
    path = "/api/auth/health",
    tag = "Health",
    responses(
        (status = 200, description = "Gateway is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
