// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Wire shapes for the OpenAPI document. The gateway forwards request bodies
//! to the upstream service verbatim, so handlers extract raw JSON; these
//! types document the expected shape of each operation and are not enforced
//! at the boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Request Shapes
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,
    pub password: String,
}

/// Registration payload. Extra fields are forwarded to the upstream service
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteResetRequest {
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeactivateAccountRequest {
    pub user_id: String,
}

// =============================================================================
// Response Shapes
// =============================================================================

/// Normalized error body; every non-pass-through response uses this shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
