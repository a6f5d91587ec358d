// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::upstream::AuthServiceClient;

/// Shared application state. The client is the only collaborator; requests
/// share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub auth_client: AuthServiceClient,
}

impl AppState {
    pub fn new(auth_client: AuthServiceClient) -> Self {
        Self { auth_client }
    }
}
