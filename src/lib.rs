// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth Gateway - Authentication Forwarding Service
//!
//! A thin HTTP gateway in front of the upstream authentication service.
//! Client-facing routes under `/api/auth` are forwarded one-to-one to the
//! upstream service and its outcomes are normalized into a stable response
//! shape before they reach the caller.
//!
//! ## Modules
//!
//! - `api` - HTTP route handlers (Axum)
//! - `upstream` - HTTP client for the upstream authentication service
//! - `normalize` - Upstream outcome to client response mapping
//! - `config` - Environment-sourced configuration

pub mod api;
pub mod config;
pub mod models;
pub mod normalize;
pub mod state;
pub mod upstream;
