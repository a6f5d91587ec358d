// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use auth_gateway::{
    api::router, config::GatewayConfig, state::AppState, upstream::AuthServiceClient,
};

#[tokio::main]
async fn main() {
    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_tracing(config.json_logs);

    let auth_client =
        match AuthServiceClient::new(&config.auth_service_url, config.upstream_timeout) {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build upstream HTTP client: {e}");
                process::exit(1);
            }
        };

    let state = AppState::new(auth_client);
    let app = router(state, config.environment.mount_docs());

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Failed to parse bind address: {e}");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            process::exit(1);
        }
    };

    info!(
        upstream = %config.auth_service_url,
        environment = ?config.environment,
        "Auth gateway listening on http://{addr}"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server failed: {e}");
        process::exit(1);
    }
}

fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
