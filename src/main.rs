mod api;
mod auth;
mod config;
mod core;
mod db;
mod engine;
mod notifications;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::Config;
use crate::db::SharedDatabase;
use crate::engine::RiskEngine;
use crate::notifications::Notifier;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("finshield=info".parse().unwrap()),
        )
        .init();

    tracing::info!("FinShield starting...");

    // Load configuration
    let config = Config::load("config.toml");
    tracing::info!("Config: {:?}", config);

    // Open the report/user database
    let db_path = Path::new(&config.database.path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create database directory");
    }
    let db = SharedDatabase::open(db_path).expect("Failed to open database");
    tracing::info!("Database opened at {}", config.database.path);

    // Build the rule base once; every request shares the same engine.
    let engine = Arc::new(RiskEngine::new());
    let notifier = Arc::new(Notifier::new(&config.notifications));

    let state = AppState {
        engine,
        db,
        notifier,
    };
    let app = api::router(state);

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .expect("invalid bind address");
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
