use std::sync::Arc;

use tokio::signal;
use tracing::info;

use game_core::GameEngine;
use game_persistence::{SqlKvStore, connection::connect_and_migrate};
use game_server::{config::Config, create_routes};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Hangman party server...");

    let config = Config::new();

    // Connect to the database and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(SqlKvStore::new(db));
    let engine = Arc::new(GameEngine::new(store));

    if config.seed_initial_words {
        match engine.word_bank().seed_initial_words().await {
            Ok(0) => info!("Word bank already populated, skipping seed"),
            Ok(count) => info!("Seeded {} starter words", count),
            Err(e) => {
                tracing::error!("Failed to seed word bank: {}", e);
                std::process::exit(1);
            }
        }
    }

    let routes = create_routes(engine);

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
                .expect("Failed to install SIGINT handler");
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler");

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
