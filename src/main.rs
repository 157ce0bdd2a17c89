//! Application entry point: configuration, logging, routes, server.
//!
//! Run with:
//!   cargo run
//!
//! Try:
//!   curl http://localhost:8080/users/
//!   curl http://localhost:8080/healthz

use shortly::controllers::{health, users};
use shortly::{Config, Router, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::load().expect("configuration error");

    // RUST_LOG wins when set; the configured level is the fallback.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let app = Router::new()
        .get("/users/",  users::index)
        .get("/healthz", health::liveness)
        .get("/readyz",  health::readiness);

    tracing::debug!(
        routes = %String::from_utf8_lossy(app.routes().body()),
        "route table"
    );

    Server::bind(&config.server_addr())
        .serve(app)
        .await
        .expect("server error");
}
