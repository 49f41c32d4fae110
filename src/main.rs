use blog_serve::init::{init_config, init_logging, init_routes};
use blog_serve::utils::config::AppConfig;
use chrono_tz::Tz;
use std::sync::Arc;
use tokio::signal;
use tracing::{event, Level};

#[tokio::main]
async fn main() {
    init_config();

    let timezone: Tz = std::env::var("TIMEZONE")
        .unwrap_or_else(|_| "Asia/Shanghai".to_string())
        .parse()
        .expect("Invalid timezone");
    let shared_timezone = Arc::new(timezone);

    // The guard keeps the non-blocking log writer alive for the whole
    // process; dropping it early would lose buffered records.
    let log_guard = init_logging(shared_timezone);

    let config = AppConfig::from_env();
    let app = init_routes(&config);

    event!(Level::INFO, "server started at {}", config.bind);

    let listener = tokio::net::TcpListener::bind(&config.bind).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    drop(log_guard);
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    println!("Shutdown signal received");
}
