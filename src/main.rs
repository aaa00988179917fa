//! Roomboard server binary.
//!
//! Serves the Dioxus application plus a small status API, and installs
//! the table-backend client the server functions read from.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{routing::get, Router};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use roomboard::{api, app, config, remote};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomboard=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roomboard");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(port = config.port, "Configuration loaded");

    // Install the table-backend client for the server functions
    remote::init(config.remote.clone());

    // Build routes: status API plus the Dioxus application
    let router = Router::new()
        .route("/status", get(api::status_handler))
        .with_state(api::AppState::new())
        .serve_dioxus_application(ServeConfig::new(), app::App)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(roomboard::app::App);
}
