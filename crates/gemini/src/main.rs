use std::net::SocketAddr;

use anyhow::Context;
use dotenv::dotenv;
use gemini::conf::configuration::Configuration;
use gemini::state::AppDBState;
use gemini::store::FriendsStore;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Configuration::load().context("failed to load configuration")?;
    gemini::logging_tracing::init(&config)?;

    let store = FriendsStore::connect(&config.database)
        .await
        .context("failed to connect to the friends database")?;
    store.create_schema().await?;

    let routes_all = gemini::app(AppDBState::new(store.clone()));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.disconnect().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
