// Main entry point for MediBot

use medibot::api::{create_router, AppState};
use medibot::auth::AuthService;
use medibot::config::Config;
use medibot::matcher::SymptomMatcher;
use medibot::store::{CorpusStore, JsonUserStore, UserStore};

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load and validate configuration first (before any logging)
    let config = Config::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!(e)
    })?;

    // 2. Initialize tracing subscriber with config values
    init_tracing(&config)?;

    info!("Starting MediBot");

    info!(
        bind_address = %config.bind_address,
        port = config.port,
        "Configuration loaded"
    );

    // 3. Load the condition corpus (missing file degrades to empty)
    let corpus = Arc::new(CorpusStore::from_file(&config.diseases_path));

    // 4. Load the credential store (missing file degrades to empty)
    let users: Arc<dyn UserStore> = Arc::new(JsonUserStore::load(&config.users_path));

    // 5. Build the services
    let auth = Arc::new(AuthService::new(users.clone()));
    let matcher = Arc::new(SymptomMatcher::new(corpus.clone()));

    info!("Services initialized");

    // 6. Create AppState and router
    let app_state = AppState {
        auth,
        matcher,
        users,
        corpus,
        config: Arc::new(config.clone()),
    };
    let router = create_router(app_state);

    info!("Router created");

    // 7. Start HTTP server
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, "Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber based on configuration
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
