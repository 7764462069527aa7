use anyhow::Context;

use hangman_duel::{
    config::{Config, DEFAULT_LOG_FILTER},
    core::{RoundEngine, WordBank},
    routes,
    state::AppState,
    storage::JsonFileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = Config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    tracing::info!("🎯 Hangman duel starting...");
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env();

    let store = JsonFileStore::open(&config.store_path).with_context(|| {
        format!(
            "Failed to open word bank store {}",
            config.store_path.display()
        )
    })?;
    let word_bank = WordBank::load(Box::new(store)).context("Failed to load word bank")?;
    tracing::info!(
        "📚 Word bank loaded from {} ({} words)",
        config.store_path.display(),
        word_bank.size()
    );

    let engine = match config.seed {
        Some(seed) => {
            tracing::info!("🎲 Using fixed word selection seed {}", seed);
            RoundEngine::with_seed(seed)
        }
        None => RoundEngine::new(),
    };

    let state = AppState::new(word_bank, engine);
    let cors = routes::cors_layer(config.development, config.port);
    let app = routes::router(state, cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("✅ Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    tracing::info!("👋 Shutting down");
    Ok(())
}
