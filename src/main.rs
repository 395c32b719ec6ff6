use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Word pairs inserted into a fresh database so the quiz has content.
const STARTER_WORDS: &[(&str, &str)] = &[
    ("kissa", "cat"),
    ("mato", "worm"),
    ("koira", "dog"),
    ("hevonen", "horse"),
    ("kala", "fish"),
    ("sika", "pig"),
    ("lehmä", "cow"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &sanasto::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        bind_addr = %cfg.bind_addr,
        loglevel = %cfg.loglevel,
        seed_words = cfg.seed_words
    );

    let storage = sanasto::db::spawn(&cfg.database_url).await?;

    if cfg.seed_words {
        seed_starter_words(&storage).await;
    }

    let state =
        sanasto::router::SanastoState::new(storage, Arc::from(cfg.secret_key.as_str()));
    let app = sanasto::router::sanasto_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Reseeding an existing database is a no-op: duplicates are skipped.
async fn seed_starter_words(storage: &sanasto::VocabularyStorage) {
    for (finnish, english) in STARTER_WORDS {
        match storage.insert_translation(finnish, english).await {
            Ok(()) | Err(sanasto::SanastoError::DuplicateWord) => {}
            Err(e) => warn!(finnish = %finnish, english = %english, error = %e, "failed to seed word pair"),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
