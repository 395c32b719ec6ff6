//! Process configuration, extracted once from the environment.
//!
//! Keys are read with the `SANASTO_` prefix (e.g. `SANASTO_SECRET_KEY`);
//! `.env` files are honored via dotenvy in `main`.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// sqlx connection string, e.g. `sqlite:sanasto.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// HMAC secret used to sign login tokens. Required.
    pub secret_key: String,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Insert the starter word pairs at startup.
    #[serde(default = "default_seed_words")]
    pub seed_words: bool,
}

fn default_database_url() -> String {
    "sqlite:sanasto.db".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_seed_words() -> bool {
    true
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::prefixed("SANASTO_"))
        .extract()
        .expect("invalid configuration (is SANASTO_SECRET_KEY set?)")
});
