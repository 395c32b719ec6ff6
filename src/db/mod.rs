//! Database module: models, schema, and the SQLite-backed vocabulary store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pooled storage handle exposing the CRUD surface

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Tag, Translation, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, VocabularyStorage};

use crate::error::SanastoError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open the database behind `database_url` (creating the file if missing)
/// and run the schema bootstrap. The returned handle is cheap to clone.
pub async fn spawn(database_url: &str) -> Result<VocabularyStorage, SanastoError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let storage = VocabularyStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
