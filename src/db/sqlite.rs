use crate::db::models::{Tag, Translation, User};
use crate::db::schema::SQLITE_INIT;
use crate::error::SanastoError;
use sqlx::{Pool, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct VocabularyStorage {
    pool: SqlitePool,
}

impl VocabularyStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SanastoError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new word pair. Input is validated before any statement runs;
    /// a unique-constraint hit on either column surfaces as `DuplicateWord`.
    pub async fn insert_translation(
        &self,
        finnish: &str,
        english: &str,
    ) -> Result<(), SanastoError> {
        if finnish.trim().is_empty() || english.trim().is_empty() {
            return Err(SanastoError::InvalidInput("Both words are required"));
        }
        if contains_digit(finnish) || contains_digit(english) {
            return Err(SanastoError::InvalidInput("Words should not contain numbers"));
        }
        sqlx::query("INSERT INTO Translations (finnish_word, english_word) VALUES (?, ?)")
            .bind(finnish)
            .bind(english)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_as(e, SanastoError::DuplicateWord))?;
        Ok(())
    }

    /// Overwrite both word columns of the row with `id`. A miss is not an
    /// error; returns the number of rows affected.
    pub async fn update_translation(
        &self,
        id: i64,
        finnish: &str,
        english: &str,
    ) -> Result<u64, SanastoError> {
        let result =
            sqlx::query("UPDATE Translations SET finnish_word = ?, english_word = ? WHERE id = ?")
                .bind(finnish)
                .bind(english)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| duplicate_as(e, SanastoError::DuplicateWord))?;
        Ok(result.rows_affected())
    }

    /// Point the word pair at a tag id, or clear it with `None`.
    pub async fn update_translation_tag(
        &self,
        id: i64,
        tag_id: Option<i64>,
    ) -> Result<u64, SanastoError> {
        let result = sqlx::query("UPDATE Translations SET tag = ? WHERE id = ?")
            .bind(tag_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_translation(&self, id: i64) -> Result<u64, SanastoError> {
        let result = sqlx::query("DELETE FROM Translations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_translations(&self) -> Result<Vec<Translation>, SanastoError> {
        let rows = sqlx::query_as("SELECT id, finnish_word, english_word, tag FROM Translations")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_finnish_words(&self) -> Result<Vec<String>, SanastoError> {
        let words = sqlx::query_scalar("SELECT finnish_word FROM Translations")
            .fetch_all(&self.pool)
            .await?;
        Ok(words)
    }

    pub async fn list_english_words(&self) -> Result<Vec<String>, SanastoError> {
        let words = sqlx::query_scalar("SELECT english_word FROM Translations")
            .fetch_all(&self.pool)
            .await?;
        Ok(words)
    }

    pub async fn insert_tag(&self, label: &str) -> Result<(), SanastoError> {
        if label.trim().is_empty() {
            return Err(SanastoError::InvalidInput("Tag is required"));
        }
        sqlx::query("INSERT INTO Tags (tag) VALUES (?)")
            .bind(label)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, SanastoError> {
        let rows = sqlx::query_as("SELECT id, tag FROM Tags")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn delete_tag(&self, id: i64) -> Result<u64, SanastoError> {
        let result = sqlx::query("DELETE FROM Tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Store an account. `password_hash` must already be hashed; this layer
    /// never sees plaintext passwords.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), SanastoError> {
        if username.trim().is_empty() || password_hash.is_empty() {
            return Err(SanastoError::InvalidInput("Both fields are required"));
        }
        sqlx::query("INSERT INTO Users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_as(e, SanastoError::DuplicateUser))?;
        Ok(())
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, SanastoError> {
        let user = sqlx::query_as("SELECT id, username, password FROM Users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, SanastoError> {
        let rows = sqlx::query_as("SELECT id, username, password FROM Users")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn duplicate_as(err: sqlx::Error, dup: SanastoError) -> SanastoError {
    if matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation()) {
        dup
    } else {
        SanastoError::Database(err)
    }
}
