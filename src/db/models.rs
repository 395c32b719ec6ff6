use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A Finnish/English word pair, optionally pointing at a tag id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Translation {
    pub id: i64,
    pub finnish_word: String,
    pub english_word: String,
    pub tag: Option<i64>,
}

/// A category label word pairs can be filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Tag {
    pub id: i64,
    pub tag: String,
}

/// A parent-control account. `password` is the bcrypt hash, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
