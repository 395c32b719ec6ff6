//! SQL DDL for initializing the vocabulary store.

/// SQLite schema:
/// - `Translations.finnish_word` / `english_word` are each UNIQUE
/// - `Translations.tag` is a plain INTEGER column pointing at `Tags.id`;
///   there is no FOREIGN KEY, so deleting a tag leaves references behind
/// - `Users.username` UNIQUE; `password` holds the bcrypt hash
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Translations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    finnish_word VARCHAR(255) NOT NULL UNIQUE,
    english_word VARCHAR(255) NOT NULL UNIQUE,
    tag INTEGER
);

CREATE TABLE IF NOT EXISTS Users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS Tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag VARCHAR(255) NOT NULL
);
"#;
