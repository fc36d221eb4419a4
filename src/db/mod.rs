use dioxus::logger::tracing::debug;
use serde::de::DeserializeOwned;

use crate::api::AuthToken;
use crate::config::{IMAGE_KEYS_KEY, TOKENS_KEY};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
use rusqlite::OptionalExtension;

/// Error type for key-value store reads
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("no data directory for this platform")]
    DataDir,
    #[cfg(target_arch = "wasm32")]
    #[error("localStorage: {0}")]
    Browser(String),
}

/// Tokens currently in the store. Anything missing or unreadable counts as none.
pub fn load_tokens() -> Vec<AuthToken> {
    parse_tokens(load_raw(TOKENS_KEY).as_deref())
}

/// Object keys the gallery should show, same fallback as [`load_tokens`].
pub fn load_image_keys() -> Vec<String> {
    parse_list(load_raw(IMAGE_KEYS_KEY).as_deref())
}

pub fn parse_tokens(raw: Option<&str>) -> Vec<AuthToken> {
    parse_list(raw)
}

fn load_raw(key: &str) -> Option<String> {
    read_value(key).unwrap_or_else(|e| {
        debug!("store read for {key} failed, treating as absent: {e}");
        None
    })
}

/// A stored JSON array, or empty for absent, `null` or malformed content.
pub fn parse_list<T: DeserializeOwned>(raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<T>>>(raw) {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            debug!("ignoring malformed store value: {e}");
            Vec::new()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn read_value(key: &str) -> Result<Option<String>, StoreError> {
    LocalStorage::raw()
        .get_item(key)
        .map_err(|e| StoreError::Browser(format!("{e:?}")))
}

/// Reads the settings table without ever creating the database, its directory
/// or the table. Any of those missing means the key is absent.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_value(key: &str) -> Result<Option<String>, StoreError> {
    let db_path = dirs::data_dir()
        .ok_or(StoreError::DataDir)?
        .join("imagecard")
        .join("imagecard.db");
    read_value_at(&db_path, key)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value_at(db_path: &std::path::Path, key: &str) -> Result<Option<String>, StoreError> {
    use rusqlite::OpenFlags;

    if !db_path.is_file() {
        return Ok(None);
    }
    let conn = rusqlite::Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    read_setting(&conn, key)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_setting(conn: &rusqlite::Connection, key: &str) -> Result<Option<String>, StoreError> {
    let has_table = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'settings'",
            [],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !has_table {
        return Ok(None);
    }

    let value = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [key],
            |row: &rusqlite::Row| row.get(0),
        )
        .optional()?;
    Ok(value)
}
