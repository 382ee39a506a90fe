// src/repositories/wardrobe_repository.rs
//
// Wardrobe document repository
//
// The wardrobe persists as one JSON document under a fixed key. This layer
// only moves that text in and out of storage; parsing belongs to the store.

use chrono::Utc;
use rusqlite::OptionalExtension;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::db::ConnectionPool;
use crate::error::AppResult;

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait WardrobeRepository: Send + Sync {
    /// Raw document text stored under `key`, if any
    fn read_document(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document stored under `key`
    fn write_document(&self, key: &str, document: &str) -> AppResult<()>;
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
pub struct SqliteWardrobeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteWardrobeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl WardrobeRepository for SqliteWardrobeRepository {
    fn read_document(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_document(&self, key: &str, document: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, document, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

// ---------------------------------------------------------------------
// In-memory Implementation (tests, throwaway sessions)
// ---------------------------------------------------------------------
#[derive(Default)]
pub struct InMemoryWardrobeRepository {
    documents: Mutex<HashMap<String, String>>,
}

impl InMemoryWardrobeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, e.g. one written by an older client
    pub fn with_document(key: &str, document: &str) -> Self {
        let repo = Self::new();
        repo.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), document.to_string());
        repo
    }
}

impl WardrobeRepository for InMemoryWardrobeRepository {
    fn read_document(&self, key: &str) -> AppResult<Option<String>> {
        let documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.get(key).cloned())
    }

    fn write_document(&self, key: &str, document: &str) -> AppResult<()> {
        let mut documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, initialize_database};

    fn sqlite_repo() -> (tempfile::TempDir, SqliteWardrobeRepository) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool_at(&dir.path().join("test.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        (dir, SqliteWardrobeRepository::new(Arc::new(pool)))
    }

    #[test]
    fn test_sqlite_missing_document_is_none() {
        let (_dir, repo) = sqlite_repo();
        assert_eq!(repo.read_document("chicpick_dresses").unwrap(), None);
    }

    #[test]
    fn test_sqlite_write_then_overwrite() {
        let (_dir, repo) = sqlite_repo();

        repo.write_document("chicpick_dresses", "[]").unwrap();
        repo.write_document("chicpick_dresses", "[1]").unwrap();

        assert_eq!(
            repo.read_document("chicpick_dresses").unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn test_sqlite_keys_are_independent() {
        let (_dir, repo) = sqlite_repo();

        repo.write_document("a", "first").unwrap();
        repo.write_document("b", "second").unwrap();

        assert_eq!(repo.read_document("a").unwrap().as_deref(), Some("first"));
        assert_eq!(repo.read_document("b").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_in_memory_round_trip() {
        let repo = InMemoryWardrobeRepository::with_document("k", "seed");
        assert_eq!(repo.read_document("k").unwrap().as_deref(), Some("seed"));

        repo.write_document("k", "next").unwrap();
        assert_eq!(repo.read_document("k").unwrap().as_deref(), Some("next"));
        assert_eq!(repo.read_document("other").unwrap(), None);
    }
}
