//! # Storage Layer
//!
//! This module defines the storage abstraction for snip. The
//! [`SnippetStore`] trait allows the application to work with different
//! storage backends, selected at configuration time.
//!
//! ## Implementations
//!
//! - [`json::JsonStore`]: file-backed storage
//!   - The whole collection lives in a single pretty-printed JSON array
//!   - Every insert rewrites the file (temp file + rename, so a crash
//!     mid-write never truncates the store)
//!   - A missing file reads as an empty collection
//!
//! - [`sqlite::SqliteStore`]: table-backed storage
//!   - One `snippets` table, created on open if absent
//!   - The `name` column carries a UNIQUE constraint as a second line of
//!     defense behind the explicit duplicate check
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Contract
//!
//! All backends enforce name uniqueness at insert time and return snippets
//! in a stable order: file order for `JsonStore`, ascending row id for
//! `SqliteStore`, insertion order for `InMemoryStore`.

use crate::error::Result;
use crate::model::Snippet;

pub mod json;
pub mod memory;
pub mod sqlite;

/// Abstract interface for snippet storage.
///
/// Snippets are immutable once inserted; the contract exposes no update or
/// delete operations.
pub trait SnippetStore {
    /// Load every stored snippet, in the backend's stable order.
    fn load_all(&self) -> Result<Vec<Snippet>>;

    /// Insert a snippet after checking that its name is not already taken.
    /// On duplicate, returns `SnipError::DuplicateName` and writes nothing.
    fn insert(&mut self, snippet: Snippet) -> Result<()>;

    /// The subsequence of `load_all` matching `predicate`, original order
    /// preserved.
    fn query(&self, predicate: &dyn Fn(&Snippet) -> bool) -> Result<Vec<Snippet>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|s| predicate(s))
            .collect())
    }
}
