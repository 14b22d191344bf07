//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! snip operations. It dispatches to command functions and returns
//! structured `CmdResult` values; business logic lives in `commands/*.rs`
//! and presentation stays in the binary.
//!
//! `SnipApi<S: SnippetStore>` is generic over the storage backend:
//! production uses `JsonStore` or `SqliteStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::store::SnippetStore;
use crate::tags::TagSuggester;

pub struct SnipApi<S: SnippetStore> {
    store: S,
    suggester: Option<Box<dyn TagSuggester>>,
}

impl<S: SnippetStore> SnipApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            suggester: None,
        }
    }

    pub fn with_suggester(mut self, suggester: Box<dyn TagSuggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    pub fn add_snippet(
        &mut self,
        name: String,
        language: String,
        user_tags: Vec<String>,
        content: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            self.suggester.as_deref(),
            name,
            language,
            user_tags,
            content,
        )
    }

    pub fn list_snippets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_snippets(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
