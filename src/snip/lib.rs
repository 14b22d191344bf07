//! # Snip Architecture
//!
//! Snip is a **UI-agnostic snippet-manager library** with a thin CLI binary
//! on top. The layering keeps terminal concerns out of the core:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, logging.rs)                   │
//! │  - Parses arguments, resolves config, formats output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: add, list, search                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnippetStore trait                              │
//! │  - JsonStore / SqliteStore (production), InMemoryStore      │
//! │    (testing)                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tag augmentation (`tags.rs`) sits beside the command layer behind the
//! `TagSuggester` trait: the add command consumes it as an opaque,
//! best-effort collaborator and never fails because of it.
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never calls
//! `std::process::exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Snippet` type and tag-text helpers
//! - [`tags`]: Best-effort tag suggestion over HTTP
//! - [`config`]: Explicit configuration, resolved once at the CLI boundary
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
pub mod tags;
