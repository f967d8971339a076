//! # Townhall Architecture
//!
//! Townhall is the information desk of a city government: an events board,
//! announcements, a directory of officials and departments, a services
//! catalog, community programs, and the forms residents use to reach the
//! city (contact inquiries and newsletter subscriptions).
//!
//! It is a **UI-agnostic library** with a terminal client on top. The core
//! never prints; the `townhall` binary is one possible front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses user strings into typed inputs (filters, tabs)    │
//! │  - Supplies the clock and page size                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - Uses engine.rs, catalog.rs, validation.rs                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlobStore trait: JSON values under string keys           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Events Board
//!
//! The heart of the crate is [`engine::FilterEngine`]: a fixed list of dated
//! items, a filtered or searched view over it, and a page cursor. Everything
//! else is mostly static content and small append-only records.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, engine, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `log`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Engine and commands**: thorough unit tests, pinned clock, in-memory store.
//! 2. **API**: dispatch tests over `InMemoryStore`.
//! 3. **CLI**: end-to-end runs of the binary against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`engine`]: Filtering, searching and paging of the events board
//! - [`catalog`]: Seed content (events, announcements, directory, services, programs)
//! - [`validation`]: Contact form and email checks
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`init`]: Locating the data directory and wiring the API
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
