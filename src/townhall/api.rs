//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every townhall operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing a filter name into a [`Category`])
//! - **Supplies context** the commands need: the store, the configured page
//!   size and the current time
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over BlobStore
//!
//! `TownhallApi<S: BlobStore>` is generic over the storage backend:
//! - Production: `TownhallApi<FileStore>`
//! - Testing: `TownhallApi<InMemoryStore>`
//!
//! ## Time
//!
//! Methods that depend on "now" read the clock through [`TownhallApi::now`],
//! which can be pinned with [`TownhallApi::with_clock`] so tests do not depend
//! on the day they run.

use crate::commands;
use crate::engine::{Category, FilterEngine};
use crate::error::{Result, TownhallError};
use crate::model::{ContactForm, ProgramKind, ServiceTab};
use crate::store::BlobStore;
use crate::validation::FieldError;
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// The main API facade for townhall operations.
pub struct TownhallApi<S: BlobStore> {
    store: S,
    paths: commands::TownhallPaths,
    page_size: NonZeroUsize,
    clock: Option<DateTime<Utc>>,
}

impl<S: BlobStore> TownhallApi<S> {
    pub fn new(store: S, paths: commands::TownhallPaths, page_size: NonZeroUsize) -> Self {
        Self {
            store,
            paths,
            page_size,
            clock: None,
        }
    }

    /// Pins "now" to a fixed instant.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }

    pub fn events(&mut self, query: EventQuery) -> Result<CmdResult> {
        let now = self.now();
        commands::events::run(&mut self.store, query, self.page_size, now)
    }

    pub fn event(&mut self, id: u32) -> Result<CmdResult> {
        let now = self.now();
        commands::events::detail(&mut self.store, id, now)
    }

    /// A live engine over today's board, for interactive browsing.
    pub fn event_engine(&mut self) -> Result<FilterEngine> {
        let now = self.now();
        commands::events::engine(&mut self.store, self.page_size, now)
    }

    pub fn announcements(&self) -> Result<CmdResult> {
        commands::announcements::list()
    }

    pub fn announcement(&self, id: u32) -> Result<CmdResult> {
        commands::announcements::get(id)
    }

    pub fn officials(&self) -> Result<CmdResult> {
        commands::directory::officials()
    }

    pub fn departments(&self) -> Result<CmdResult> {
        commands::directory::departments()
    }

    pub fn services(&self, tab: ServiceTab) -> Result<CmdResult> {
        commands::services::list(tab)
    }

    pub fn service(&self, id: u32) -> Result<CmdResult> {
        commands::services::get(id)
    }

    pub fn search_services(&self, term: &str) -> Result<CmdResult> {
        commands::services::search(term)
    }

    pub fn program(&self, kind: ProgramKind) -> Result<CmdResult> {
        commands::programs::run(kind)
    }

    pub fn submit_inquiry(&mut self, form: &ContactForm) -> Result<CmdResult> {
        let now = self.now();
        commands::contact::submit(&mut self.store, form, now)
    }

    pub fn inquiries(&self) -> Result<CmdResult> {
        commands::contact::list(&self.store)
    }

    pub fn subscribe(&mut self, email: &str) -> Result<CmdResult> {
        let now = self.now();
        commands::subscribe::run(&mut self.store, email, now)
    }

    pub fn save_draft(&mut self, form: &ContactForm) -> Result<CmdResult> {
        let now = self.now();
        commands::draft::save(&mut self.store, form, now)
    }

    pub fn load_draft(&self) -> Result<CmdResult> {
        commands::draft::show(&self.store)
    }

    pub fn clear_draft(&mut self) -> Result<CmdResult> {
        commands::draft::clear(&mut self.store)
    }

    pub fn calendar(&self) -> Result<CmdResult> {
        commands::calendar::run(self.now())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }
}

/// Parses a filter name as typed by a user.
pub fn parse_category(input: &str) -> Result<Category> {
    Category::from_str(input)
        .map_err(|e| TownhallError::Validation(vec![FieldError::new("filter", e.to_string())]))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, EventPage, EventQuery, MessageLevel, TownhallPaths};
