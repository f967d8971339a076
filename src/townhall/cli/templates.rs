//! # CLI Templates
//!
//! Output goes through outstanding (minijinja) templates kept as stand-alone
//! files, so layout can be edited and diffed without touching Rust. They are
//! embedded here as string constants.
//!
//! Conventions:
//!
//! 1. Width math, truncation and date formatting happen in `render.rs`; the
//!    templates only place strings and pick style names.
//! 2. Each template owns its own line breaks. A block tag at the end of a line
//!    keeps that newline, which is how items get their blank separator line.

pub const EVENTS_TEMPLATE: &str = include_str!("templates/events.tmp");
pub const EVENT_TEMPLATE: &str = include_str!("templates/event.tmp");
pub const ANNOUNCEMENTS_TEMPLATE: &str = include_str!("templates/announcements.tmp");
pub const OFFICIALS_TEMPLATE: &str = include_str!("templates/officials.tmp");
pub const DEPARTMENTS_TEMPLATE: &str = include_str!("templates/departments.tmp");
pub const SERVICES_TEMPLATE: &str = include_str!("templates/services.tmp");
pub const SERVICE_TEMPLATE: &str = include_str!("templates/service.tmp");
pub const PROGRAM_TEMPLATE: &str = include_str!("templates/program.tmp");
pub const INQUIRIES_TEMPLATE: &str = include_str!("templates/inquiries.tmp");
pub const DRAFT_TEMPLATE: &str = include_str!("templates/draft.tmp");
pub const CALENDAR_TEMPLATE: &str = include_str!("templates/calendar.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
