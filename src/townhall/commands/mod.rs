use crate::config::TownhallConfig;
use crate::model::{
    Announcement, ContactDraft, Department, Inquiry, Item, Official, Program, Service,
};
use crate::validation::FieldError;
use std::path::PathBuf;

pub mod announcements;
pub mod calendar;
pub mod config;
pub mod contact;
pub mod directory;
pub mod draft;
pub mod events;
pub mod programs;
pub mod services;
pub mod subscribe;

pub use calendar::CalendarView;
pub use events::{EventPage, EventQuery};

#[derive(Debug, Clone)]
pub struct TownhallPaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub events: Option<EventPage>,
    pub event: Option<Item>,
    pub announcements: Vec<Announcement>,
    pub officials: Vec<Official>,
    pub departments: Vec<Department>,
    pub services: Vec<Service>,
    pub program: Option<Program>,
    pub inquiries: Vec<Inquiry>,
    pub draft: Option<ContactDraft>,
    pub field_errors: Vec<FieldError>,
    pub calendar: Option<CalendarView>,
    pub config: Option<TownhallConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_events(mut self, page: EventPage) -> Self {
        self.events = Some(page);
        self
    }

    pub fn with_event(mut self, item: Item) -> Self {
        self.event = Some(item);
        self
    }

    pub fn with_announcements(mut self, announcements: Vec<Announcement>) -> Self {
        self.announcements = announcements;
        self
    }

    pub fn with_officials(mut self, officials: Vec<Official>) -> Self {
        self.officials = officials;
        self
    }

    pub fn with_departments(mut self, departments: Vec<Department>) -> Self {
        self.departments = departments;
        self
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn with_program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    pub fn with_inquiries(mut self, inquiries: Vec<Inquiry>) -> Self {
        self.inquiries = inquiries;
        self
    }

    pub fn with_draft(mut self, draft: ContactDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_field_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.field_errors = errors;
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarView) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn with_config(mut self, config: TownhallConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
