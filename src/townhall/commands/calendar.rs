use crate::commands::CmdResult;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

const PLACEHOLDER: &str = "Calendar preview is available in the full implementation.";

/// The calendar is a placeholder: a month heading and a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub month_year: String,
    pub note: String,
}

pub fn run(now: DateTime<Utc>) -> Result<CmdResult> {
    let view = CalendarView {
        month_year: now.format("%B %Y").to_string(),
        note: PLACEHOLDER.to_string(),
    };
    Ok(CmdResult::default().with_calendar(view))
}
