//! # Domain Model
//!
//! Everything the information desk shows or records: the dated [`Item`]s the
//! event listing is built from, the static directory records (announcements,
//! officials, departments, services, programs) and the records residents
//! leave behind (contact drafts, inquiries, subscriptions).
//!
//! ## Items
//!
//! An [`Item`] is anything that sits on the events board. It carries two
//! classifiers:
//!
//! - [`ItemType`] says what the item *is* (event, announcement, holiday).
//! - [`ItemCategory`] is the editorial bucket it was filed under
//!   (upcoming, past, announcement, holiday).
//!
//! The two overlap on purpose: the "upcoming" and "past" views are computed
//! from both the category and, for events, the date. See [`crate::engine`].
//!
//! ## Stored Format
//!
//! Items and the resident records are persisted as JSON blobs, with camelCase
//! field names and lower-case enum tags:
//!
//! ```text
//! { "id": 1, "title": "...", "type": "event", "category": "upcoming",
//!   "date": "2026-10-26T00:00:00Z", "registrationRequired": true, ... }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Event,
    Announcement,
    Holiday,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Event => "event",
            ItemType::Announcement => "announcement",
            ItemType::Holiday => "holiday",
        }
    }

    /// Human label used on event cards.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Event => "Event",
            ItemType::Announcement => "Announcement",
            ItemType::Holiday => "Holiday",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Upcoming,
    Past,
    Announcement,
    Holiday,
}

/// A dated entry on the events board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: ItemCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_required: Option<bool>,
}

impl Item {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
        item_type: ItemType,
        category: ItemCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            full_description: None,
            date,
            item_type,
            category,
            location: None,
            time: None,
            registration_required: None,
        }
    }

    /// Long text for the detail view, falling back to the short description.
    pub fn body(&self) -> &str {
        self.full_description
            .as_deref()
            .unwrap_or(self.description.as_str())
    }

    /// Only events that ask for registration offer a sign-up action.
    pub fn can_register(&self) -> bool {
        self.item_type == ItemType::Event && self.registration_required == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// Display date, kept as published.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    pub name: String,
    pub position: String,
    pub department: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub head: String,
    pub contact: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTab {
    #[default]
    Business,
    Health,
    Social,
    Education,
    #[serde(rename = "infra")]
    Infrastructure,
}

impl ServiceTab {
    pub fn title(&self) -> &'static str {
        match self {
            ServiceTab::Business => "Business Services",
            ServiceTab::Health => "Health Services",
            ServiceTab::Social => "Social Services",
            ServiceTab::Education => "Education Services",
            ServiceTab::Infrastructure => "Infrastructure Services",
        }
    }
}

impl FromStr for ServiceTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "business" => Ok(ServiceTab::Business),
            "health" => Ok(ServiceTab::Health),
            "social" => Ok(ServiceTab::Social),
            "education" => Ok(ServiceTab::Education),
            "infra" | "infrastructure" => Ok(ServiceTab::Infrastructure),
            other => Err(format!(
                "Unknown service tab '{}' (expected business, health, social, education or infra)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub tab: ServiceTab,
    pub name: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub processing_time: String,
    pub fee: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    Volunteer,
    Membership,
    Donation,
}

impl FromStr for ProgramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "volunteer" => Ok(ProgramKind::Volunteer),
            "membership" => Ok(ProgramKind::Membership),
            "donation" | "donations" => Ok(ProgramKind::Donation),
            other => Err(format!(
                "Unknown program '{}' (expected volunteer, membership or donation)",
                other
            )),
        }
    }
}

/// A titled bullet point, e.g. "Youth Volunteers - Leadership and ...".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramEntry {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub kind: ProgramKind,
    pub title: String,
    pub intro: String,
    pub entries: Vec<ProgramEntry>,
    /// Heading and lines of the secondary list (requirements, donation methods).
    pub extra_heading: Option<String>,
    pub extra: Vec<String>,
    pub closing: Option<String>,
}

/// The contact form exactly as the resident filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    #[serde(default)]
    pub department: String,
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
}

/// Autosaved, unsubmitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub message: String,
    pub saved_at: DateTime<Utc>,
}

impl ContactDraft {
    pub fn from_form(form: &ContactForm, now: DateTime<Utc>) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            subject: form.subject.clone(),
            department: form.department.clone(),
            message: form.message.clone(),
            saved_at: now,
        }
    }

    /// Restores the draft into a form. The newsletter box is never autosaved.
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            department: self.department.clone(),
            message: self.message.clone(),
            newsletter: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    pub message: String,
    pub newsletter: bool,
    pub timestamp: DateTime<Utc>,
    pub status: InquiryStatus,
}

impl Inquiry {
    pub fn from_form(form: &ContactForm, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            subject: form.subject.clone(),
            department: form.department.clone(),
            message: form.message.trim().to_string(),
            newsletter: form.newsletter,
            timestamp: now,
            status: InquiryStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: DateTime<Utc>,
}
