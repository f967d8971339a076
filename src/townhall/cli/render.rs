//! # Rendering Module
//!
//! Turns `CmdResult` payloads into terminal text through the outstanding
//! templates in `templates/`.
//!
//! Layout work (excerpt truncation, date labels, relative times, pager text)
//! stays in Rust because it needs Unicode-aware width handling; the templates
//! only place the prepared strings and choose style names.
//!
//! Every public `render_*` has an `_internal` twin taking `use_color`, so tests
//! can force plain output.

use super::styles::{names, TOWNHALL_THEME};
use super::templates::{
    ANNOUNCEMENTS_TEMPLATE, CALENDAR_TEMPLATE, DEPARTMENTS_TEMPLATE, DRAFT_TEMPLATE,
    EVENTS_TEMPLATE, EVENT_TEMPLATE, INQUIRIES_TEMPLATE, MESSAGES_TEMPLATE, OFFICIALS_TEMPLATE,
    PROGRAM_TEMPLATE, SERVICES_TEMPLATE, SERVICE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use townhall::api::{CmdMessage, EventPage, MessageLevel};
use townhall::commands::CalendarView;
use townhall::model::{
    Announcement, ContactDraft, Department, Inquiry, InquiryStatus, Item, Official, Program,
    Service,
};
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct EventLine {
    id_label: String,
    title: String,
    type_label: String,
    date_label: String,
    excerpt: String,
}

#[derive(Serialize)]
struct EventsData {
    heading: String,
    summary: String,
    items: Vec<EventLine>,
    pager: String,
}

#[derive(Serialize)]
struct EventDetailData {
    title: String,
    type_label: String,
    date_label: String,
    location: Option<String>,
    time: Option<String>,
    registration: Option<String>,
    body: String,
    register_hint: Option<String>,
}

#[derive(Serialize)]
struct AnnouncementLine {
    id_label: String,
    title: String,
    date: String,
    content: String,
}

#[derive(Serialize)]
struct AnnouncementsData {
    heading: String,
    items: Vec<AnnouncementLine>,
}

#[derive(Serialize)]
struct OfficialsData<'a> {
    officials: &'a [Official],
}

#[derive(Serialize)]
struct DepartmentsData<'a> {
    departments: &'a [Department],
}

#[derive(Serialize)]
struct ServiceLine {
    id_label: String,
    name: String,
    tab: Option<String>,
    excerpt: String,
}

#[derive(Serialize)]
struct ServicesData {
    heading: String,
    items: Vec<ServiceLine>,
}

#[derive(Serialize)]
struct ServiceDetailData<'a> {
    name: &'a str,
    tab: &'a str,
    description: &'a str,
    requirements: &'a [String],
    processing_time: &'a str,
    fee: &'a str,
}

#[derive(Serialize)]
struct InquiryLine {
    id_label: String,
    subject: String,
    status: String,
    name: String,
    email: String,
    department: String,
    submitted: String,
}

#[derive(Serialize)]
struct InquiriesData {
    items: Vec<InquiryLine>,
}

#[derive(Serialize)]
struct DraftRow {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct DraftData {
    saved: String,
    rows: Vec<DraftRow>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*TOWNHALL_THEME), c),
        None => render(template, data, ThemeChoice::from(&*TOWNHALL_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_events(page: &EventPage, excerpt_width: usize) -> String {
    render_events_internal(page, excerpt_width, None)
}

fn render_events_internal(page: &EventPage, excerpt_width: usize, use_color: Option<bool>) -> String {
    let summary = match &page.search {
        Some(term) => format!(
            "search \"{}\", {} {}",
            term,
            page.total_matches,
            plural(page.total_matches, "match", "matches")
        ),
        None => format!(
            "{}, {} {}",
            page.active_filter,
            page.total_matches,
            plural(page.total_matches, "item", "items")
        ),
    };

    let items = page
        .items
        .iter()
        .map(|item| EventLine {
            id_label: format!("{}.", item.id),
            title: item.title.clone(),
            type_label: item.item_type.label().to_string(),
            date_label: date_label(item.date),
            excerpt: truncate_to_width(&item.description, excerpt_width),
        })
        .collect();

    let data = EventsData {
        heading: "Events".to_string(),
        summary,
        items,
        pager: pager_label(page),
    };
    render_template(EVENTS_TEMPLATE, &data, use_color)
}

pub fn render_event(item: &Item) -> String {
    render_event_internal(item, None)
}

fn render_event_internal(item: &Item, use_color: Option<bool>) -> String {
    let registration = item.registration_required.map(|required| {
        if required {
            "Required".to_string()
        } else {
            "Not Required".to_string()
        }
    });
    let register_hint = item
        .can_register()
        .then(|| "Registration is open. Use `townhall contact` to sign up.".to_string());

    let data = EventDetailData {
        title: item.title.clone(),
        type_label: item.item_type.label().to_string(),
        date_label: date_label(item.date),
        location: item.location.clone(),
        time: item.time.clone(),
        registration,
        body: item.body().to_string(),
        register_hint,
    };
    render_template(EVENT_TEMPLATE, &data, use_color)
}

/// Lists announcements; `excerpt_width` cuts the content, `None` shows it whole.
pub fn render_announcements(
    heading: &str,
    announcements: &[Announcement],
    excerpt_width: Option<usize>,
) -> String {
    render_announcements_internal(heading, announcements, excerpt_width, None)
}

fn render_announcements_internal(
    heading: &str,
    announcements: &[Announcement],
    excerpt_width: Option<usize>,
    use_color: Option<bool>,
) -> String {
    let items = announcements
        .iter()
        .map(|a| AnnouncementLine {
            id_label: format!("{}.", a.id),
            title: a.title.clone(),
            date: a.date.clone(),
            content: match excerpt_width {
                Some(width) => truncate_to_width(&a.content, width),
                None => a.content.clone(),
            },
        })
        .collect();
    let data = AnnouncementsData {
        heading: heading.to_string(),
        items,
    };
    render_template(ANNOUNCEMENTS_TEMPLATE, &data, use_color)
}

pub fn render_officials(officials: &[Official]) -> String {
    render_template(OFFICIALS_TEMPLATE, &OfficialsData { officials }, None)
}

pub fn render_departments(departments: &[Department]) -> String {
    render_template(DEPARTMENTS_TEMPLATE, &DepartmentsData { departments }, None)
}

/// Lists services. Search results span tabs, so they carry a tab badge.
pub fn render_services(
    heading: &str,
    services: &[Service],
    show_tab: bool,
    excerpt_width: usize,
) -> String {
    render_services_internal(heading, services, show_tab, excerpt_width, None)
}

fn render_services_internal(
    heading: &str,
    services: &[Service],
    show_tab: bool,
    excerpt_width: usize,
    use_color: Option<bool>,
) -> String {
    let items = services
        .iter()
        .map(|s| ServiceLine {
            id_label: format!("{}.", s.id),
            name: s.name.clone(),
            tab: show_tab.then(|| s.tab.title().to_string()),
            excerpt: truncate_to_width(&s.description, excerpt_width),
        })
        .collect();
    let data = ServicesData {
        heading: heading.to_string(),
        items,
    };
    render_template(SERVICES_TEMPLATE, &data, use_color)
}

pub fn render_service(service: &Service) -> String {
    render_service_internal(service, None)
}

fn render_service_internal(service: &Service, use_color: Option<bool>) -> String {
    let data = ServiceDetailData {
        name: &service.name,
        tab: service.tab.title(),
        description: &service.description,
        requirements: &service.requirements,
        processing_time: &service.processing_time,
        fee: &service.fee,
    };
    render_template(SERVICE_TEMPLATE, &data, use_color)
}

pub fn render_program(program: &Program) -> String {
    render_template(PROGRAM_TEMPLATE, program, None)
}

pub fn render_inquiries(inquiries: &[Inquiry]) -> String {
    render_inquiries_internal(inquiries, None)
}

fn render_inquiries_internal(inquiries: &[Inquiry], use_color: Option<bool>) -> String {
    if inquiries.is_empty() {
        return render_text_list_internal(&[], "No inquiries submitted yet.", use_color);
    }
    let items = inquiries
        .iter()
        .map(|i| {
            let id = i.id.simple().to_string();
            InquiryLine {
                id_label: format!("#{}", &id[..8]),
                subject: i.subject.clone(),
                status: match i.status {
                    InquiryStatus::Pending => "pending".to_string(),
                },
                name: i.name.clone(),
                email: i.email.clone(),
                department: i.department.clone(),
                submitted: format_time_ago(i.timestamp),
            }
        })
        .collect();
    render_template(INQUIRIES_TEMPLATE, &InquiriesData { items }, use_color)
}

pub fn render_draft(draft: &ContactDraft) -> String {
    render_draft_internal(draft, None)
}

fn render_draft_internal(draft: &ContactDraft, use_color: Option<bool>) -> String {
    let rows = [
        ("Name:", &draft.name),
        ("Email:", &draft.email),
        ("Phone:", &draft.phone),
        ("Subject:", &draft.subject),
        ("Department:", &draft.department),
        ("Message:", &draft.message),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| DraftRow {
        label: label.to_string(),
        value: value.clone(),
    })
    .collect();

    let data = DraftData {
        saved: format!("saved {}", format_time_ago(draft.saved_at)),
        rows,
    };
    render_template(DRAFT_TEMPLATE, &data, use_color)
}

pub fn render_calendar(view: &CalendarView) -> String {
    render_template(CALENDAR_TEMPLATE, view, None)
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    match use_color {
        Some(c) => render_with_color(
            TEXT_LIST_TEMPLATE,
            &data,
            ThemeChoice::from(&*TOWNHALL_THEME),
            c,
        ),
        None => render(TEXT_LIST_TEMPLATE, &data, ThemeChoice::from(&*TOWNHALL_THEME)),
    }
    .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    match use_color {
        Some(c) => render_with_color(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*TOWNHALL_THEME), c),
        None => render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*TOWNHALL_THEME)),
    }
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// "Mon Oct 26 2026"
fn date_label(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

fn pager_label(page: &EventPage) -> String {
    let info = &page.page_info;
    if info.total <= 1 {
        return String::new();
    }
    let mut parts = vec![format!("Page {} of {}", info.current, info.total)];
    if info.has_prev {
        parts.push("‹ prev".to_string());
    }
    if info.has_next {
        parts.push("next ›".to_string());
    }
    parts.join("  ")
}

/// Cuts `s` to at most `max_width` columns, ending in '…' when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
