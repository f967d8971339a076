//! Contact form submission.
//!
//! A valid form becomes a pending [`Inquiry`] appended to the inquiries list.
//! Ticking the newsletter box also subscribes the sender (once per email),
//! and a successful submission discards any autosaved draft.

use super::subscribe;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactForm, Inquiry};
use crate::store::{load_list, save_json, BlobStore, DRAFT_KEY, INQUIRIES_KEY};
use chrono::{DateTime, Utc};

pub fn submit<S: BlobStore>(
    store: &mut S,
    form: &ContactForm,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let errors = form.validate();
    if !errors.is_empty() {
        let mut result = CmdResult::default();
        for e in &errors {
            result.add_message(CmdMessage::error(e.message.clone()));
        }
        return Ok(result.with_field_errors(errors));
    }

    let inquiry = Inquiry::from_form(form, now);
    let mut inquiries: Vec<Inquiry> = load_list(store, INQUIRIES_KEY)?;
    inquiries.push(inquiry.clone());
    save_json(store, INQUIRIES_KEY, &inquiries)?;
    log::info!("inquiry {} recorded ({})", inquiry.id, inquiry.subject);

    let mut result = CmdResult::default();
    if inquiry.newsletter && subscribe::add(store, &inquiry.email, Some(&inquiry.name), now)? {
        result.add_message(CmdMessage::info(format!(
            "{} has been added to the newsletter.",
            inquiry.email
        )));
    }

    store.remove(DRAFT_KEY)?;

    result.add_message(CmdMessage::success(
        "Thank you for your message! We will get back to you as soon as possible.",
    ));
    Ok(result.with_inquiries(vec![inquiry]))
}

pub fn list<S: BlobStore>(store: &S) -> Result<CmdResult> {
    let inquiries: Vec<Inquiry> = load_list(store, INQUIRIES_KEY)?;
    Ok(CmdResult::default().with_inquiries(inquiries))
}
