use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Subscription;
use crate::store::{load_list, save_json, BlobStore, SUBSCRIPTIONS_KEY};
use crate::validation::validate_email;
use chrono::{DateTime, Utc};

/// Adds `email` to the newsletter list unless it is already there.
///
/// Returns whether a new subscription was stored.
pub(crate) fn add<S: BlobStore>(
    store: &mut S,
    email: &str,
    name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<bool> {
    let mut subscriptions: Vec<Subscription> = load_list(store, SUBSCRIPTIONS_KEY)?;
    if subscriptions
        .iter()
        .any(|s| s.email.eq_ignore_ascii_case(email))
    {
        return Ok(false);
    }

    subscriptions.push(Subscription {
        email: email.to_string(),
        name: name.map(str::to_string),
        date: now,
    });
    save_json(store, SUBSCRIPTIONS_KEY, &subscriptions)?;
    log::info!("new newsletter subscription ({} total)", subscriptions.len());
    Ok(true)
}

pub fn run<S: BlobStore>(store: &mut S, email: &str, now: DateTime<Utc>) -> Result<CmdResult> {
    let email = email.trim();
    let mut result = CmdResult::default();

    if !validate_email(email) {
        result.add_message(CmdMessage::error("Please enter a valid email address."));
        return Ok(result);
    }

    if add(store, email, None, now)? {
        result.add_message(CmdMessage::success(format!(
            "Thank you for subscribing with {}! You will receive notifications about upcoming events and announcements.",
            email
        )));
    } else {
        result.add_message(CmdMessage::info(format!("{} is already subscribed.", email)));
    }
    Ok(result)
}
