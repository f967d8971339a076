use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactDraft, ContactForm};
use crate::store::{load_json, save_json, BlobStore, DRAFT_KEY};
use chrono::{DateTime, Utc};

/// Saves the whole form as the current draft, replacing any earlier one.
pub fn save<S: BlobStore>(
    store: &mut S,
    form: &ContactForm,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let draft = ContactDraft::from_form(form, now);
    save_json(store, DRAFT_KEY, &draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Draft saved."));
    Ok(result.with_draft(draft))
}

pub fn show<S: BlobStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match load_json::<ContactDraft, _>(store, DRAFT_KEY)? {
        Some(draft) => {
            result.add_message(CmdMessage::info("Draft restored from previous session"));
            Ok(result.with_draft(draft))
        }
        None => {
            result.add_message(CmdMessage::info("No saved draft."));
            Ok(result)
        }
    }
}

pub fn clear<S: BlobStore>(store: &mut S) -> Result<CmdResult> {
    store.remove(DRAFT_KEY)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Draft cleared."));
    Ok(result)
}
