use crate::catalog;
use crate::commands::CmdResult;
use crate::error::{Result, TownhallError};

pub fn list() -> Result<CmdResult> {
    Ok(CmdResult::default().with_announcements(catalog::announcements()))
}

pub fn get(id: u32) -> Result<CmdResult> {
    let announcement = catalog::announcements()
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| TownhallError::NotFound(format!("announcement {}", id)))?;
    Ok(CmdResult::default().with_announcements(vec![announcement]))
}
