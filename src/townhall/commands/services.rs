use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TownhallError};
use crate::model::ServiceTab;

pub fn list(tab: ServiceTab) -> Result<CmdResult> {
    let services = catalog::services()
        .into_iter()
        .filter(|s| s.tab == tab)
        .collect();
    Ok(CmdResult::default().with_services(services))
}

pub fn get(id: u32) -> Result<CmdResult> {
    let service = catalog::services()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| TownhallError::NotFound(format!("service {}", id)))?;
    Ok(CmdResult::default().with_services(vec![service]))
}

/// Case-insensitive match on name or description, across all tabs.
pub fn search(term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error("Please enter a search term."));
        return Ok(result);
    }

    let needle = term.to_lowercase();
    let matches: Vec<_> = catalog::services()
        .into_iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
        })
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No services found matching '{}'.",
            term
        )));
    }
    Ok(result.with_services(matches))
}
