//! Named styles shared by the templates.
//!
//! Templates only refer to the semantic names in [`names`]; the colors are
//! decided here. Every name a template uses must be registered, or outstanding
//! prefixes the text with its missing-style marker.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const HEADING: &str = "heading";
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const BADGE: &str = "badge";
    pub const LABEL: &str = "label";
    pub const TIME: &str = "time";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static TOWNHALL_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));

    Theme::new()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(
            names::FAINT,
            Style::new().color256(rgb_to_ansi256((110, 110, 110))),
        )
        .add(
            names::HEADING,
            Style::new().color256(rgb_to_ansi256((0, 82, 165))).bold(),
        )
        .add(names::TITLE, Style::new().bold())
        .add(names::INDEX, Style::new().yellow())
        .add(
            names::BADGE,
            Style::new().color256(rgb_to_ansi256((206, 17, 38))),
        )
        .add(names::LABEL, muted.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
