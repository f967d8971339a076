//! # CLI Behavior
//!
//! This is **one possible UI client** for townhall, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`townhall`)
//!
//! Running `townhall` with no arguments shows the announcements, the way the
//! city website opens on its home page.
//!
//! ## The Events Board
//!
//! - `townhall events` lists the first page of everything.
//! - `--filter upcoming|past|event|announcement|holiday|all` narrows it.
//! - `--search <term>` searches titles and descriptions of the whole board.
//!   It replaces the filter rather than refining it, so the two flags conflict.
//! - `--page <n>` jumps ahead; asking past the end shows the last page with a
//!   warning.
//! - `townhall browse` keeps one board open and reads `n`, `p`, `f <filter>`,
//!   `s <term>` and `q` from stdin, one per line.
//!
//! ## Resident Forms
//!
//! `contact` and `draft save` take the same field flags. `contact --use-draft`
//! starts from the saved draft and lets flags override single fields. A
//! successful submission clears the draft.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Feeds results into templates
//! - `setup`: Argument parsing via clap, grouped help text
//! - `styles`: Terminal theme
//! - `templates`: Embedded template files

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
