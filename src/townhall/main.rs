//! # Townhall CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/townhall/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, logging, dispatch (commands.rs)          │
//! │  - Terminal rendering via Outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/townhall/lib.rs)                              │
//! │  - TownhallApi facade, commands, engine, store              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the CLI returns `CmdResult` values and never prints.
//! Templates live in `cli/templates/` and are embedded with `include_str!()`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
