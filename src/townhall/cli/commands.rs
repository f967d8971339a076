//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the logger
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from the data directory and config
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::render::{
    print_messages, render_announcements, render_calendar, render_departments, render_draft,
    render_event, render_events, render_inquiries, render_officials, render_program,
    render_service, render_services, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BoardCommands, Cli,
    Commands, DirectoryCommands, DraftAction, FormArgs, MiscCommands, ResidentCommands,
};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use townhall::api::{parse_category, ConfigAction, EventPage, EventQuery, TownhallApi};
use townhall::engine::{Category, FilterEngine};
use townhall::error::{Result, TownhallError};
use townhall::init::initialize;
use townhall::model::{ContactForm, ProgramKind, ServiceTab};
use townhall::store::fs::FileStore;
use townhall::validation::FieldError;

struct AppContext {
    api: TownhallApi<FileStore>,
    /// Columns for descriptions on list views.
    excerpt_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Board(cmd)) => match cmd {
            BoardCommands::Events {
                filter,
                search,
                page,
            } => handle_events(&mut ctx, filter, search, page),
            BoardCommands::Browse => handle_browse(&mut ctx),
            BoardCommands::Event { id } => handle_event(&mut ctx, id),
            BoardCommands::Announcements => handle_announcements(&ctx),
            BoardCommands::Announcement { id } => handle_announcement(&ctx, id),
            BoardCommands::Calendar => handle_calendar(&ctx),
        },
        Some(Commands::Directory(cmd)) => match cmd {
            DirectoryCommands::Officials => handle_officials(&ctx),
            DirectoryCommands::Departments => handle_departments(&ctx),
            DirectoryCommands::Services { tab } => handle_services(&ctx, &tab),
            DirectoryCommands::Service { id } => handle_service(&ctx, id),
            DirectoryCommands::SearchServices { term } => {
                handle_search_services(&ctx, &term.join(" "))
            }
            DirectoryCommands::Programs { kind } => handle_programs(&ctx, &kind),
        },
        Some(Commands::Resident(cmd)) => match cmd {
            ResidentCommands::Contact {
                form,
                newsletter,
                use_draft,
            } => handle_contact(&mut ctx, form, newsletter, use_draft),
            ResidentCommands::Draft { action } => handle_draft(&mut ctx, action),
            ResidentCommands::Inquiries => handle_inquiries(&ctx),
            ResidentCommands::Subscribe { email } => handle_subscribe(&mut ctx, &email),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_announcements(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize()?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        ctx.config.log_level()
    };
    init_logging(level);
    for warning in &ctx.config_warnings {
        log::warn!("{}", warning);
    }

    Ok(AppContext {
        api: ctx.api,
        excerpt_width: ctx.config.excerpt_width,
    })
}

fn init_logging(level: LevelFilter) {
    // A logger can only be installed once per process; a second attempt is harmless.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn handle_events(
    ctx: &mut AppContext,
    filter: Option<String>,
    search: Option<String>,
    page: usize,
) -> Result<()> {
    let filter = filter.as_deref().map(parse_category).transpose()?;
    let query = EventQuery {
        filter,
        search,
        page,
    };

    let result = ctx.api.events(query)?;
    if let Some(events) = &result.events {
        print!("{}", render_events(events, ctx.excerpt_width));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_event(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.event(id)?;
    if let Some(item) = &result.event {
        print!("{}", render_event(item));
    }
    print_messages(&result.messages);
    Ok(())
}

const BROWSE_HELP: &str = "n: next page  p: previous page  f <filter>: filter  s <term>: search  q: quit";

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let mut engine = ctx.api.event_engine()?;
    let api = &ctx.api;
    let stdin = io::stdin();
    let stdout = io::stdout();
    browse(
        &mut engine,
        stdin.lock(),
        &mut stdout.lock(),
        ctx.excerpt_width,
        || api.now(),
    )
}

/// Runs the browse loop over `input` until `q` or end of input.
///
/// `now` is read on every filter so that upcoming and past move with the clock.
fn browse<R, W, F>(
    engine: &mut FilterEngine,
    input: R,
    out: &mut W,
    excerpt_width: usize,
    now: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> DateTime<Utc>,
{
    engine.filter_by_category_at(Category::All, now());
    let mut search: Option<String> = None;

    write_board(out, engine, search.as_deref(), excerpt_width)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let (cmd, arg) = match line.trim().split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line.trim(), ""),
        };

        match cmd {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => {
                if !engine.next_page() {
                    writeln!(out, "Already on the last page.")?;
                    continue;
                }
            }
            "p" | "prev" => {
                if !engine.prev_page() {
                    writeln!(out, "Already on the first page.")?;
                    continue;
                }
            }
            "f" | "filter" => match parse_category(if arg.is_empty() { "all" } else { arg }) {
                Ok(category) => {
                    engine.filter_by_category_at(category, now());
                    search = None;
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
            "s" | "search" => {
                engine.search(arg);
                search = Some(arg.to_string());
            }
            _ => {
                writeln!(out, "{}", BROWSE_HELP)?;
                continue;
            }
        }

        write_board(out, engine, search.as_deref(), excerpt_width)?;
    }
    Ok(())
}

fn write_board<W: Write>(
    out: &mut W,
    engine: &FilterEngine,
    search: Option<&str>,
    excerpt_width: usize,
) -> io::Result<()> {
    let page = EventPage::from_engine(engine, search.map(str::to_string));
    write!(out, "{}", render_events(&page, excerpt_width))?;
    if page.items.is_empty() {
        writeln!(out, "No events found matching your search criteria.")?;
    }
    Ok(())
}

fn handle_announcements(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.announcements()?;
    let output = render_announcements(
        "Announcements",
        &result.announcements,
        Some(ctx.excerpt_width),
    );
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_announcement(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.api.announcement(id)?;
    print!("{}", render_announcements("Announcement", &result.announcements, None));
    print_messages(&result.messages);
    Ok(())
}

fn handle_calendar(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.calendar()?;
    if let Some(view) = &result.calendar {
        print!("{}", render_calendar(view));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_officials(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.officials()?;
    print!("{}", render_officials(&result.officials));
    print_messages(&result.messages);
    Ok(())
}

fn handle_departments(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.departments()?;
    print!("{}", render_departments(&result.departments));
    print_messages(&result.messages);
    Ok(())
}

fn handle_services(ctx: &AppContext, tab: &str) -> Result<()> {
    let tab: ServiceTab = tab.parse().map_err(TownhallError::Api)?;
    let result = ctx.api.services(tab)?;
    print!(
        "{}",
        render_services(tab.title(), &result.services, false, ctx.excerpt_width)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_service(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.api.service(id)?;
    for service in &result.services {
        print!("{}", render_service(service));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search_services(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_services(term)?;
    if !result.services.is_empty() {
        let heading = format!("Services matching '{}'", term.trim());
        print!(
            "{}",
            render_services(&heading, &result.services, true, ctx.excerpt_width)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_programs(ctx: &AppContext, kind: &str) -> Result<()> {
    let kind: ProgramKind = kind.parse().map_err(TownhallError::Api)?;
    let result = ctx.api.program(kind)?;
    if let Some(program) = &result.program {
        print!("{}", render_program(program));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Fills a form from flags, on top of `base` where a flag is absent.
fn merge_form(base: ContactForm, args: FormArgs) -> ContactForm {
    ContactForm {
        name: args.name.unwrap_or(base.name),
        email: args.email.unwrap_or(base.email),
        phone: args.phone.unwrap_or(base.phone),
        subject: args.subject.unwrap_or(base.subject),
        department: args.department.unwrap_or(base.department),
        message: args.message.unwrap_or(base.message),
        newsletter: base.newsletter,
    }
}

fn handle_contact(
    ctx: &mut AppContext,
    args: FormArgs,
    newsletter: bool,
    use_draft: bool,
) -> Result<()> {
    let base = if use_draft {
        let saved = ctx.api.load_draft()?;
        print_messages(&saved.messages);
        saved.draft.map(|d| d.to_form()).unwrap_or_default()
    } else {
        ContactForm::default()
    };
    let mut form = merge_form(base, args);
    form.newsletter = newsletter;

    let result = ctx.api.submit_inquiry(&form)?;
    if result.has_errors() {
        return Err(TownhallError::Validation(result.field_errors));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_draft(ctx: &mut AppContext, action: DraftAction) -> Result<()> {
    let result = match action {
        DraftAction::Save { form } => {
            let current = ctx
                .api
                .load_draft()?
                .draft
                .map(|d| d.to_form())
                .unwrap_or_default();
            ctx.api.save_draft(&merge_form(current, form))?
        }
        DraftAction::Show => ctx.api.load_draft()?,
        DraftAction::Clear => ctx.api.clear_draft()?,
    };
    if let Some(draft) = &result.draft {
        print!("{}", render_draft(draft));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_inquiries(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.inquiries()?;
    print!("{}", render_inquiries(&result.inquiries));
    print_messages(&result.messages);
    Ok(())
}

fn handle_subscribe(ctx: &mut AppContext, email: &str) -> Result<()> {
    let result = ctx.api.subscribe(email)?;
    if result.has_errors() {
        let errors = result
            .messages
            .into_iter()
            .map(|m| FieldError::new("email", m.content))
            .collect();
        return Err(TownhallError::Validation(errors));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();
    if let Some(config) = &result.config {
        if key.is_none() {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
    }
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
