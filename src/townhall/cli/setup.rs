use clap::{Args, CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "townhall",
    bin_name = "townhall",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "City information desk: events, services and resident inquiries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Board,
    Directory,
    Resident,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Board => "Events & News:",
            CommandGroup::Directory => "City Directory:",
            CommandGroup::Resident => "Resident Services:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "events" | "browse" | "event" | "announcements" | "announcement" | "calendar" => {
                Some(CommandGroup::Board)
            }
            "officials" | "departments" | "services" | "service" | "search-services"
            | "programs" => Some(CommandGroup::Directory),
            "contact" | "draft" | "inquiries" | "subscribe" => Some(CommandGroup::Resident),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Board,
            CommandGroup::Directory,
            CommandGroup::Resident,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("townhall {version}\n"));
    output.push_str("City information desk: events, services and resident inquiries\n");
    output.push('\n');
    output.push_str("Usage: townhall [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<16} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Name of the subcommand as typed on the command line.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Board(c) => match c {
            BoardCommands::Events { .. } => "events",
            BoardCommands::Browse => "browse",
            BoardCommands::Event { .. } => "event",
            BoardCommands::Announcements => "announcements",
            BoardCommands::Announcement { .. } => "announcement",
            BoardCommands::Calendar => "calendar",
        },
        Commands::Directory(c) => match c {
            DirectoryCommands::Officials => "officials",
            DirectoryCommands::Departments => "departments",
            DirectoryCommands::Services { .. } => "services",
            DirectoryCommands::Service { .. } => "service",
            DirectoryCommands::SearchServices { .. } => "search-services",
            DirectoryCommands::Programs { .. } => "programs",
        },
        Commands::Resident(c) => match c {
            ResidentCommands::Contact { .. } => "contact",
            ResidentCommands::Draft { .. } => "draft",
            ResidentCommands::Inquiries => "inquiries",
            ResidentCommands::Subscribe { .. } => "subscribe",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
    }
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(c) => print_help_for_command(command_name(c)),
        None => print_grouped_help(),
    }
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Board(BoardCommands),

    #[command(flatten)]
    Directory(DirectoryCommands),

    #[command(flatten)]
    Resident(ResidentCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// List events, announcements and holidays
    #[command(alias = "ls", display_order = 1)]
    Events {
        /// all, upcoming, past, event, announcement or holiday
        #[arg(short, long, conflicts_with = "search")]
        filter: Option<String>,

        /// Search titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Page through events interactively (n, p, f <filter>, s <term>, q)
    #[command(display_order = 2)]
    Browse,

    /// Show one event in full
    #[command(display_order = 3)]
    Event { id: u32 },

    /// List city announcements
    #[command(display_order = 4)]
    Announcements,

    /// Show one announcement
    #[command(display_order = 5)]
    Announcement { id: u32 },

    /// Show the events calendar
    #[command(display_order = 6)]
    Calendar,
}

#[derive(Subcommand, Debug)]
pub enum DirectoryCommands {
    /// List city officials
    #[command(display_order = 10)]
    Officials,

    /// List city departments and their contacts
    #[command(display_order = 11)]
    Departments,

    /// List services offered by the city
    #[command(display_order = 12)]
    Services {
        /// business, health, social, education or infra
        #[arg(short, long, default_value = "business")]
        tab: String,
    },

    /// Show requirements, processing time and fee of a service
    #[command(display_order = 13)]
    Service { id: u32 },

    /// Search services across all tabs
    #[command(display_order = 14)]
    SearchServices {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show a community program (volunteer, membership, donation)
    #[command(display_order = 15)]
    Programs { kind: String },
}

#[derive(Subcommand, Debug)]
pub enum ResidentCommands {
    /// Send an inquiry to the city
    #[command(display_order = 20)]
    Contact {
        #[command(flatten)]
        form: FormArgs,

        /// Also subscribe to the newsletter
        #[arg(long)]
        newsletter: bool,

        /// Start from the saved draft; flags override its fields
        #[arg(long)]
        use_draft: bool,
    },

    /// Save, show or clear the contact form draft
    #[command(display_order = 21)]
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// List submitted inquiries
    #[command(display_order = 22)]
    Inquiries,

    /// Subscribe an email address to the newsletter
    #[command(display_order = 23)]
    Subscribe { email: String },
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Save the given fields as the draft
    Save {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Show the saved draft
    Show,
    /// Discard the saved draft
    Clear,
}

/// Contact form fields.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (optional)
    #[arg(long)]
    pub phone: Option<String>,

    /// Subject of the inquiry
    #[arg(long)]
    pub subject: Option<String>,

    /// Department the inquiry is addressed to
    #[arg(long)]
    pub department: Option<String>,

    /// Message text
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (page-size, excerpt-width, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for townhall or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
