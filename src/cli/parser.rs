use crate::config::MAX_UPCOMING_DAYS;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sounddesk
#[derive(Parser)]
#[command(
    name = "sounddesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track sound team members, the service schedule, equipment status and maintenance alerts",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Overview: counters, upcoming events and active alerts
    Dashboard {
        #[arg(
            long,
            value_parser = clap::value_parser!(i64).range(1..=MAX_UPCOMING_DAYS),
            help = "Upcoming window in days (default from config)"
        )]
        days: Option<i64>,
    },

    /// Manage team members
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Manage the event schedule
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Track equipment and its status
    Equipment {
        #[command(subcommand)]
        action: EquipmentAction,
    },

    /// List, raise and resolve alerts
    Alerts {
        #[command(subcommand)]
        action: AlertAction,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// List all team members
    List,

    /// Add a team member
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        #[arg(
            long,
            default_value = "",
            help = "Comma-separated availability, e.g. \"Sundays, Wednesdays\""
        )]
        availability: String,

        #[arg(long, help = "Profile image URL (default from config)")]
        image: Option<String>,
    },

    /// Update some fields of a team member
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "Replace availability (comma-separated, empty = unavailable)")]
        availability: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Remove a team member (events keep the reference)
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// List events grouped by day
    List,

    /// Add an event
    Add {
        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "Start time (HH:MM)")]
        time: String,

        #[arg(long)]
        title: String,

        #[arg(
            long = "type",
            default_value = "service",
            help = "service, soundcheck or rehearsal"
        )]
        kind: String,

        #[arg(long = "member", help = "Team member id (repeatable)")]
        members: Vec<String>,
    },

    /// Update some fields of an event
    Update {
        id: String,

        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Start time (HH:MM)")]
        time: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "type", help = "service, soundcheck or rehearsal")]
        kind: Option<String>,

        #[arg(
            long = "member",
            help = "Replace assigned members (repeatable)",
            conflicts_with = "clear_members"
        )]
        members: Vec<String>,

        #[arg(long = "clear-members", help = "Unassign every member")]
        clear_members: bool,
    },

    /// Remove an event
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum EquipmentAction {
    /// List equipment grouped by category
    List,

    /// Add an equipment item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "available", help = "available, maintenance or in-use")]
        status: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change the status of an item
    Status {
        id: String,

        #[arg(help = "available, maintenance or in-use")]
        status: String,

        #[arg(long, help = "Replace the item's notes")]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AlertAction {
    /// List active alerts (newest first)
    List {
        #[arg(long, help = "Include resolved alerts")]
        all: bool,
    },

    /// Raise an alert
    Add {
        #[arg(long = "type", default_value = "general", help = "maintenance, schedule or general")]
        kind: String,

        #[arg(long)]
        message: String,
    },

    /// Mark an alert as resolved
    Resolve { id: String },
}
