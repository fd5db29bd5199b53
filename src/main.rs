mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use schedule_it_core::config::GlobalConfig;
use schedule_it_core::export::ExportFormat;
use schedule_it_core::store::FileStore;
use schedule_it_core::{EventManager, EventType};

#[derive(Parser)]
#[command(name = "schedule-it")]
#[command(about = "A personal calendar: month grid, events and exports")]
struct Cli {
    /// Store events in this directory instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events
    Month {
        /// Month to show (1-12, defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after
        #[arg(long)]
        next: bool,
    },
    /// List all events in date order, optionally filtered
    List {
        /// Case-insensitive text to search for
        query: Option<String>,
    },
    /// Add an event
    Add {
        #[arg(short, long)]
        name: String,

        /// Day of the month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: u32,

        /// Month (1-12, defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Start time (HH:MM, 15-minute steps)
        #[arg(short, long, default_value = schedule_it_core::clock::DEFAULT_START)]
        start: String,

        /// End time (HH:MM, 15-minute steps)
        #[arg(short, long, default_value = schedule_it_core::clock::DEFAULT_END)]
        end: String,

        #[arg(long)]
        description: Option<String>,

        /// Work, Personal or Other
        #[arg(short = 't', long = "type")]
        event_type: Option<EventType>,
    },
    /// Change fields of an event; omitted fields keep their values
    Edit {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: Option<u32>,

        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// New description (an empty string clears it)
        #[arg(long)]
        description: Option<String>,

        #[arg(short = 't', long = "type")]
        event_type: Option<EventType>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Move an event to another day
    Move {
        id: String,

        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: u32,

        /// Month (1-12, defaults to the event's month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the event's year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Export one month's events to a JSON or CSV file
    Export {
        /// json or csv
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,

        /// File name without extension (defaults to events-YYYY-MM)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("  {}", e.to_string().red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut manager = open_manager(cli.data_dir)?;

    match cli.command {
        Commands::Month {
            month,
            year,
            prev,
            next,
        } => {
            let cursor = commands::resolve_month(month, year);
            let cursor = match (prev, next) {
                (true, _) => cursor.prev(),
                (_, true) => cursor.next(),
                _ => cursor,
            };
            commands::month::run(&manager, cursor)
        }
        Commands::List { query } => commands::list::run(&manager, query.as_deref()),
        Commands::Add {
            name,
            day,
            month,
            year,
            start,
            end,
            description,
            event_type,
        } => {
            let cursor = commands::resolve_month(month, year);
            let form = commands::EventForm {
                name,
                description,
                event_type,
                day: cursor.day(day),
                start,
                end,
            };
            commands::add::run(&mut manager, form)
        }
        Commands::Edit {
            id,
            name,
            day,
            month,
            year,
            start,
            end,
            description,
            event_type,
        } => {
            let changes = commands::edit::Changes {
                name,
                day,
                month: month.map(|m| m - 1),
                year,
                start,
                end,
                description,
                event_type,
            };
            commands::edit::run(&mut manager, &id, changes)
        }
        Commands::Delete { id, yes } => commands::delete::run(&mut manager, &id, yes),
        Commands::Move {
            id,
            day,
            month,
            year,
        } => commands::move_event::run(&mut manager, &id, day, month.map(|m| m - 1), year),
        Commands::Export {
            format,
            month,
            year,
            output,
        } => {
            let cursor = commands::resolve_month(month, year);
            commands::export::run(&manager, format, cursor, output)
        }
    }
}

fn open_manager(data_dir: Option<PathBuf>) -> Result<EventManager<FileStore>> {
    let data_path = match data_dir {
        Some(dir) => dir,
        None => GlobalConfig::load()?.data_path(),
    };
    log::debug!("Using data directory {}", data_path.display());

    Ok(EventManager::new(FileStore::new(data_path)))
}
