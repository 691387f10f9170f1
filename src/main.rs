// Calendar Widget
// Text-mode front end over the calendar controller

mod render;

use std::path::PathBuf;

use anyhow::Result;
use calendar_widget::models::event::{EventField, EventType};
use calendar_widget::models::settings::Settings;
use calendar_widget::models::ui::ViewMode;
use calendar_widget::services::persistence::JsonFileStorage;
use calendar_widget::services::settings::SettingsService;
use calendar_widget::utils::date::DateKey;
use calendar_widget::CalendarController;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calendar-widget")]
#[command(about = "Browse a month/week/day calendar and keep per-day events")]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the calendar grid with per-day event counts
    Show {
        /// month, week or day (defaults to default_view from config)
        #[arg(short, long)]
        view: Option<ViewMode>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List the events of one day with their indices
    List {
        /// Day to list, YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
    },
    /// Add an event to a day
    Add {
        /// Day of the event, YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,

        /// Event name
        #[arg(short, long)]
        name: String,

        /// Start time, e.g. 09:00
        #[arg(short, long, default_value = "")]
        start: String,

        /// End time, e.g. 09:30
        #[arg(short, long, default_value = "")]
        end: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,

        /// work, personal or others
        #[arg(long = "type", default_value = "work")]
        event_type: EventType,
    },
    /// Delete the event at an index of a day's list
    Delete {
        /// Day holding the event, YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,

        /// Position shown by `list`
        #[arg(short, long)]
        index: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;
    let storage = JsonFileStorage::from_settings(&settings)?;
    log::info!("Using event file {}", storage.path().display());

    match cli.command {
        Commands::Show { view, date } => {
            let reference = date.unwrap_or_else(|| Local::now().date_naive());
            let mut controller = CalendarController::starting_at(&settings, storage, reference);
            if let Some(view) = view {
                controller.set_view(view);
            }
            print!("{}", render::render_calendar(&controller));
        }
        Commands::List { date } => {
            let mut controller = CalendarController::starting_at(&settings, storage, date);
            controller.select_date(DateKey::from_date(date));
            print!("{}", render::render_event_list(&DateKey::from_date(date), controller.selected_events()));
        }
        Commands::Add {
            date,
            name,
            start,
            end,
            description,
            event_type,
        } => {
            let mut controller = CalendarController::starting_at(&settings, storage, date);
            let date_key = DateKey::from_date(date);
            controller.open_create_form(date_key.clone());
            for field in [
                EventField::Name(name.clone()),
                EventField::Start(start),
                EventField::End(end),
                EventField::Description(description),
                EventField::Type(event_type),
            ] {
                controller.update_pending_field(field);
            }
            controller.confirm_save()?;
            println!("Added '{}' on {}", name, date_key);
        }
        Commands::Delete { date, index } => {
            let mut controller = CalendarController::starting_at(&settings, storage, date);
            let date_key = DateKey::from_date(date);
            controller.select_date(date_key.clone());
            let removed = controller.delete_event(index)?;
            println!("Deleted '{}' from {}", removed.name, date_key);
        }
    }

    Ok(())
}

fn load_settings(config: Option<&PathBuf>) -> Result<Settings> {
    let service = match config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location()?,
    };
    service.get()
}
