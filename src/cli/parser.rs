use clap::{Parser, Subcommand};

/// Command-line interface definition for ropensign
/// CLI application to manage restaurant opening hours
#[derive(Parser)]
#[command(
    name = "ropensign",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple opening-hours CLI: manage a weekly schedule and check whether the restaurant is open",
    long_about = None
)]
pub struct Cli {
    /// Override settings file path (useful for tests or custom setups)
    #[arg(global = true, long = "hours")]
    pub hours: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the settings file with the default weekly schedule
    Init,

    /// Manage the settings file (view or edit)
    Config {
        /// Print the current settings file to stdout
        #[arg(long = "print", help = "Print the current settings file")]
        print_config: bool,

        /// Edit the settings file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        /// Common choices: vim, nano.
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show whether the restaurant is open right now (or at a given instant)
    Status {
        /// Evaluate for a specific weekday (monday..sunday) instead of today
        #[arg(long = "day", help = "Weekday to evaluate (default: today)")]
        day: Option<String>,

        /// Evaluate at a specific time (HH:MM) instead of the current time
        #[arg(long = "at", help = "Time of day HH:MM to evaluate (default: now)")]
        at: Option<String>,

        /// Emit the result as JSON instead of the badge
        #[arg(long = "json", help = "Print the evaluation result as JSON")]
        json: bool,
    },

    /// Print the full weekly schedule
    Week,

    /// Edit one day of the weekly schedule
    Set {
        /// Weekday to edit (monday..sunday)
        day: String,

        /// Mark the whole day closed (day-level override)
        #[arg(long = "closed", conflicts_with = "open")]
        closed: bool,

        /// Mark the day open for service
        #[arg(long = "open", conflicts_with = "closed")]
        open: bool,

        /// Lunch window as HH:MM-HH:MM (enables the lunch service)
        #[arg(long = "lunch", value_name = "RANGE", conflicts_with = "no_lunch")]
        lunch: Option<String>,

        /// Disable the lunch service for this day
        #[arg(long = "no-lunch", conflicts_with = "lunch")]
        no_lunch: bool,

        /// Dinner window as HH:MM-HH:MM (enables the dinner service)
        #[arg(long = "dinner", value_name = "RANGE", conflicts_with = "no_dinner")]
        dinner: Option<String>,

        /// Disable the dinner service for this day
        #[arg(long = "no-dinner", conflicts_with = "dinner")]
        no_dinner: bool,
    },
}
