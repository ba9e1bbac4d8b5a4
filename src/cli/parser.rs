use clap::{Parser, Subcommand};

/// Command-line interface definition for pontolog
/// CLI application to reconcile punch-clock files and account worked hours
/// with SQLite
#[derive(Parser)]
#[command(
    name = "pontolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import punch-clock files, classify daily time slots and account worked/overtime/shortfall hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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

    /// Import a fixed-width punch file exported by the time clock
    Import {
        /// Path of the punch file
        file: String,

        /// Company code the punches belong to
        #[arg(long)]
        company: String,

        /// Keep only punches from this date on (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Keep only punches up to this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the four classified slots of one employee-day
    Day {
        /// Employee CPF
        cpf: String,

        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Print the record as JSON")]
        json: bool,
    },

    /// Timesheet view: classified slots per employee-day over a range
    Sheet {
        /// Start date (YYYY-MM-DD)
        from: String,

        /// End date (YYYY-MM-DD)
        to: String,

        #[arg(long, help = "Filter by company code")]
        company: Option<String>,

        #[arg(long, help = "Filter by employee CPF")]
        cpf: Option<String>,

        #[arg(long, help = "Print the rows as JSON")]
        json: bool,
    },

    /// Hours report: worked, overtime and shortfall per employee-day
    Report {
        /// Start date (YYYY-MM-DD)
        from: String,

        /// End date (YYYY-MM-DD)
        to: String,

        #[arg(long, help = "Filter by company code")]
        company: Option<String>,

        #[arg(long, help = "Filter by employee CPF")]
        cpf: Option<String>,

        #[arg(
            long = "extended-week",
            help = "Count Saturday as a working half day"
        )]
        extended_week: bool,

        #[arg(
            long = "include-empty",
            help = "Keep days without punches as full-shortfall rows"
        )]
        include_empty: bool,

        #[arg(long, help = "Print the rows as JSON")]
        json: bool,
    },

    /// Override one classified slot, keeping the punch history and an audit entry
    Correct {
        /// Employee CPF
        cpf: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Slot name: entrada, saida_almoco, retorno_almoco or saida
        slot: String,

        /// Corrected time (HH:MM:SS)
        time: String,

        #[arg(long, default_value = "cli", help = "Who performed the edit")]
        actor: String,
    },

    /// Register an employee name for report resolution
    Employee {
        /// Employee CPF
        cpf: String,

        /// Full name
        name: String,

        /// Company code
        #[arg(long)]
        company: String,
    },

    /// Print internal logs
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "corrections", help = "Print the correction audit trail")]
        corrections: bool,

        #[arg(long, help = "Filter corrections by employee CPF")]
        cpf: Option<String>,
    },
}
