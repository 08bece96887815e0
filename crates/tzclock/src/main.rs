mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tzclock", version, about = "A terminal world clock")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the interactive clock
    Start {
        /// Timezone to select at startup (overrides the config)
        #[arg(short, long)]
        timezone: Option<String>,
    },
    /// List every selectable timezone
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the current time and date once
    Now {
        /// Timezone to show (defaults to the configured one)
        timezone: Option<String>,
    },
    /// Check the configuration and timezone database
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start { timezone } => commands::start::execute(timezone.as_deref()),
        Commands::List { json } => commands::list::execute(json),
        Commands::Now { timezone } => commands::now::execute(timezone.as_deref()),
        Commands::Doctor => commands::doctor::execute(),
    }
}
