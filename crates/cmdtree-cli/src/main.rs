//! cmdtree CLI
//!
//! Command-line interface for the command hierarchy

use clap::{Parser, Subcommand, ValueEnum};
use cmdtree_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cmdtree")]
#[command(about = "cmdtree - command hierarchy depth and subtree queries", long_about = None)]
struct Cli {
    /// Log output format (logs are written to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogProfile::Production)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable logs, debug level
    Development,
    /// JSON logs, info level
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run an INSERT/QUERY command script
    Run(commands::run::RunArgs),
    /// Print the influence-graph propagation demo
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
