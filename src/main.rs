use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fundtracker::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fundtracker::AppCommand {
    fn from(cmd: Commands) -> fundtracker::AppCommand {
        match cmd {
            Commands::Home { query } => fundtracker::AppCommand::Home { query },
            Commands::Dashboard => fundtracker::AppCommand::Dashboard,
            Commands::Search { query, open } => fundtracker::AppCommand::Search {
                query: query.join(" "),
                open,
            },
            Commands::Fund {
                scheme_code,
                toggle_save,
            } => fundtracker::AppCommand::Fund {
                scheme_code,
                toggle_save,
            },
            Commands::Saved { remove, open } => fundtracker::AppCommand::Saved { remove, open },
            Commands::Login { name, email, token } => {
                fundtracker::AppCommand::Login { name, email, token }
            }
            Commands::Logout => fundtracker::AppCommand::Logout,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the landing page, or search right away with a query
    Home {
        /// Search query
        query: Option<String>,
    },
    /// Show the dashboard (requires login)
    Dashboard,
    /// Search mutual funds by name, category, or fund house
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
        /// Open the Nth result after searching
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },
    /// Show details of a fund by scheme code
    Fund {
        scheme_code: u64,
        /// Save the fund, or remove it if already saved
        #[arg(long)]
        toggle_save: bool,
    },
    /// List saved funds (requires login)
    Saved {
        /// Remove a fund from the saved list
        #[arg(long, value_name = "SCHEME_CODE")]
        remove: Option<u64>,
        /// Open a saved fund's details
        #[arg(long, value_name = "SCHEME_CODE")]
        open: Option<u64>,
    },
    /// Start a local session
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        /// Session token to store; generated when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// End the local session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundtracker::cli::setup::setup(),
        Some(cmd) => fundtracker::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
