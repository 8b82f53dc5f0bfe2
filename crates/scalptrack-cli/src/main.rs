use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod router;
mod views;

use scalptrack_core::session::Route;
use views::add_log::AddLogArgs;

#[derive(Parser)]
#[command(name = "scalptrack")]
#[command(about = "scalptrack - scalp & hair-care symptom tracking client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Show the dashboard summary
    Dashboard,
    /// Submit today's log entry
    AddLog(AddLogArgs),
    /// Set the daily check-in reminder
    SetReminder {
        /// Time of day, 24-hour HH:MM
        #[arg(long)]
        time: String,
        /// Skip the email at the reminder time (on by default)
        #[arg(long = "no-email", action = clap::ArgAction::SetFalse)]
        email_reminder: bool,
    },
    /// Download the 30-day report document
    Report,
    /// Log out and clear the local session
    Logout,
}

impl Commands {
    fn route(&self) -> Route {
        match self {
            Commands::Login { .. } => Route::Login,
            Commands::Signup { .. } => Route::Signup,
            Commands::Dashboard => Route::Dashboard,
            Commands::AddLog(_) => Route::AddLog,
            Commands::SetReminder { .. } => Route::SetReminder,
            Commands::Report => Route::GenerateReport,
            // Logout bypasses the guard: local cleanup is unconditional.
            Commands::Logout => Route::Login,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCALPTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let state = app::bootstrap::bootstrap().await?;

    if let Commands::Logout = cli.command {
        let ok = views::logout::run(&state).await;
        return finish(ok);
    }

    if !router::navigate(&state.session, cli.command.route()) {
        return finish(false);
    }

    let ok = match cli.command {
        Commands::Login { email } => views::login::run(&state, &email).await,
        Commands::Signup { name, email } => views::signup::run(&state, &name, &email).await,
        Commands::Dashboard => views::dashboard::run(&state).await,
        Commands::AddLog(args) => views::add_log::run(&state, args).await,
        Commands::SetReminder {
            time,
            email_reminder,
        } => views::reminder::run(&state, &time, email_reminder).await,
        Commands::Report => views::report::run(&state).await,
        Commands::Logout => unreachable!("handled above"),
    };

    finish(ok)
}

fn finish(ok: bool) -> Result<()> {
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
