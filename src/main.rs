use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sporta::activity::{ChallengeForm, ResultForm};
use sporta::AppError;

mod cli;

#[derive(Parser)]
#[command(name = "sporta")]
#[command(about = "Track sports challenges, results, points and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ./sporta.toml, then ~/.sporta/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the user records (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file (./sporta.toml unless --config is given)
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    #[command(flatten)]
    Data(DataCommand),
}

/// Commands that work on the configured data directory
#[derive(Subcommand)]
enum DataCommand {
    /// Create an account and sign in (+50 points)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Repeat the password
        #[arg(long)]
        confirm: String,
    },

    /// Sign in
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Create or list challenges
    Challenge {
        #[command(subcommand)]
        action: ChallengeAction,
    },

    /// Log or list results
    Result {
        #[command(subcommand)]
        action: ResultAction,
    },

    /// Show total points, level and achievement history
    Points,

    /// Show profile and statistics
    Profile,

    /// Synchronize with a device (not available yet)
    Sync,

    /// List the selectable sports
    Sports,
}

#[derive(Subcommand)]
enum ChallengeAction {
    /// Create a challenge (+20 points)
    Add {
        /// Name, e.g. "Run 5km"
        #[arg(long)]
        title: String,
        #[arg(long)]
        sport: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Target value, e.g. 5
        #[arg(long, default_value = "")]
        target: String,
        /// Unit, e.g. km, min, reps
        #[arg(long, default_value = "")]
        unit: String,
        /// Deadline, e.g. 31.12.2025
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// List challenges, newest first
    List,
}

#[derive(Subcommand)]
enum ResultAction {
    /// Log a result (+10 points)
    Add {
        #[arg(long)]
        sport: String,
        /// Numeric value, e.g. 5.2
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value = "")]
        unit: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List results, newest first
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging (stderr, so listings on stdout stay clean)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Init { force } => cli::init::init_command(cli.config, force),
        Commands::Data(command) => {
            cli::Context::load(cli.config.as_deref(), cli.data_dir.as_deref())
                .and_then(|ctx| run(&ctx, command))
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            // 1: the user can retry with different input, 2: anything else
            let recoverable = err
                .downcast_ref::<AppError>()
                .is_some_and(AppError::is_recoverable);
            ExitCode::from(if recoverable { 1 } else { 2 })
        }
    }
}

fn run(ctx: &cli::Context, command: DataCommand) -> Result<()> {
    match command {
        DataCommand::Register {
            username,
            email,
            password,
            confirm,
        } => cli::account::register_command(ctx, username, email, password, confirm),
        DataCommand::Login { username, password } => {
            cli::account::login_command(ctx, username, password)
        }
        DataCommand::Logout => cli::account::logout_command(ctx),
        DataCommand::Challenge { action } => match action {
            ChallengeAction::Add {
                title,
                sport,
                description,
                target,
                unit,
                deadline,
            } => cli::challenge::add_command(
                ctx,
                ChallengeForm {
                    title,
                    sport,
                    description,
                    target,
                    unit,
                    deadline,
                },
            ),
            ChallengeAction::List => cli::challenge::list_command(ctx),
        },
        DataCommand::Result { action } => match action {
            ResultAction::Add {
                sport,
                value,
                unit,
                note,
            } => cli::result::add_command(
                ctx,
                ResultForm {
                    sport,
                    value,
                    unit,
                    note,
                },
            ),
            ResultAction::List => cli::result::list_command(ctx),
        },
        DataCommand::Points => cli::points::points_command(ctx),
        DataCommand::Profile => cli::profile::profile_command(ctx),
        DataCommand::Sync => cli::sync::sync_command(ctx),
        DataCommand::Sports => {
            cli::challenge::sports_command();
            Ok(())
        }
    }
}
