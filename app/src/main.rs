#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "elizars")]
#[command(about = "Rule-based Rogerian therapist", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/elizars/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the therapist
    Chat {
        /// Single message to answer, then exit
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Skip the introduction
        #[arg(long)]
        no_banner: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and rule table details
    Info,
    /// Show version
    Version,
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Chat { message, no_banner } => ChatStrategy.execute(ChatInput {
            config_path: cli.config,
            message,
            no_banner,
        }),
        Commands::Init => InitStrategy.execute(cli.config),
        Commands::Info => InfoStrategy.execute(cli.config),
        Commands::Version => VersionStrategy.execute(()),
    }
}
