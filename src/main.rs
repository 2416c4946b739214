use anyhow::Result;
use askeka::config::Config;
use askeka::logging::{self, LogTarget};
use askeka::{commands, ui};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "askeka")]
#[command(version)]
#[command(about = "Ask-EKA, a UPSC study assistant for the terminal", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.askeka/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat interface (default)
    Chat,
    /// Ask a single question and print the reply
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
        /// Print the reply and how it was chosen as JSON
        #[arg(long)]
        json: bool,
        /// Seed for template choice
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the topics, keywords and concepts the assistant knows
    Topics,
    /// List the language options
    Languages,
    /// List the UPSC subjects
    Subjects,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let command = cli.command.unwrap_or(Commands::Chat);
    let log_path = config.log_path();
    let target = match command {
        Commands::Chat => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    logging::init(config.log_level.as_deref(), target)?;
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    match command {
        Commands::Chat => ui::run(&config).await,
        Commands::Ask { question, json, seed } => {
            if seed.is_some() {
                config.seed = seed;
            }
            commands::ask(&config, &question.join(" "), json)
        }
        Commands::Topics => commands::list_topics(),
        Commands::Languages => commands::list_languages(&config),
        Commands::Subjects => commands::list_subjects(),
    }
}
