//! mockdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod store;

#[derive(Parser)]
#[command(name = "mockdrill", version, about = "Scripted mock-interview drill tool")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding session state and history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new interview session
    Start {
        /// Questions to sample (default from config, clamped to bank size)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Custom question bank TOML (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit an answer to the current question
    Answer {
        /// Answer text; reads stdin when omitted
        text: Option<String>,

        /// Show the per-answer evaluation immediately
        #[arg(long)]
        show_eval: bool,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session progress and the current question
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile the report over the answers so far
    Report {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Also write a self-contained HTML report
        #[arg(long)]
        html: Option<PathBuf>,

        /// Also save the report as JSON to a file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run a whole session interactively in one process
    Practice {
        /// Questions to sample (default from config, clamped to bank size)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Custom question bank TOML (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Show each answer's evaluation as soon as it is scored
        #[arg(long)]
        show_eval: bool,
    },

    /// List past completed reports, newest first
    History {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Compare two completed reports from the history
    Compare {
        /// Baseline history entry (0 = latest; default: 1)
        #[arg(long)]
        baseline: Option<usize>,

        /// Current history entry (default: 0, the latest)
        #[arg(long)]
        current: Option<usize>,

        /// Score movement counted as a change, on the 0-10 scale
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List topics with their question counts
    Topics {
        /// Custom question bank TOML (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mockdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());

    match cli.command {
        Commands::Start {
            count,
            seed,
            bank,
            json,
        } => commands::start::execute(&config, &data_dir, count, seed, bank, json),
        Commands::Answer {
            text,
            show_eval,
            json,
        } => commands::answer::execute(&config, &data_dir, text, show_eval, json),
        Commands::Status { json } => commands::status::execute(&data_dir, json),
        Commands::Report { json, html, save } => {
            commands::report::execute(&data_dir, json, html, save)
        }
        Commands::Practice {
            count,
            seed,
            bank,
            show_eval,
        } => commands::practice::execute(&config, &data_dir, count, seed, bank, show_eval),
        Commands::History { json, limit } => commands::history::execute(&data_dir, json, limit),
        Commands::Compare {
            baseline,
            current,
            threshold,
            format,
        } => commands::compare::execute(&data_dir, baseline, current, threshold, format),
        Commands::Topics { bank } => commands::topics::execute(bank),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    }
}
