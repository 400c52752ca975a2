use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use qa_api_client::{config_from_env, telemetry};
use qa_console::{App, ShellCommand, Step};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Upload documents, search them and ask questions against the Q&A backend.
#[derive(Debug, Parser)]
#[command(name = "docqa", version, about)]
struct Cli {
    /// API base URL (overrides QA_API_URL), e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Debug logging for the docqa crates.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and upload 3-10 .txt/.pdf files, then show the index status.
    Ingest {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Keyword search over the indexed documents.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Ask a question and print the answer with its citations.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show the index status.
    Info,
    /// Test the connection to the backend.
    Health,
    /// Interactive session (default).
    Shell,
}

impl Command {
    /// Shell commands equivalent to this one-shot command.
    fn script(self) -> Vec<ShellCommand> {
        match self {
            Command::Ingest { files } => vec![ShellCommand::Select(files), ShellCommand::Process],
            Command::Search { query } => vec![ShellCommand::Search(query.join(" "))],
            Command::Ask { question } => vec![ShellCommand::Ask(question.join(" "))],
            Command::Info => vec![ShellCommand::Info],
            Command::Health => vec![ShellCommand::Health],
            Command::Shell => Vec::new(),
        }
    }
}

/// Accepts a missing `.env` file; a malformed one is an error.
fn check_env_file<T>(loaded: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("invalid .env file"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    check_env_file(dotenvy::dotenv())?;

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("warn", level))
        .with(telemetry::layer())
        .init();

    let mut cfg = config_from_env().context("invalid client configuration")?;
    if let Some(url) = cli.base_url {
        cfg = cfg.with_base_url(url);
    }

    let mut app = App::connect(cfg)?;
    let stdout = io::stdout();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            app.run(stdin, &mut stdout.lock()).await?;
        }
        command => {
            for cmd in command.script() {
                let Step::Render(text) = app.dispatch(cmd.clone()).await else {
                    break;
                };
                write!(stdout.lock(), "{text}")?;

                // The rendered panel already shows the error.
                if app.panel_error(&cmd).is_some() {
                    return Ok(ExitCode::FAILURE);
                }
                if matches!(cmd, ShellCommand::Select(_)) && !app.uploader.ready_to_process {
                    break;
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
