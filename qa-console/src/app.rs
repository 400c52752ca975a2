//! Interactive session composing every panel.
//!
//! A line of input becomes a [`ShellCommand`], [`App::dispatch`] runs it
//! against the panel it targets and returns the re-rendered panel.

use std::io::Write;
use std::path::PathBuf;

use qa_api_client::{ClientConfig, QaApiService, UploadFile};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::backend::QaBackend;
use crate::errors::ConsoleError;
use crate::panels::{HealthCheckState, IndexPanel, QaState, SearchState};
use crate::render;
use crate::uploader::UploaderState;

pub const HELP: &str = "\
Commands:
  select <paths..>   choose 3-10 .txt/.pdf files to upload (quote paths with spaces)
  process            upload and index the selected files
  cancel             drop the current selection
  clear              forget indexed documents and start over
  search <query>     keyword search over the indexed documents
  clear-search       reset the search panel
  ask <question>     ask a question (max 500 characters)
  cite <n>           highlight citation #n of the last answer
  clear-qa           reset the question panel
  info               refresh the index status
  toggle-info        expand/collapse the document list
  health             test the connection to the backend
  help               show this help
  quit               leave
";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Select(Vec<PathBuf>),
    Process,
    Cancel,
    Clear,
    Search(String),
    ClearSearch,
    Ask(String),
    /// Zero-based citation index.
    Cite(usize),
    ClearQa,
    Info,
    ToggleInfo,
    Health,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "select" | "upload" => {
                ShellCommand::Select(split_args(rest).into_iter().map(PathBuf::from).collect())
            }
            "process" => ShellCommand::Process,
            "cancel" => ShellCommand::Cancel,
            "clear" => ShellCommand::Clear,
            "search" => ShellCommand::Search(rest.to_string()),
            "clear-search" => ShellCommand::ClearSearch,
            "ask" => ShellCommand::Ask(rest.to_string()),
            "cite" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => ShellCommand::Cite(n - 1),
                _ => ShellCommand::Unknown(line.to_string()),
            },
            "clear-qa" => ShellCommand::ClearQa,
            "info" => ShellCommand::Info,
            "toggle-info" => ShellCommand::ToggleInfo,
            "health" => ShellCommand::Health,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }
}

/// Splits on whitespace; single or double quotes keep spaces inside one argument.
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_arg = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_arg = true;
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    args
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Render(String),
    Quit,
}

/// All panels plus the app-level record of what has been indexed.
pub struct App<B: QaBackend> {
    backend: B,
    pub uploader: UploaderState,
    pub search: SearchState,
    pub qa: QaState,
    pub index: IndexPanel,
    pub health: HealthCheckState,
    pub documents_indexed: bool,
    pub indexed_files: Vec<String>,
}

impl App<QaApiService> {
    /// App talking to the real backend described by `cfg`.
    ///
    /// # Errors
    /// [`ConsoleError::Client`] if the HTTP client cannot be built.
    pub fn connect(cfg: ClientConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(QaApiService::new(cfg)?))
    }
}

impl<B: QaBackend> App<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            uploader: UploaderState::new(),
            search: SearchState::new(),
            qa: QaState::new(),
            index: IndexPanel::new(),
            health: HealthCheckState::new(),
            documents_indexed: false,
            indexed_files: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Error message left by `cmd` on the panel it targets, if any.
    pub fn panel_error(&self, cmd: &ShellCommand) -> Option<&str> {
        match cmd {
            ShellCommand::Select(_) | ShellCommand::Process => self.uploader.error.as_deref(),
            ShellCommand::Search(_) => self.search.error.as_deref(),
            ShellCommand::Ask(_) => self.qa.error.as_deref(),
            ShellCommand::Health => self.health.error.as_deref(),
            _ => None,
        }
    }

    pub async fn dispatch(&mut self, cmd: ShellCommand) -> Step {
        debug!(?cmd, "dispatch");
        let text = match cmd {
            ShellCommand::Select(paths) => {
                self.select(&paths).await;
                self.render_uploader()
            }
            ShellCommand::Process => {
                if let Some(resp) = self.uploader.process_files(&self.backend).await {
                    self.documents_indexed = true;
                    self.indexed_files = resp.files_list;
                    self.index.refresh(&self.backend).await;
                    format!("{}\n{}", self.render_uploader(), render::render_index(&self.index))
                } else {
                    self.render_uploader()
                }
            }
            ShellCommand::Cancel => {
                self.uploader.cancel_selection();
                self.render_uploader()
            }
            ShellCommand::Clear => {
                self.uploader.clear_all();
                self.documents_indexed = false;
                self.indexed_files.clear();
                self.render_uploader()
            }
            ShellCommand::Search(q) => {
                self.search.perform_search(&self.backend, &q).await;
                render::render_search(&self.search)
            }
            ShellCommand::ClearSearch => {
                self.search.clear();
                render::render_search(&self.search)
            }
            ShellCommand::Ask(q) => {
                self.qa.submit_question(&self.backend, &q).await;
                render::render_qa(&self.qa)
            }
            ShellCommand::Cite(i) => {
                self.qa.toggle_citation(i);
                render::render_qa(&self.qa)
            }
            ShellCommand::ClearQa => {
                self.qa.clear();
                render::render_qa(&self.qa)
            }
            ShellCommand::Info => {
                self.index.refresh(&self.backend).await;
                render::render_index(&self.index)
            }
            ShellCommand::ToggleInfo => {
                self.index.toggle_expanded();
                render::render_index(&self.index)
            }
            ShellCommand::Health => {
                self.health.test_connection(&self.backend).await;
                render::render_health(&self.health)
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Step::Quit,
            ShellCommand::Empty => String::new(),
            ShellCommand::Unknown(line) => format!("Unknown command: {line}\n{HELP}"),
        };
        Step::Render(text)
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when reading or writing fails.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), ConsoleError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!("interactive session started");
        writeln!(out, "Document Q&A assistant. Type `help` for commands.")?;

        self.index.refresh(&self.backend).await;
        write!(out, "{}", render::render_index(&self.index))?;

        let mut lines = input.lines();
        loop {
            write!(out, "docqa> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            match self.dispatch(ShellCommand::parse(&line)).await {
                Step::Render(text) => write!(out, "{text}")?,
                Step::Quit => break,
            }
        }
        writeln!(out)?;
        info!("interactive session ended");
        Ok(())
    }

    /// Loads `paths` from disk and hands them to the uploader.
    async fn select(&mut self, paths: &[PathBuf]) {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match UploadFile::from_path(path).await {
                Ok(f) => files.push(f),
                Err(e) => {
                    self.uploader.success = None;
                    self.uploader.error = Some(e.user_message());
                    return;
                }
            }
        }
        self.uploader.handle_files(files);
    }

    fn render_uploader(&self) -> String {
        render::render_uploader(&self.uploader, &self.indexed_files, &self.health)
    }
}
