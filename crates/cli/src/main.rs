//! Vault CLI — interactive shell for the key-value service.
//!
//! Three modes, selected the same way every run:
//! - **Shell mode**: `vault [flags] COMMAND` — single command, exit
//! - **REPL mode**: `vault [flags]` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "get k" | vault` — line-by-line from stdin
//!
//! The shell runs against an in-memory store, so it is a smoke tool for
//! the engine and boundary rather than a client for a remote deployment.

mod commands;
mod repl;

use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use vault_api::{ApiRequest, Router};
use vault_engine::{EngineConfig, KvEngine};
use vault_store::MemoryStore;

use commands::{build_cli, matches_to_action, CliAction};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Shared session: the router (and through it the engine) plus the
/// output mode.
pub struct App {
    router: Router,
    mode: OutputMode,
}

impl App {
    fn new(router: Router, mode: OutputMode) -> Self {
        Self { router, mode }
    }

    /// Execute one action, returning the text to print.
    pub fn run(&self, action: CliAction) -> Result<String, String> {
        let engine = self.router.engine();
        match action {
            CliAction::Create { key, value } => {
                engine.create(&key, &value).map_err(|e| self.error(&e))?;
                Ok(self.ack())
            }
            CliAction::Get { key } => {
                let record = engine.get(&key).map_err(|e| self.error(&e))?;
                Ok(match self.mode {
                    OutputMode::Human => format!("{}", record),
                    OutputMode::Json => {
                        json!({"key": record.key, "value": record.value}).to_string()
                    }
                })
            }
            CliAction::Update { key, value } => {
                engine.update(&key, &value).map_err(|e| self.error(&e))?;
                Ok(self.ack())
            }
            CliAction::Delete { key } => {
                engine.delete(&key).map_err(|e| self.error(&e))?;
                Ok(self.ack())
            }
            CliAction::List => {
                let mut records = engine.list().map_err(|e| self.error(&e))?;
                records.sort_by(|a, b| a.key.cmp(&b.key));
                Ok(match self.mode {
                    OutputMode::Human => records
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                    OutputMode::Json => json!(records).to_string(),
                })
            }
            CliAction::Http { method, path, body } => {
                let response = self
                    .router
                    .dispatch(&ApiRequest::with_body(method, path, body));
                Ok(format!("{} {}", response.status, response.body))
            }
        }
    }

    fn ack(&self) -> String {
        match self.mode {
            OutputMode::Human => "OK".to_string(),
            OutputMode::Json => json!({"status": "ok"}).to_string(),
        }
    }

    fn error(&self, err: &vault_core::Error) -> String {
        match self.mode {
            OutputMode::Human => format!("(error) {}", err),
            OutputMode::Json => json!({"error": err.to_string(), "code": err.code()}).to_string(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = EngineConfig::from_env();
    if let Some(raw) = matches.get_one::<String>("timeout-ms") {
        match raw.parse::<u64>() {
            Ok(ms) => config = config.op_timeout(Duration::from_millis(ms)),
            Err(_) => {
                eprintln!("invalid --timeout-ms value: {}", raw);
                process::exit(2);
            }
        }
    }

    let engine = KvEngine::with_config(Arc::new(MemoryStore::new()), config);
    let app = App::new(Router::new(engine), mode);

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, print, exit
        let exit_code = match matches_to_action(&matches) {
            Ok(action) => match app.run(action) {
                Ok(output) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                    0
                }
                Err(message) => {
                    eprintln!("{}", message);
                    1
                }
            },
            Err(message) => {
                eprintln!("{}", message);
                2
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&app);
    } else {
        process::exit(repl::run_pipe(&app));
    }
}
