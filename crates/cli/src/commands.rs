//! Clap command tree and ArgMatches → CliAction conversion.

use clap::{Arg, ArgAction, ArgMatches, Command};

use vault_api::Method;

/// The result of parsing user input.
pub enum CliAction {
    /// Create a record.
    Create { key: String, value: String },
    /// Read a record.
    Get { key: String },
    /// Replace a record's value.
    Update { key: String, value: String },
    /// Remove a record.
    Delete { key: String },
    /// List all records.
    List,
    /// Feed a raw request through the router.
    Http {
        method: Method,
        path: String,
        body: String,
    },
}

/// REPL-only meta-commands, checked before delegating to clap.
pub enum MetaCommand {
    Help,
    Quit,
}

/// Build the clap command tree.
///
/// Used both for the top-level binary arguments and for parsing REPL
/// lines (with `no_binary_name`).
pub fn build_cli() -> Command {
    Command::new("vault")
        .about("Vault key-value service shell")
        .arg(
            Arg::new("timeout-ms")
                .long("timeout-ms")
                .value_name("MS")
                .help("Per-operation backend timeout in milliseconds")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .subcommand(
            Command::new("create")
                .about("Create a record (fails if the key exists)")
                .arg(Arg::new("key").required(true))
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(
            Command::new("get")
                .about("Read a record")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Replace a record's value (fails if the key is absent)")
                .arg(Arg::new("key").required(true))
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove a record")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(Command::new("list").about("List all records"))
        .subcommand(
            Command::new("http")
                .about("Send a raw request through the API boundary")
                .arg(Arg::new("method").required(true))
                .arg(Arg::new("path").required(true))
                .arg(Arg::new("body")),
        )
}

/// Check for REPL meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" | "?" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "create" => Ok(CliAction::Create {
            key: arg(m, "key"),
            value: json_value(&arg(m, "value")),
        }),
        "get" => Ok(CliAction::Get { key: arg(m, "key") }),
        "update" => Ok(CliAction::Update {
            key: arg(m, "key"),
            value: json_value(&arg(m, "value")),
        }),
        "delete" => Ok(CliAction::Delete { key: arg(m, "key") }),
        "list" => Ok(CliAction::List),
        "http" => {
            let method: Method = arg(m, "method").parse()?;
            Ok(CliAction::Http {
                method,
                path: arg(m, "path"),
                body: m.get_one::<String>("body").cloned().unwrap_or_default(),
            })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn arg(matches: &ArgMatches, name: &str) -> String {
    // All positional args above are .required(true)
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

/// Interpret a shell argument as JSON.
///
/// Valid JSON passes through verbatim; anything else is treated as a
/// bare string so `vault create name Alice` does what it looks like.
fn json_value(raw: &str) -> String {
    if serde_json::from_str::<serde_json::Value>(raw).is_ok() {
        raw.to_string()
    } else {
        serde_json::Value::String(raw.to_string()).to_string()
    }
}
