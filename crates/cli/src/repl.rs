//! REPL and pipe modes.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::{build_cli, check_meta_command, matches_to_action, MetaCommand};
use crate::App;

const HISTORY_FILE: &str = ".vault_history";
const PROMPT: &str = "vault> ";

/// Interactive prompt with file-backed history.
pub fn run_repl(app: &App) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("failed to start repl: {}", e);
            return;
        }
    };
    let _ = editor.load_history(HISTORY_FILE);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match check_meta_command(line) {
                    Some(MetaCommand::Quit) => break,
                    Some(MetaCommand::Help) => {
                        let _ = build_cli().print_help();
                        println!();
                        continue;
                    }
                    None => {}
                }

                match execute_line(app, line) {
                    Ok(output) => {
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    Err(message) => eprintln!("{}", message),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }

    let _ = editor.save_history(HISTORY_FILE);
}

/// Line-by-line execution from stdin. Returns the process exit code:
/// non-zero if any line failed.
pub fn run_pipe(app: &App) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("stdin read error: {}", e);
                return 1;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(check_meta_command(line), Some(MetaCommand::Quit)) {
            break;
        }

        match execute_line(app, line) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(message) => {
                eprintln!("{}", message);
                exit_code = 1;
            }
        }
    }

    exit_code
}

fn execute_line(app: &App, line: &str) -> Result<String, String> {
    let words = shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())?;
    let matches = build_cli()
        .no_binary_name(true)
        .try_get_matches_from(words)
        .map_err(|e| e.to_string())?;
    let action = matches_to_action(&matches)?;
    app.run(action)
}
