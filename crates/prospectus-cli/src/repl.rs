//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(session: &mut Session, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Prospectus REPL - Type 'help' for commands, 'exit' to quit")
    );
    if !session.llm_enabled() {
        println!(
            "{}",
            formatter.info("No API key configured; using rule-based extraction only")
        );
    }
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if session.store.is_empty() {
            "prospectus (no documents)> "
        } else {
            "prospectus> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match handle_line(line, session, formatter).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Handle one input line. Returns `true` when the REPL should exit.
async fn handle_line(line: &str, session: &mut Session, formatter: &Formatter) -> Result<bool> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts[0] {
        "exit" | "quit" | "q" => {
            println!("{}", formatter.info("Goodbye!"));
            return Ok(true);
        }
        "help" | "?" => print_help(formatter),
        "load" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput("Usage: load <file>".to_string()));
            }
            let loaded = session.load_documents(&[parts[1].to_string()])?;
            println!("{}", formatter.success(&format!("Loaded {} document(s)", loaded)));
        }
        "unload" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput("Usage: unload <name>".to_string()));
            }
            match session.store.remove(parts[1]) {
                Some(_) => println!("{}", formatter.success(&format!("Unloaded {}", parts[1]))),
                None => {
                    return Err(CliError::InvalidInput(format!(
                        "No document named '{}'",
                        parts[1]
                    )))
                }
            }
        }
        "docs" => {
            if session.store.is_empty() {
                println!("{}", formatter.info("No documents loaded"));
            } else {
                for document in session.store.documents() {
                    println!("  {}", document.name);
                }
            }
        }
        "catalog" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput("Usage: catalog <file>".to_string()));
            }
            let rows = session.load_catalog(parts[1])?;
            println!("{}", formatter.success(&format!("Loaded {} catalog row(s)", rows)));
        }
        "datapoints" => commands::execute_datapoints(session, formatter)?,
        "ask" => {
            let question = parts[1..].join(" ");
            commands::execute_ask(&question, session, formatter).await?;
        }
        // A bare question is an implicit ask
        _ => commands::execute_ask(line, session, formatter).await?,
    }

    Ok(false)
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let prospectus_dir = home.join(".prospectus");
    std::fs::create_dir_all(&prospectus_dir)?;
    Ok(prospectus_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  load <file>       - Load parsed documents from a JSON file");
    println!("  unload <name>     - Remove a document by name");
    println!("  docs              - List loaded documents");
    println!("  catalog <file>    - Load the datapoint catalog from a CSV file");
    println!("  datapoints        - List the datapoints the catalog can answer");
    println!("  ask <question>    - Ask a question about the loaded documents");
    println!("  <question>        - Same as ask");
    println!("  help, ?           - Show this help");
    println!("  exit, quit, q     - Exit REPL");
    println!();
}
