//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Prospectus CLI - Ask questions about financial datapoints in fund
/// prospectus documents.
#[derive(Debug, Parser)]
#[command(name = "prospectus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Parsed document files (JSON) to load
    #[arg(short, long, global = true)]
    pub docs: Vec<String>,

    /// Datapoint catalog file (CSV)
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    /// Use only the deterministic extractors, never the LLM
    #[arg(long, global = true)]
    pub rules: bool,

    /// OpenAI API key for LLM extraction
    #[arg(long, env = "OPENAI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a question about the loaded documents
    Ask(AskArgs),

    /// List the datapoints the catalog can answer
    Datapoints,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question, e.g. "What are the net expenses for Class A shares?"
    pub question: Vec<String>,
}

impl AskArgs {
    /// The question joined back into one string.
    pub fn question(&self) -> String {
        self.question.join(" ")
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_command_joins_words() {
        let cli = Cli::parse_from(["prospectus", "ask", "net", "expenses", "class", "A"]);
        match cli.command {
            Some(Command::Ask(args)) => assert_eq!(args.question(), "net expenses class A"),
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_docs_flag_repeats() {
        let cli = Cli::parse_from([
            "prospectus",
            "--docs",
            "a.json",
            "--docs",
            "b.json",
            "repl",
        ]);
        assert_eq!(cli.docs, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_rules_flag() {
        let cli = Cli::parse_from(["prospectus", "--rules", "ask", "cdsc"]);
        assert!(cli.rules);
    }
}
