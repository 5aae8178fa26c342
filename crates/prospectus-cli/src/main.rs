//! Prospectus CLI - Ask questions about financial datapoints in fund
//! prospectus documents.

use clap::Parser;
use prospectus_cli::{commands, repl, Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.settings.catalog_path.clone());

    let mut session = Session::new(config, cli.api_key.clone(), cli.rules);
    if let Some(path) = catalog_path {
        session.load_catalog(&path)?;
    }
    if !cli.docs.is_empty() {
        session.load_documents(&cli.docs)?;
    }

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut session, &formatter).await?;
        }
        Some(Command::Ask(args)) => {
            commands::execute_ask(&args.question(), &session, &formatter).await?;
        }
        Some(Command::Datapoints) => {
            commands::execute_datapoints(&session, &formatter)?;
        }
    }

    Ok(())
}
