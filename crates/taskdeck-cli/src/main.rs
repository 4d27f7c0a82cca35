mod cli;
mod context;
mod handlers;
mod output;
mod validation;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKDECK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let ctx = CliContext::new(&cli.file, cli.user);

    let result = match cli.command {
        Commands::Task(task_cmd) => handlers::task::handle(&ctx, task_cmd.action).await,
    };

    if let Err(err) = result {
        output::output_error(&err.to_string());
    }

    Ok(())
}
