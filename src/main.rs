use clap::Parser;
use qdrant_memory_mcp::cli::commands::{Cli, Commands};
use qdrant_memory_mcp::config::Config;
use qdrant_memory_mcp::QdrantMemory;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error initializing server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(QdrantMemory::new(&config), cli.command.unwrap_or(Commands::Serve)).await {
        error!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(memory: QdrantMemory, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve => memory.into_server().run_stdio().await?,
        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&memory.tool_definitions())?);
        }
        Commands::Call { tool, json } => {
            let args: serde_json::Value = serde_json::from_str(&json)?;
            let result = memory.call_tool(&tool, args).await?;
            println!("{}", result.text());
            if result.is_error {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
