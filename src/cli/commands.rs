use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qdrant-memory-mcp", version, about = "Vector memory tools for LLM agents, served over MCP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the memory tools over MCP on stdio (default)
    Serve,
    /// Print the tool definitions as JSON
    Tools,
    /// Invoke one tool and print its result
    Call {
        /// Tool name (memory-store, memory-search, memory-debug)
        tool: String,
        /// JSON object with the tool arguments
        #[arg(default_value = "{}")]
        json: String,
    },
}
