use clap::{ArgAction, Args, Parser, Subcommand};

/// Manage the todo list of a remote todo service.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Base URL of the todo service (default: http://localhost:8000)
    #[arg(long, env = todo_core::API_URL_ENV, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every todo
    List,

    /// Show a single todo
    Show { id: i64 },

    /// Create a pending todo
    Add { text: String },

    /// Flip a todo between pending and completed
    Toggle { id: i64 },

    /// Replace the text of a todo
    Edit { id: i64, text: String },

    /// Remove a todo
    Delete { id: i64 },
}
