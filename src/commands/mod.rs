//! Command dispatcher.
//!
//! One module per subcommand, each exposing an `Args` struct and a
//! `pub async fn cmd`. New subcommands register themselves in [`Commands`]
//! and get one match arm in [`Cli::menu`].

pub mod add;
pub mod add_bulk;
pub mod complete;
pub mod delete;
pub mod list;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mmi", author, version, about = "CLI Task Manager", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(name = "add-bulk", about = "Bulk-create tasks from a JSON file")]
    AddBulk(add_bulk::AddBulkArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Update an existing task")]
    Update(update::UpdateArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args).await,
            Commands::AddBulk(args) => add_bulk::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Update(args) => update::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}
