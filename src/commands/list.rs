use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::{Priority, TaskFilter};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only completed tasks
    #[arg(long, conflicts_with = "pending")]
    completed: bool,
    /// Show only tasks not yet completed
    #[arg(long)]
    pending: bool,
    /// Filter tasks by priority level
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// Filter tasks by exact due date
    #[arg(long, value_name = "YYYY-MM-DD")]
    due_date: Option<NaiveDate>,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let filter = TaskFilter {
        completed: if args.completed {
            Some(true)
        } else if args.pending {
            Some(false)
        } else {
            None
        },
        priority: args.priority,
        due_date: args.due_date,
    };

    let config = Config::read()?;
    let repository = TaskRepository::new(MongoStore::connect(&config).await?);
    let tasks = repository.list(&filter).await?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(&tasks)?;
    Ok(())
}
