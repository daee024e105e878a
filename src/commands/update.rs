use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::{Priority, TaskChanges};
use crate::msg_success;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Identifier of the task to update
    id: String,
    /// New title for the task
    #[arg(long)]
    title: Option<String>,
    /// New description for the task
    #[arg(short, long)]
    description: Option<String>,
    /// New due date for the task
    #[arg(long, value_name = "YYYY-MM-DD")]
    due_date: Option<NaiveDate>,
    /// New priority level for the task
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

pub async fn cmd(args: UpdateArgs) -> Result<()> {
    let changes = TaskChanges {
        title: args.title,
        description: args.description,
        due_date: args.due_date,
        priority: args.priority,
    };

    let config = Config::read()?;
    let repository = TaskRepository::new(MongoStore::connect(&config).await?);
    let task = repository.update(&args.id, changes).await?;

    msg_success!(Message::TaskUpdated(task.id.clone(), task.title.clone()));
    Ok(())
}
