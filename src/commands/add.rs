use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::{NewTask, Priority};
use crate::msg_success;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Short title for the task
    title: String,
    /// Longer description of the task
    #[arg(short, long, default_value = "")]
    description: String,
    /// Optional due date for the task
    #[arg(long, value_name = "YYYY-MM-DD")]
    due_date: Option<NaiveDate>,
    /// Priority level for the task
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let repository = TaskRepository::new(MongoStore::connect(&config).await?);

    let task = repository
        .create(NewTask {
            title: args.title,
            description: args.description,
            due_date: args.due_date,
            priority: args.priority,
        })
        .await?;

    msg_success!(Message::TaskCreated(task.id.clone(), task.title.clone()));
    Ok(())
}
