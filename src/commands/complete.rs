use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Identifier of the task to mark as completed
    id: String,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let config = Config::read()?;
    let repository = TaskRepository::new(MongoStore::connect(&config).await?);

    let task = repository.complete(&args.id).await?;

    msg_success!(Message::TaskCompleted(task.id.clone()));
    Ok(())
}
