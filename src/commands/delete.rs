use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the task to delete
    id: String,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let repository = TaskRepository::new(MongoStore::connect(&config).await?);

    repository.delete(&args.id).await?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
