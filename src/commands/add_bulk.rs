use crate::db::mongo::MongoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::{BulkMode, TaskRepository};
use crate::libs::task::NewTask;
use crate::{msg_info, msg_success};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct AddBulkArgs {
    /// Path to a JSON file with an array of task definitions
    #[arg(short, long)]
    file: PathBuf,
    /// Keep inserting remaining tasks after a store failure instead of
    /// stopping the batch
    #[arg(long)]
    best_effort: bool,
}

/// Read and parse a bulk file: a JSON array of task objects with `title`
/// plus optional `description`, `due_date`, and `priority`.
pub fn read_bulk_file(path: &Path) -> Result<Vec<NewTask>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read bulk file {}", path.display()))?;
    let drafts: Vec<NewTask> =
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(drafts)
}

pub async fn cmd(args: AddBulkArgs) -> Result<()> {
    let drafts = read_bulk_file(&args.file)?;

    let config = Config::read()?;
    let mode = if args.best_effort || !config.bulk_atomic {
        BulkMode::BestEffort
    } else {
        BulkMode::Atomic
    };

    let repository = TaskRepository::new(MongoStore::connect(&config).await?);
    let created = repository.create_bulk(drafts, mode).await?;

    if created.is_empty() {
        msg_info!(Message::BulkFileEmpty);
    } else {
        msg_success!(Message::TasksBulkCreated(created.len()));
    }
    Ok(())
}
