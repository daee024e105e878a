use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE DATE", "PRIORITY", "DONE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                task.due_date.map(|date| date.to_string()).unwrap_or_else(|| "-".to_string()),
                task.priority,
                if task.completed { "yes" } else { "no" },
                task.created_at.format("%Y-%m-%d %H:%M")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
