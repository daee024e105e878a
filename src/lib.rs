//! # mmi - CLI Task Manager
//!
//! A command-line task manager that keeps its tasks in a MongoDB collection.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, complete, and delete tasks
//! - **Bulk Creation**: Load many tasks at once from a JSON file
//! - **Filtered Listing**: List by completion state, priority, or due date
//! - **Configurable Store**: Connection URI and database name via config
//!   file or environment variables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mmi::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
