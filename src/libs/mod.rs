/// Configuration loading: file, environment overrides, defaults.
pub mod config;

/// Platform-specific application data directory.
pub mod data_storage;

/// The task error taxonomy and `Result` alias.
pub mod error;

/// User-facing message catalogue and display macros.
pub mod messages;

/// The task repository — the core of the application.
pub mod repository;

/// Task model, payloads, filter, and field validation.
pub mod task;

/// Terminal table rendering.
pub mod view;
