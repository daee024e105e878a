//! Storage layer.
//!
//! The repository talks to a [`store::TaskStore`]; this module provides the
//! trait and its two implementations. Durable state lives entirely in the
//! external store — nothing here caches across invocations.

/// The store trait the repository is generic over.
pub mod store;

/// Production store: MongoDB collection with connection bootstrap.
pub mod mongo;

/// Insertion-ordered in-memory store for tests.
pub mod memory;
