#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String, String),  // id, title
    TaskUpdated(String, String),  // id, title
    TaskCompleted(String),        // id
    TaskDeleted(String),          // id
    TasksBulkCreated(usize),      // count
    BulkFileEmpty,
    NoTasksFound,

    // === GENERIC ===
    CommandFailed(String),
}
