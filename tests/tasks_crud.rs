#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mmi::db::memory::MemoryStore;
    use mmi::libs::error::TaskError;
    use mmi::libs::repository::{BulkMode, TaskRepository};
    use mmi::libs::task::{NewTask, Priority, TaskChanges, TaskFilter};

    fn repository() -> TaskRepository<MemoryStore> {
        TaskRepository::new(MemoryStore::default())
    }

    fn draft(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let repository = repository();

        let created = repository
            .create(NewTask {
                title: "Buy groceries".to_string(),
                description: "Milk and bread".to_string(),
                due_date: Some(NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()),
                priority: Priority::High,
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Buy groceries");
        assert_eq!(created.description, "Milk and bread");
        assert_eq!(created.due_date, Some(NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()));
        assert_eq!(created.priority, Priority::High);
        assert!(!created.completed);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repository.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_trims_text_fields() {
        let repository = repository();

        let created = repository
            .create(NewTask {
                title: "  Walk the dog  ".to_string(),
                description: "  around the block ".to_string(),
                due_date: None,
                priority: Priority::Low,
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Walk the dog");
        assert_eq!(created.description, "around the block");
    }

    #[tokio::test]
    async fn test_create_empty_title_persists_nothing() {
        let repository = repository();

        let result = repository.create(draft("   ")).await;
        assert!(matches!(result, Err(TaskError::Validation { field: "title", .. })));

        let tasks = repository.list(&TaskFilter::default()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_get_update_complete_missing_id() {
        let repository = repository();

        let get = repository.get("abc123").await;
        assert!(matches!(get, Err(TaskError::NotFound(id)) if id == "abc123"));

        let update = repository
            .update(
                "abc123",
                TaskChanges {
                    title: Some("New title".to_string()),
                    ..TaskChanges::default()
                },
            )
            .await;
        assert!(matches!(update, Err(TaskError::NotFound(_))));

        let complete = repository.complete("abc123").await;
        assert!(matches!(complete, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let repository = repository();
        let created = repository.create(draft("Write report")).await.unwrap();

        let first = repository.complete(&created.id).await.unwrap();
        assert!(first.completed);

        let second = repository.complete(&created.id).await.unwrap();
        assert!(second.completed);
        assert_eq!(second.id, first.id);
        assert_eq!(second.title, first.title);
    }

    #[tokio::test]
    async fn test_update_partial_fields() {
        let repository = repository();
        let created = repository
            .create(NewTask {
                title: "Original title".to_string(),
                description: "Original description".to_string(),
                due_date: None,
                priority: Priority::Low,
            })
            .await
            .unwrap();

        let updated = repository
            .update(
                &created.id,
                TaskChanges {
                    title: Some("Updated title".to_string()),
                    priority: Some(Priority::High),
                    ..TaskChanges::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.priority, Priority::High);
        // Untouched fields survive the partial update.
        assert_eq!(updated.description, "Original description");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_title_and_leaves_task_alone() {
        let repository = repository();
        let created = repository.create(draft("Keep me")).await.unwrap();

        let result = repository
            .update(
                &created.id,
                TaskChanges {
                    title: Some("   ".to_string()),
                    ..TaskChanges::default()
                },
            )
            .await;
        assert!(matches!(result, Err(TaskError::Validation { field: "title", .. })));

        let fetched = repository.get(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Keep me");
    }

    #[tokio::test]
    async fn test_update_with_no_changes_returns_current_task() {
        let repository = repository();
        let created = repository.create(draft("Unchanged")).await.unwrap();

        let returned = repository.update(&created.id, TaskChanges::default()).await.unwrap();
        assert_eq!(returned, created);
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let repository = repository();
        let created = repository.create(draft("Short lived")).await.unwrap();

        repository.delete(&created.id).await.unwrap();

        let get = repository.get(&created.id).await;
        assert!(matches!(get, Err(TaskError::NotFound(_))));

        // Deleting the same id again reports NotFound as well.
        let delete = repository.delete(&created.id).await;
        assert!(matches!(delete, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_returns_non_deleted_tasks_in_creation_order() {
        let repository = repository();

        let first = repository.create(draft("First")).await.unwrap();
        let second = repository.create(draft("Second")).await.unwrap();
        let third = repository.create(draft("Third")).await.unwrap();

        repository.delete(&second.id).await.unwrap();

        let tasks = repository.list(&TaskFilter::default()).await.unwrap();
        let ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec![first.id.as_str(), third.id.as_str()]);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let repository = repository();

        let urgent = repository
            .create(NewTask {
                title: "Urgent".to_string(),
                description: String::new(),
                due_date: Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
                priority: Priority::High,
            })
            .await
            .unwrap();
        let casual = repository.create(draft("Casual")).await.unwrap();
        repository.complete(&casual.id).await.unwrap();

        let completed = repository
            .list(&TaskFilter {
                completed: Some(true),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, casual.id);

        let pending = repository
            .list(&TaskFilter {
                completed: Some(false),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, urgent.id);

        let high = repository
            .list(&TaskFilter {
                priority: Some(Priority::High),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, urgent.id);

        let due = repository
            .list(&TaskFilter {
                due_date: Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, urgent.id);

        let no_match = repository
            .list(&TaskFilter {
                due_date: Some(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert!(no_match.is_empty());
    }

    #[tokio::test]
    async fn test_create_bulk_persists_every_task() {
        let repository = repository();

        let drafts = vec![draft("One"), draft("Two"), draft("Three")];
        let created = repository.create_bulk(drafts, BulkMode::Atomic).await.unwrap();
        assert_eq!(created.len(), 3);

        let tasks = repository.list(&TaskFilter::default()).await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks, created);
    }

    #[tokio::test]
    async fn test_create_bulk_invalid_draft_persists_nothing() {
        let repository = repository();

        let drafts = vec![draft("Valid"), draft(""), draft("Also valid")];
        let result = repository.create_bulk(drafts, BulkMode::BestEffort).await;
        assert!(matches!(result, Err(TaskError::Validation { field: "title", .. })));

        let tasks = repository.list(&TaskFilter::default()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_bulk_empty_input() {
        let repository = repository();

        let created = repository.create_bulk(Vec::new(), BulkMode::Atomic).await.unwrap();
        assert!(created.is_empty());
    }
}
