use todostore::{LocalStorage, NewTodo, StoreError, TodoChanges, TodoStatus};

#[tokio::test]
async fn test_create_returns_open_todo() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let todo = storage.todos().create(NewTodo::new("first todo", "desc")).await.unwrap();

    assert!(todo.id > 0);
    assert_eq!(todo.title, "first todo");
    assert_eq!(todo.description, "desc");
    assert_eq!(todo.status, TodoStatus::Open);
    assert!(todo.tags.is_empty());
    assert!(todo.created_at > 0);
    assert_eq!(todo.created_at, todo.updated_at);
}

#[tokio::test]
async fn test_create_then_get() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();

    let created = repo.create(NewTodo::new("testing get todo", "Some description")).await.unwrap();
    let fetched = repo.get(created.id).await.unwrap().expect("todo should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.status.display_name(), "Open");
}

#[tokio::test]
async fn test_create_rejects_empty_title() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();

    let result = repo.create(NewTodo::new("", "no title")).await;

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_is_none() {
    let storage = LocalStorage::in_memory().await.unwrap();
    assert!(storage.todos().get(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ids_are_monotonic() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();

    let first = repo.create(NewTodo::new("one", "")).await.unwrap();
    let second = repo.create(NewTodo::new("two", "")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_get_all_skips_tags() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();

    let first = repo.create(NewTodo::new("first", "")).await.unwrap();
    repo.create(NewTodo::new("second", "")).await.unwrap();
    let tag = storage.tags().create("foo").await.unwrap();
    storage.associations().associate(tag.id, first.id).await.unwrap();

    let todos = repo.get_all().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert!(todos.iter().all(|t| t.tags.is_empty()));
    assert_eq!(todos[0].title, "first");
    assert_eq!(todos[1].title, "second");
}

#[tokio::test]
async fn test_update_changes_only_targeted_fields() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let created = repo.create(NewTodo::new("write docs", "for the store")).await.unwrap();

    let updated = repo
        .update(created.id, TodoChanges::new().status(TodoStatus::InProgress))
        .await
        .unwrap()
        .expect("todo should exist");

    assert_eq!(updated.status, TodoStatus::InProgress);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_full_overwrite() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let created = repo.create(NewTodo::new("draft", "")).await.unwrap();

    let mut edited = created.clone();
    edited.title = "final".to_string();
    edited.description = "reviewed".to_string();
    edited.status = TodoStatus::Closed;

    let updated = repo.update(created.id, TodoChanges::from(&edited)).await.unwrap().unwrap();

    assert_eq!(updated.title, "final");
    assert_eq!(updated.description, "reviewed");
    assert_eq!(updated.status, TodoStatus::Closed);
}

#[tokio::test]
async fn test_any_status_transition_is_allowed() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let todo = repo.create(NewTodo::new("cycle", "")).await.unwrap();

    for status in [TodoStatus::Closed, TodoStatus::Open, TodoStatus::InProgress, TodoStatus::Closed] {
        let updated = repo.update(todo.id, TodoChanges::new().status(status)).await.unwrap().unwrap();
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn test_unknown_status_round_trips() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let todo = repo.create(NewTodo::new("odd", "")).await.unwrap();

    repo.update(todo.id, TodoChanges::new().status(TodoStatus::from_code(10)))
        .await
        .unwrap();
    let fetched = repo.get(todo.id).await.unwrap().unwrap();

    assert_eq!(fetched.status, TodoStatus::Unknown(10));
    assert_eq!(fetched.status.code(), 10);
    assert_eq!(fetched.status.to_string(), "Unknown");
}

#[tokio::test]
async fn test_update_missing_is_none() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();

    let result = repo.update(99, TodoChanges::new().title("ghost")).await.unwrap();

    assert!(result.is_none());
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_empty_title() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let todo = repo.create(NewTodo::new("keep me", "")).await.unwrap();

    let result = repo.update(todo.id, TodoChanges::new().title(" ")).await;

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(repo.get(todo.id).await.unwrap().unwrap().title, "keep me");
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let repo = storage.todos();
    let todo = repo.create(NewTodo::new("short lived", "")).await.unwrap();

    assert_eq!(repo.delete(todo.id).await.unwrap(), 1);
    assert!(repo.get(todo.id).await.unwrap().is_none());
    assert_eq!(repo.delete(todo.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_returns_zero() {
    let storage = LocalStorage::in_memory().await.unwrap();
    assert_eq!(storage.todos().delete(12345).await.unwrap(), 0);
}
