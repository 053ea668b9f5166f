use todostore::{AssociationRepository, LocalStorage, NewTodo};

#[tokio::test]
async fn test_associate_hydrates_single_get() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let todo = storage.todos().create(NewTodo::new("first todo", "desc")).await.unwrap();
    assert!(todo.tags.is_empty());
    let tag = storage.tags().create("foo").await.unwrap();

    let link_id = storage.associations().associate(tag.id, todo.id).await.unwrap();
    assert!(link_id > 0);

    let fetched = storage.todos().get(todo.id).await.unwrap().unwrap();
    assert_eq!(fetched.tags, vec![tag.clone()]);
    assert_eq!(fetched.tags[0].id, tag.id);
}

#[tokio::test]
async fn test_tags_keep_link_order() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let todo = storage.todos().create(NewTodo::new("ordered", "")).await.unwrap();
    let one = storage.tags().create("tagOne").await.unwrap();
    let two = storage.tags().create("tagTwo").await.unwrap();

    storage.associations().associate(two.id, todo.id).await.unwrap();
    storage.associations().associate(one.id, todo.id).await.unwrap();

    let names: Vec<String> = AssociationRepository::tags_for_todo(&storage.conn, todo.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["tagTwo".to_string(), "tagOne".to_string()]);
}

#[tokio::test]
async fn test_duplicate_links_are_kept() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let todo = storage.todos().create(NewTodo::new("twice", "")).await.unwrap();
    let tag = storage.tags().create("again").await.unwrap();

    let first = storage.associations().associate(tag.id, todo.id).await.unwrap();
    let second = storage.associations().associate(tag.id, todo.id).await.unwrap();
    assert_ne!(first, second);

    let fetched = storage.todos().get(todo.id).await.unwrap().unwrap();
    assert_eq!(fetched.tags.len(), 2);
}

#[tokio::test]
async fn test_associate_does_not_check_ids() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let result = storage.associations().associate(777, 888).await;
    assert!(result.is_ok());
    assert!(storage.todos().get(888).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleted_tag_leaves_orphan_link() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let todo = storage.todos().create(NewTodo::new("orphaned", "")).await.unwrap();
    let kept = storage.tags().create("kept").await.unwrap();
    let dropped = storage.tags().create("dropped").await.unwrap();
    storage.associations().associate(kept.id, todo.id).await.unwrap();
    storage.associations().associate(dropped.id, todo.id).await.unwrap();

    assert_eq!(storage.tags().delete(dropped.id).await.unwrap(), 1);

    let fetched = storage.todos().get(todo.id).await.unwrap().unwrap();
    assert_eq!(fetched.tags, vec![kept]);
}

#[tokio::test]
async fn test_deleting_todo_keeps_links() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let todo = storage.todos().create(NewTodo::new("removed", "")).await.unwrap();
    let tag = storage.tags().create("label").await.unwrap();
    storage.associations().associate(tag.id, todo.id).await.unwrap();

    assert_eq!(storage.todos().delete(todo.id).await.unwrap(), 1);

    // The join row is still there and still resolves to the tag
    let orphaned = AssociationRepository::tags_for_todo(&storage.conn, todo.id).await.unwrap();
    assert_eq!(orphaned, vec![tag]);
    assert!(storage.todos().get(todo.id).await.unwrap().is_none());
}
