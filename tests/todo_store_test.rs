mod common;

use todo_backend::stores::TodoStore;
use todo_backend::types::dto::todo::ItemStatusFilter;

#[tokio::test]
async fn created_items_are_immediately_retrievable() {
    let db = common::setup_test_db().await;
    let store = TodoStore::new(db);

    let item = store
        .insert("Write report".to_string(), false)
        .await
        .expect("Failed to insert item");

    let found = store
        .find_by_id(item.id)
        .await
        .expect("Failed to query item")
        .expect("Item not found");

    assert_eq!(found, item);
}

#[tokio::test]
async fn list_all_returns_exactly_the_stored_set() {
    let db = common::setup_test_db().await;
    let store = TodoStore::new(db);

    let mut inserted_ids = Vec::new();
    for (title, done) in [("a", false), ("b", true), ("c", false), ("d", true)] {
        let item = store
            .insert(title.to_string(), done)
            .await
            .expect("Failed to insert item");
        inserted_ids.push(item.id);
    }

    let all = store
        .list(ItemStatusFilter::All)
        .await
        .expect("Failed to list items");

    let mut listed_ids: Vec<i32> = all.iter().map(|item| item.id).collect();
    listed_ids.sort_unstable();
    inserted_ids.sort_unstable();
    assert_eq!(listed_ids, inserted_ids);
}

#[tokio::test]
async fn status_filters_partition_the_stored_set() {
    let db = common::setup_test_db().await;
    let store = TodoStore::new(db);

    for (title, done) in [("a", false), ("b", true), ("c", false)] {
        store
            .insert(title.to_string(), done)
            .await
            .expect("Failed to insert item");
    }

    let all = store
        .list(ItemStatusFilter::All)
        .await
        .expect("Failed to list items");
    let todo = store
        .list(ItemStatusFilter::Todo)
        .await
        .expect("Failed to list items");
    let completed = store
        .list(ItemStatusFilter::Completed)
        .await
        .expect("Failed to list items");

    assert_eq!(todo.len() + completed.len(), all.len());
    assert!(todo.iter().all(|item| !item.is_completed));
    assert!(completed.iter().all(|item| item.is_completed));

    let mut partitioned: Vec<i32> = todo
        .iter()
        .chain(completed.iter())
        .map(|item| item.id)
        .collect();
    partitioned.sort_unstable();
    let mut expected: Vec<i32> = all.iter().map(|item| item.id).collect();
    expected.sort_unstable();
    assert_eq!(partitioned, expected);
}

#[tokio::test]
async fn deleted_ids_are_not_reused_for_lookups() {
    let db = common::setup_test_db().await;
    let store = TodoStore::new(db);

    let item = store
        .insert("Ephemeral".to_string(), false)
        .await
        .expect("Failed to insert item");
    let id = item.id;

    store.delete(item).await.expect("Failed to delete item");

    let found = store.find_by_id(id).await.expect("Failed to query item");
    assert!(found.is_none());

    let all = store
        .list(ItemStatusFilter::All)
        .await
        .expect("Failed to list items");
    assert!(all.is_empty());
}
