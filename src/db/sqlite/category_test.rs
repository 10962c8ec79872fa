//! Tests for SqliteCategoryRepository.

use crate::db::{
    CategoryRepository, Database, NewQuestion, QuestionRepository, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_all_categories_in_id_order() {
    let db = setup_db().await;

    let categories = db.categories().list().await.expect("List should succeed");
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_in_use_is_empty_without_questions() {
    let db = setup_db().await;

    let in_use = db
        .categories()
        .list_in_use()
        .await
        .expect("List should succeed");
    assert!(in_use.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_in_use_only_returns_referenced_categories_once() {
    let db = setup_db().await;

    for category in [4, 4, 2] {
        db.questions()
            .create(&NewQuestion {
                question: Some("q".to_string()),
                answer: Some("a".to_string()),
                category: Some(category),
                difficulty: Some(1),
            })
            .await
            .expect("Create should succeed");
    }

    let in_use = db
        .categories()
        .list_in_use()
        .await
        .expect("List should succeed");
    let labels: Vec<(i64, &str)> = in_use.iter().map(|c| (c.id, c.kind.as_str())).collect();
    assert_eq!(labels, vec![(2, "Art"), (4, "History")]);
}
