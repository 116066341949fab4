//! Gateway tests against a live PostgreSQL.
//!
//! Ignored by default. Point `POSTGRES_*` at a scratch database and run
//! `cargo test -p todo-server --test postgres -- --ignored --test-threads=1`.
//! Each test drops and recreates the `todos` table.

use clap::Parser;
use sqlx::Connection;
use todo_core::TodoError;
use todo_server::{Config, DbConfig, PgStore, TodoStore};

fn db_config() -> DbConfig {
    Config::try_parse_from(["todo-server"]).unwrap().db
}

async fn fresh_store() -> PgStore {
    let config = db_config();
    let mut conn = sqlx::PgConnection::connect_with(&config.connect_options())
        .await
        .unwrap();
    sqlx::query("DROP TABLE IF EXISTS todos")
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();

    let store = PgStore::new(&config);
    store.initialize_schema().await.unwrap();
    store
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn initialize_schema_is_idempotent() {
    let store = fresh_store().await;
    store.initialize_schema().await.unwrap();
    store.initialize_schema().await.unwrap();
    assert!(store.list_todos().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn create_returns_trimmed_text_and_fresh_ids() {
    let store = fresh_store().await;
    let first = store.create_todo("  Buy milk ").await.unwrap();
    let second = store.create_todo("Walk dog").await.unwrap();
    assert_eq!(first.text, "Buy milk");
    assert!(first.id > 0);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn create_validates_before_connecting() {
    let store = PgStore::new(&DbConfig {
        host: "unreachable.invalid".to_string(),
        ..DbConfig::default()
    });
    assert!(matches!(store.create_todo("").await, Err(TodoError::Validation(_))));
    assert!(matches!(
        store.create_todo(&"a".repeat(201)).await,
        Err(TodoError::Validation(_))
    ));
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn list_after_delete_keeps_order() {
    let store = fresh_store().await;
    let ids: Vec<i32> = [
        store.create_todo("one").await.unwrap().id,
        store.create_todo("two").await.unwrap().id,
        store.create_todo("three").await.unwrap().id,
    ]
    .to_vec();

    assert_eq!(store.delete_todo(ids[1]).await.unwrap(), ids[1]);
    let listed: Vec<i32> = store.list_todos().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(listed, vec![ids[0], ids[2]]);
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn delete_twice_reports_not_found() {
    let store = fresh_store().await;
    let todo = store.create_todo("once").await.unwrap();
    store.delete_todo(todo.id).await.unwrap();
    assert!(matches!(
        store.delete_todo(todo.id).await,
        Err(TodoError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_todo(9_999).await,
        Err(TodoError::NotFound { id: 9_999 })
    ));
}

#[tokio::test]
async fn unreachable_database_is_an_infrastructure_error() {
    let store = PgStore::new(&DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..DbConfig::default()
    });
    assert!(matches!(
        store.list_todos().await,
        Err(TodoError::Infrastructure(_))
    ));
}
