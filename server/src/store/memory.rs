//! In-process gateway used by tests and `--memory` runs.
//!
//! Ids come from a counter that only moves forward, so a deleted id is
//! never handed out again, matching a `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use todo_core::{Todo, TodoError, TodoText};
use tokio::sync::RwLock;

use super::TodoStore;

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    todos: BTreeMap<i32, Todo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn initialize_schema(&self) -> Result<(), TodoError> {
        Ok(())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, TodoError> {
        let text = TodoText::parse(text)?;
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| TodoError::infrastructure("todo id sequence exhausted"))?;
        inner.last_id = id;
        let todo = Todo {
            id,
            text: text.into_inner(),
        };
        inner.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_todo(&self, id: i32) -> Result<i32, TodoError> {
        let mut inner = self.inner.write().await;
        inner
            .todos
            .remove(&id)
            .map(|todo| todo.id)
            .ok_or(TodoError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_empty_initially() {
        let store = MemoryStore::new();
        assert!(store.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_trims() {
        let store = MemoryStore::new();
        let first = store.create_todo("  Buy milk  ").await.unwrap();
        let second = store.create_todo("Walk dog").await.unwrap();
        assert_eq!(first, Todo { id: 1, text: "Buy milk".to_string() });
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_rejects_invalid_text_without_consuming_an_id() {
        let store = MemoryStore::new();
        assert!(matches!(store.create_todo("").await, Err(TodoError::Validation(_))));
        assert!(matches!(store.create_todo("   ").await, Err(TodoError::Validation(_))));
        assert!(matches!(
            store.create_todo(&"a".repeat(201)).await,
            Err(TodoError::Validation(_))
        ));
        let todo = store.create_todo(&"a".repeat(200)).await.unwrap();
        assert_eq!(todo.id, 1);
    }

    #[tokio::test]
    async fn list_is_ordered_and_skips_deleted() {
        let store = MemoryStore::new();
        for text in ["one", "two", "three"] {
            store.create_todo(text).await.unwrap();
        }
        assert_eq!(store.delete_todo(2).await.unwrap(), 2);
        let ids: Vec<i32> = store.list_todos().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let store = MemoryStore::new();
        let todo = store.create_todo("once").await.unwrap();
        store.delete_todo(todo.id).await.unwrap();
        let err = store.delete_todo(todo.id).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound { id } if id == todo.id));
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.delete_todo(42).await, Err(TodoError::NotFound { id: 42 })));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create_todo("first").await.unwrap();
        store.delete_todo(first.id).await.unwrap();
        let second = store.create_todo("second").await.unwrap();
        assert!(second.id > first.id);
    }
}
