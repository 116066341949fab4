//! Persistence gateways for the `todos` table.
//!
//! # Design
//! `TodoStore` is the seam between the HTTP handlers and storage. Each
//! method maps to exactly one statement against the backend. Implementations
//! validate text with `TodoText::parse` before touching storage, so invalid
//! input never reaches the database.

use async_trait::async_trait;
use todo_core::{Todo, TodoError};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Ensure the `todos` table exists. Safe to call on every start.
    async fn initialize_schema(&self) -> Result<(), TodoError>;

    /// All todos in ascending id order. Empty when the table is empty.
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError>;

    /// Insert a todo and return it with its assigned id and trimmed text.
    async fn create_todo(&self, text: &str) -> Result<Todo, TodoError>;

    /// Delete the todo with `id` and return that id.
    async fn delete_todo(&self, id: i32) -> Result<i32, TodoError>;
}
