//! PostgreSQL gateway.
//!
//! Every operation opens its own connection, runs one statement and closes
//! the connection again before returning, on the error path too. There is no
//! pool and no explicit transaction; each statement autocommits.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use todo_core::{Todo, TodoError, TodoText};
use tracing::{debug, warn};

use super::TodoStore;
use crate::config::DbConfig;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    text TEXT NOT NULL
)";
const LIST_SQL: &str = "SELECT id, text FROM todos ORDER BY id";
const INSERT_SQL: &str = "INSERT INTO todos (text) VALUES ($1) RETURNING id";
const DELETE_SQL: &str = "DELETE FROM todos WHERE id = $1 RETURNING id";

#[derive(Clone)]
pub struct PgStore {
    options: PgConnectOptions,
}

impl PgStore {
    pub fn new(config: &DbConfig) -> Self {
        Self::with_options(config.connect_options())
    }

    pub fn with_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<PgConnection, TodoError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(TodoError::infrastructure)
    }
}

/// Close `conn`, then hand back the statement result.
///
/// A failed close is logged and otherwise ignored: the statement has already
/// run, and its outcome is what the caller needs.
async fn release<T>(conn: PgConnection, result: Result<T, sqlx::Error>) -> Result<T, TodoError> {
    if let Err(err) = conn.close().await {
        warn!(error = %err, "failed to close database connection");
    }
    result.map_err(TodoError::infrastructure)
}

#[async_trait]
impl TodoStore for PgStore {
    async fn initialize_schema(&self) -> Result<(), TodoError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(SCHEMA_SQL).execute(&mut conn).await;
        release(conn, result).await?;
        debug!("todos table ready");
        Ok(())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, (i32, String)>(LIST_SQL)
            .fetch_all(&mut conn)
            .await;
        let rows = release(conn, result).await?;
        Ok(rows.into_iter().map(|(id, text)| Todo { id, text }).collect())
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, TodoError> {
        let text = TodoText::parse(text)?;
        let mut conn = self.connect().await?;
        let result = sqlx::query_scalar::<_, i32>(INSERT_SQL)
            .bind(text.as_str())
            .fetch_one(&mut conn)
            .await;
        let id = release(conn, result).await?;
        Ok(Todo {
            id,
            text: text.into_inner(),
        })
    }

    async fn delete_todo(&self, id: i32) -> Result<i32, TodoError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_scalar::<_, i32>(DELETE_SQL)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        release(conn, result).await?.ok_or(TodoError::NotFound { id })
    }
}
