//! HTTP front end for the todo service.
//!
//! # Overview
//! `app` builds the axum router over any `TodoStore`; `serve` prepares the
//! schema and runs it on a listener. Handlers do shape checks only and leave
//! trimming and text validation to the store.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, Method, StatusCode},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use todo_core::{CreateTodo, Todo};

pub use config::{Config, DbConfig};
pub use error::{ApiError, ErrorBody, ServerError};
pub use store::{MemoryStore, PgStore, TodoStore};

const ENDPOINTS: [(&str, &str); 3] = [
    ("GET /api/todos", "Get all todos"),
    ("POST /api/todos", "Create a new todo"),
    ("DELETE /api/todos/<id>", "Delete a todo"),
];

pub fn app<S>(store: S) -> Router
where
    S: TodoStore + Clone,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/{id}", delete(delete_todo::<S>))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Ensure the schema exists, then serve `app(store)` on `listener`.
pub async fn serve<S>(listener: TcpListener, store: S) -> Result<(), ServerError>
where
    S: TodoStore + Clone,
{
    store.initialize_schema().await.map_err(ServerError::Schema)?;

    let addr = listener.local_addr()?;
    info!(%addr, "todo API listening");
    for (route, description) in ENDPOINTS {
        info!("  {route:<24} {description}");
    }

    axum::serve(listener, app(store)).await?;
    Ok(())
}

async fn index() -> Json<Value> {
    let endpoints: serde_json::Map<String, Value> = ENDPOINTS
        .iter()
        .map(|(route, description)| (route.to_string(), json!(description)))
        .collect();
    Json(json!({
        "message": "Todo List REST API",
        "endpoints": endpoints,
    }))
}

async fn list_todos<S: TodoStore + Clone>(
    State(store): State<S>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list_todos().await?;
    Ok(Json(todos))
}

async fn create_todo<S: TodoStore + Clone>(
    State(store): State<S>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = match payload {
        Ok(Json(CreateTodo { text: Some(text) })) => text,
        Ok(_) => return Err(ApiError::MissingText),
        Err(rejection) => {
            debug!(%rejection, "unusable create payload");
            return Err(ApiError::MissingText);
        }
    };
    let todo = store.create_todo(&text).await?;
    info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo<S: TodoStore + Clone>(
    State(store): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    store.delete_todo(id).await?;
    info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
