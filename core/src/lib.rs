//! Domain core for the todo service.
//!
//! # Overview
//! Holds the `Todo` entity, the create payload, text validation and the
//! error taxonomy. Nothing here performs I/O; the server crate's gateways
//! and handlers build on these types.

pub mod error;
pub mod types;

pub use error::TodoError;
pub use types::{CreateTodo, Todo, TodoText, MAX_TEXT_LEN};
