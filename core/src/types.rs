//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the persisted row and the JSON wire shape at the same time.
//! Incoming text only reaches storage as a `TodoText`, which can only be
//! built through `TodoText::parse`, so every gateway receives input that has
//! already been trimmed and length-checked.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Maximum length of a todo's text, in characters, after trimming.
pub const MAX_TEXT_LEN: usize = 200;

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub text: String,
}

/// Request payload for creating a new todo.
///
/// `text` is optional at the serde level so a missing field can be reported
/// as its own error instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
}

/// Todo text that has been trimmed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
    /// Trim `raw` and check it is non-empty and at most `MAX_TEXT_LEN` chars.
    pub fn parse(raw: &str) -> Result<Self, TodoError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoError::validation("Text is required"));
        }
        if trimmed.chars().count() > MAX_TEXT_LEN {
            return Err(TodoError::validation("Text too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
