use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::todo::errors::TodoIdError;
use crate::domain::todo::errors::TodoTitleError;
use crate::domain::user::models::UserId;

/// To-do item owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: TodoTitle,
    pub completed: bool,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Todo unique identifier value object, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Parse a todo ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, TodoIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(TodoId(id)),
            Ok(id) => Err(TodoIdError::InvalidFormat(id.to_string())),
            Err(e) => Err(TodoIdError::InvalidFormat(e.to_string())),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo title value object.
///
/// Stored trimmed; 1 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: String) -> Result<Self, TodoTitleError> {
        let trimmed = title.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(TodoTitleError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(TodoTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo record before the store assigns an identifier.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub completed: bool,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Command to create a todo for the requesting user.
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: TodoTitle,
    pub completed: bool,
}

/// Command to update an existing todo.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateTodoCommand {
    pub title: Option<TodoTitle>,
    pub completed: Option<bool>,
}
