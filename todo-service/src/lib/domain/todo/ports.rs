use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
///
/// Every per-item operation is scoped to `owner`; rows of other users behave
/// as if they did not exist.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(&self, owner: UserId, command: CreateTodoCommand)
        -> Result<Todo, TodoError>;

    /// List the todos of `owner`, oldest first.
    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// List every todo of every user, oldest first.
    async fn list_all_todos(&self) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_todo(&self, owner: UserId, id: TodoId) -> Result<Todo, TodoError>;

    /// Apply the provided fields of `command`.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_todo(
        &self,
        owner: UserId,
        id: TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, owner: UserId, id: TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for todos.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist new todo to storage, assigning its identifier.
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;

    /// Retrieve todo by identifier regardless of owner.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    async fn list_all(&self) -> Result<Vec<Todo>, TodoError>;

    /// Overwrite title and completion flag of an existing todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
