use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    /// Load a todo visible to `owner`.
    async fn owned_todo(&self, owner: UserId, id: TodoId) -> Result<Todo, TodoError> {
        match self.repository.find_by_id(id).await? {
            Some(todo) if todo.is_owned_by(owner) => Ok(todo),
            Some(_) => {
                tracing::debug!(todo_id = %id, user_id = %owner, "Todo belongs to another user");
                Err(TodoError::NotFound(id))
            }
            None => Err(TodoError::NotFound(id)),
        }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        owner: UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let todo = NewTodo {
            title: command.title,
            completed: command.completed,
            user_id: owner,
            created_at: Utc::now(),
        };

        let created = self.repository.create(todo).await?;

        tracing::info!(todo_id = %created.id, user_id = %owner, "Todo created");

        Ok(created)
    }

    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_by_owner(owner).await
    }

    async fn list_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_all().await
    }

    async fn get_todo(&self, owner: UserId, id: TodoId) -> Result<Todo, TodoError> {
        self.owned_todo(owner, id).await
    }

    async fn update_todo(
        &self,
        owner: UserId,
        id: TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let mut todo = self.owned_todo(owner, id).await?;

        if let Some(title) = command.title {
            todo.title = title;
        }
        if let Some(completed) = command.completed {
            todo.completed = completed;
        }

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, owner: UserId, id: TodoId) -> Result<(), TodoError> {
        let todo = self.owned_todo(owner, id).await?;
        self.repository.delete(todo.id).await?;

        tracing::info!(todo_id = %id, user_id = %owner, "Todo deleted");

        Ok(())
    }
}
