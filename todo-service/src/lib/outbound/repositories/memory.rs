use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local credential store.
///
/// Username uniqueness is enforced through the entry API of the username
/// index, so concurrent creates of one name admit exactly one.
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    usernames: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            usernames: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        match self.usernames.entry(user.username.as_str().to_string()) {
            Entry::Occupied(_) => Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let created = User {
                    id: UserId(id),
                    username: user.username,
                    password_hash: user.password_hash,
                    role: user.role,
                    created_at: user.created_at,
                };
                self.users.insert(id, created.clone());
                slot.insert(id);
                Ok(created)
            }
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.get(&id.0).map(|user| user.clone()))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let Some(id) = self.usernames.get(username.as_str()).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|user| user.clone()))
    }

    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let mut user = self
            .users
            .get_mut(&id.0)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

/// Process-local todo store.
pub struct InMemoryTodoRepository {
    todos: DashMap<i64, Todo>,
    next_id: AtomicI64,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn sorted(mut todos: Vec<Todo>) -> Vec<Todo> {
        todos.sort_by_key(|todo| todo.id);
        todos
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Todo {
            id: TodoId(id),
            title: todo.title,
            completed: todo.completed,
            user_id: todo.user_id,
            created_at: todo.created_at,
        };
        self.todos.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        Ok(self.todos.get(&id.0).map(|todo| todo.clone()))
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        let todos = self
            .todos
            .iter()
            .filter(|todo| todo.user_id == owner)
            .map(|todo| todo.clone())
            .collect();
        Ok(Self::sorted(todos))
    }

    async fn list_all(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.iter().map(|todo| todo.clone()).collect();
        Ok(Self::sorted(todos))
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut stored = self
            .todos
            .get_mut(&todo.id.0)
            .ok_or(TodoError::NotFound(todo.id))?;
        *stored = todo.clone();
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        self.todos
            .remove(&id.0)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}
