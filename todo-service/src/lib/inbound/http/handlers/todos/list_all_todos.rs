use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TodoData;
use crate::inbound::http::router::AppState;

/// Every user's todos, for administrators.
pub async fn list_all_todos(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TodoData>>, ApiError> {
    let todos = state.todo_service.list_all_todos().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        todos.iter().map(TodoData::from).collect(),
    ))
}
