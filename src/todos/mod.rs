//! Daily todo list.
//!
//! `/todos` shows only items dated today in the display zone; everything
//! older (or otherwise dated) is served by `/logs` as the history view.
use crate::schema::todos;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::shared::utils::run_db;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use axum::Router;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = todos)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, AsChangeset)]
#[diesel(table_name = todos)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.completed.is_none()
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = todos)]
struct NewTodo {
    title: String,
    description: Option<String>,
    date: String,
    completed: bool,
}

pub async fn handle_todo_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let today = state.config.gantt.today().to_string();
    let rows = run_db(&state.conn, move |conn| {
        todos::table
            .filter(todos::date.eq(today))
            .select(Todo::as_select())
            .load(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(rows))
}

/// History view: every todo whose date is not today.
pub async fn handle_log_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let today = state.config.gantt.today().to_string();
    let rows = run_db(&state.conn, move |conn| {
        todos::table
            .filter(todos::date.ne(today))
            .select(Todo::as_select())
            .load(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn handle_todo_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    let row = NewTodo {
        title,
        description: payload.description,
        date: state.config.gantt.today().to_string(),
        completed: false,
    };
    let todo = run_db(&state.conn, move |conn| {
        diesel::insert_into(todos::table)
            .values(&row)
            .returning(Todo::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn handle_todo_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, ApiError> {
    let todo = run_db(&state.conn, move |conn| {
        todos::table
            .find(id)
            .select(Todo::as_select())
            .first(conn)
            .optional()?
            .ok_or(ApiError::NotFound("todo"))
    })
    .await?;
    Ok(Json(todo))
}

pub async fn handle_todo_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    if let Some(title) = &payload.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".into()));
        }
    }
    let todo = run_db(&state.conn, move |conn| {
        // An empty changeset is a legal no-op update.
        if !payload.is_empty() {
            let updated = diesel::update(todos::table.find(id))
                .set(&payload)
                .execute(conn)?;
            if updated == 0 {
                return Err(ApiError::NotFound("todo"));
            }
        }
        todos::table
            .find(id)
            .select(Todo::as_select())
            .first(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(todo))
}

pub async fn handle_todo_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    run_db(&state.conn, move |conn| {
        let deleted = diesel::delete(todos::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("todo"));
        }
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn configure_todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(handle_todo_list))
        .route("/todos", post(handle_todo_create))
        .route("/todos/:id", get(handle_todo_get))
        .route("/todos/:id", put(handle_todo_update))
        .route("/todos/:id", delete(handle_todo_delete))
        .route("/logs", get(handle_log_list))
}
