//! HTTP handlers for the task API.
//!
//! Route shapes follow the original UI contract: the collection lives at
//! `/task`, item operations at `/task/update/{id}`.
use crate::schema::{tasks, users};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::shared::utils::{now_rfc3339, run_db};
use crate::tasks::types::{CreateTaskRequest, NewTask, Task, UpdateTaskRequest};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use axum::Router;
use diesel::prelude::*;
use log::info;
use std::sync::Arc;

/// Active tasks of active users; soft-deleted rows on either side drop out.
pub async fn handle_task_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = run_db(&state.conn, |conn| {
        tasks::table
            .inner_join(users::table)
            .filter(tasks::delete_flg.eq(false))
            .filter(users::delete_flg.eq(false))
            .select(Task::as_select())
            .load(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn handle_task_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let name = payload.validate(state.config.gantt.offset())?;
    let row = NewTask {
        name,
        start_date: payload.start_date,
        end_date: payload.end_date,
        assignee_id: payload.assignee_id,
        delete_flg: payload.delete_flg,
        completed: payload.completed,
        last_modified: now_rfc3339(),
    };
    let task = run_db(&state.conn, move |conn| {
        diesel::insert_into(tasks::table)
            .values(&row)
            .returning(Task::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    })
    .await?;
    info!("created task {} for assignee {}", task.id, task.assignee_id);
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn handle_task_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, ApiError> {
    let task = run_db(&state.conn, move |conn| {
        tasks::table
            .find(id)
            .select(Task::as_select())
            .first(conn)
            .optional()?
            .ok_or(ApiError::NotFound("task"))
    })
    .await?;
    Ok(Json(task))
}

/// Applies only the supplied fields, refreshes `last_modified`, and returns
/// the row as stored afterwards.
pub async fn handle_task_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    payload.validate(state.config.gantt.offset())?;
    let task = run_db(&state.conn, move |conn| {
        let updated = diesel::update(tasks::table.find(id))
            .set((&payload, tasks::last_modified.eq(now_rfc3339())))
            .execute(conn)?;
        if updated == 0 {
            return Err(ApiError::NotFound("task"));
        }
        tasks::table
            .find(id)
            .select(Task::as_select())
            .first(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(task))
}

/// Hard delete. Soft deletion goes through `PUT` with `deleteFlg: true`.
pub async fn handle_task_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    run_db(&state.conn, move |conn| {
        let deleted = diesel::delete(tasks::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("task"));
        }
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Configure task routes for the axum router.
pub fn configure_task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/task", get(handle_task_list))
        .route("/task", post(handle_task_create))
        .route("/task/update/:id", get(handle_task_get))
        .route("/task/update/:id", put(handle_task_update))
        .route("/task/update/:id", delete(handle_task_delete))
}
