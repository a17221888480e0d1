//! Assignee (user) CRUD.
//!
//! Assignees are soft-deleted through `PUT` with `deleteFlg: true`; `DELETE`
//! removes the row outright. Tasks referencing a soft-deleted assignee stop
//! appearing in the task list and the Gantt window but stay in storage.
use crate::schema::users;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::shared::utils::{now_rfc3339, run_db};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use axum::Router;
use diesel::prelude::*;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = users)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub delete_flg: bool,
    pub last_modified: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, AsChangeset)]
#[diesel(table_name = users)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub delete_flg: Option<bool>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
struct NewUser {
    name: Option<String>,
    delete_flg: bool,
    last_modified: String,
}

pub async fn handle_user_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let rows = run_db(&state.conn, |conn| {
        users::table
            .select(User::as_select())
            .load(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn handle_user_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let row = NewUser {
        name: payload.name,
        delete_flg: false,
        last_modified: now_rfc3339(),
    };
    let user = run_db(&state.conn, move |conn| {
        diesel::insert_into(users::table)
            .values(&row)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    })
    .await?;
    info!("created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn handle_user_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = run_db(&state.conn, move |conn| {
        let updated = diesel::update(users::table.find(id))
            .set((&payload, users::last_modified.eq(now_rfc3339())))
            .execute(conn)?;
        if updated == 0 {
            return Err(ApiError::NotFound("user"));
        }
        users::table
            .find(id)
            .select(User::as_select())
            .first(conn)
            .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(user))
}

pub async fn handle_user_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    run_db(&state.conn, move |conn| {
        let deleted = diesel::delete(users::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("user"));
        }
        Ok(())
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn configure_user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user", get(handle_user_list))
        .route("/user", post(handle_user_create))
        .route("/user/:id", put(handle_user_update))
        .route("/user/:id", delete(handle_user_delete))
}
