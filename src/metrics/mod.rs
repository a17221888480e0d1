//! Reporting endpoints.
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::shared::utils::run_db;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};
use serde::Serialize;
use std::sync::Arc;

/// Summed duration of completed tasks per tracked user. Only users whose
/// name starts with `_` take part in time tracking; everyone else is a plain
/// display row on the board.
#[derive(Debug, QueryableByName, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTimeRow {
    #[diesel(sql_type = Nullable<Text>)]
    pub name: Option<String>,
    #[diesel(sql_type = BigInt)]
    #[serde(rename = "completedTime")]
    pub completed_minutes: i64,
}

pub async fn handle_completed_task_time_by_user(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CompletedTimeRow>>, ApiError> {
    let rows = run_db(&state.conn, |conn| {
        // strftime('%s', ...) understands the stored RFC 3339 text; rows with
        // missing or unparseable dates fall out of the SUM as NULL.
        diesel::sql_query(
            "SELECT u.name AS name, \
                    CAST(COALESCE(SUM((strftime('%s', t.end_date) - strftime('%s', t.start_date)) / 60), 0) AS INTEGER) AS completed_minutes \
             FROM users u \
             LEFT JOIN tasks t \
               ON t.assignee_id = u.id AND t.completed = 1 AND t.delete_flg = 0 \
             WHERE u.name LIKE '\\_%' ESCAPE '\\' AND u.delete_flg = 0 \
             GROUP BY u.name",
        )
        .load::<CompletedTimeRow>(conn)
        .map_err(ApiError::from)
    })
    .await?;
    Ok(Json(rows))
}

pub fn configure_metrics_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/metrics/completed_task_time_by_user",
        get(handle_completed_task_time_by_user),
    )
}
