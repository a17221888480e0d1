//! Gantt window assembly.
//!
//! Serves the weekly board as data: seven styled day buckets plus one row per
//! active assignee with the pixel-percentage geometry of each visible task.
//! The UI renders this verbatim; all date arithmetic lives here.
pub mod grid;
pub mod holidays;
pub mod layout;

use crate::schema::{tasks, users};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::shared::utils::{parse_instant, run_db};
use crate::tasks::Task;
use crate::users::User;
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use diesel::prelude::*;
use grid::DayBucket;
use layout::TaskGeometry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// First day of the window; defaults to today (jump-to-today).
    pub anchor: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttWindowResponse {
    pub anchor: NaiveDate,
    pub prev_anchor: NaiveDate,
    pub next_anchor: NaiveDate,
    pub today: NaiveDate,
    pub buckets: Vec<DayBucket>,
    pub rows: Vec<GanttRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttRow {
    pub assignee: User,
    pub tasks: Vec<PositionedTask>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedTask {
    #[serde(flatten)]
    pub task: Task,
    pub left: f64,
    pub width: f64,
}

/// Geometry for one task on the given window, or `None` when the task has no
/// parseable interval or lies outside the window.
fn position_task(
    task: &Task,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    offset: FixedOffset,
) -> Option<TaskGeometry> {
    let start = parse_instant(task.start_date.as_deref()?, offset)?;
    let end = parse_instant(task.end_date.as_deref()?, offset)?;
    layout::layout_task(start, end, window_start, window_end)
}

pub async fn handle_gantt_window(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<GanttWindowResponse>, ApiError> {
    let offset = state.config.gantt.offset();
    let today = state.config.gantt.today();
    let anchor = query.anchor.unwrap_or(today);

    let buckets = grid::build_window(anchor, today, &state.holidays, grid::WINDOW_DAYS);
    let (window_start, window_end) = grid::window_bounds(anchor, offset);

    let (assignees, all_tasks) = run_db(&state.conn, |conn| {
        let assignees = users::table
            .filter(users::delete_flg.eq(false))
            .select(User::as_select())
            .load(conn)?;
        let all_tasks = tasks::table
            .filter(tasks::delete_flg.eq(false))
            .select(Task::as_select())
            .load::<Task>(conn)?;
        Ok((assignees, all_tasks))
    })
    .await?;

    let rows = assignees
        .into_iter()
        .map(|assignee| {
            let tasks = all_tasks
                .iter()
                .filter(|task| task.assignee_id == assignee.id)
                .filter_map(|task| {
                    position_task(task, window_start, window_end, offset).map(|geom| {
                        PositionedTask {
                            task: task.clone(),
                            left: geom.left,
                            width: geom.width,
                        }
                    })
                })
                .collect();
            GanttRow { assignee, tasks }
        })
        .collect();

    Ok(Json(GanttWindowResponse {
        anchor,
        prev_anchor: grid::prev_anchor(anchor),
        next_anchor: grid::next_anchor(anchor),
        today,
        buckets,
        rows,
    }))
}

pub fn configure_gantt_routes() -> Router<Arc<AppState>> {
    Router::new().route("/gantt/window", get(handle_gantt_window))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(start: Option<&str>, end: Option<&str>) -> Task {
        Task {
            id: 1,
            name: Some("タスク1".into()),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            assignee_id: 1,
            delete_flg: false,
            completed: false,
            last_modified: "2025-11-01T00:00:00Z".into(),
        }
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>, FixedOffset) {
        let offset = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        let anchor = NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date");
        let (start, end) = grid::window_bounds(anchor, offset);
        (start, end, offset)
    }

    #[test]
    fn task_with_missing_dates_gets_no_geometry() {
        let (ws, we, offset) = window();
        assert!(position_task(&task(None, None), ws, we, offset).is_none());
        assert!(position_task(&task(Some("2025-11-04T10:00:00+09:00"), None), ws, we, offset)
            .is_none());
    }

    #[test]
    fn task_with_unparseable_dates_gets_no_geometry() {
        let (ws, we, offset) = window();
        assert!(position_task(&task(Some("soon"), Some("later")), ws, we, offset).is_none());
    }

    #[test]
    fn visible_task_gets_expected_geometry() {
        let (ws, we, offset) = window();
        let geom = position_task(
            &task(
                Some("2025-11-04T10:00:00+09:00"),
                Some("2025-11-04T14:30:00+09:00"),
            ),
            ws,
            we,
            offset,
        )
        .expect("visible");
        assert!((geom.left - 20.238).abs() < 1e-2);
        assert!((geom.width - 2.679).abs() < 1e-2);
    }
}
