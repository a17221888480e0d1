//! Types for the tasks module.
use crate::schema::tasks;
use crate::shared::error::ApiError;
use crate::shared::utils::parse_instant;
use chrono::FixedOffset;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One scheduled task bar. Timestamps are stored as RFC 3339 text; `NULL`
/// dates are legal and simply keep the task off the Gantt window.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = tasks)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assignee_id: i32,
    pub delete_flg: bool,
    pub completed: bool,
    pub last_modified: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assignee_id: i32,
    #[serde(default)]
    pub delete_flg: bool,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, AsChangeset)]
#[diesel(table_name = tasks)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assignee_id: Option<i32>,
    pub delete_flg: Option<bool>,
    pub completed: Option<bool>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assignee_id: i32,
    pub delete_flg: bool,
    pub completed: bool,
    pub last_modified: String,
}

impl CreateTaskRequest {
    /// Required-field checks, done before any database work.
    pub fn validate(&self, offset: FixedOffset) -> Result<String, ApiError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::Validation("name is required".into()))?;
        check_interval(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            offset,
        )?;
        Ok(name.to_string())
    }
}

impl UpdateTaskRequest {
    pub fn validate(&self, offset: FixedOffset) -> Result<(), ApiError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::Validation("name must not be empty".into()));
            }
        }
        check_interval(self.start_date.as_deref(), self.end_date.as_deref(), offset)
    }
}

fn check_interval(
    start: Option<&str>,
    end: Option<&str>,
    offset: FixedOffset,
) -> Result<(), ApiError> {
    let start = start
        .map(|s| {
            parse_instant(s, offset)
                .ok_or_else(|| ApiError::Validation("startDate must be a valid timestamp".into()))
        })
        .transpose()?;
    let end = end
        .map(|s| {
            parse_instant(s, offset)
                .ok_or_else(|| ApiError::Validation("endDate must be a valid timestamp".into()))
        })
        .transpose()?;
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ApiError::Validation(
                "endDate must not be before startDate".into(),
            ));
        }
    }
    Ok(())
}
