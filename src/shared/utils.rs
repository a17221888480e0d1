use crate::shared::error::ApiError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub fn create_conn(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Runs a blocking diesel closure on a pooled connection without stalling the
/// async runtime.
pub async fn run_db<T, F>(pool: &DbPool, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await?
}

/// RFC 3339 UTC timestamp used for the `last_modified` columns.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a stored or submitted timestamp into a UTC instant.
///
/// Accepts RFC 3339 (the canonical form) and, for leniency with hand-entered
/// values, a bare `YYYY-MM-DDTHH:MM:SS` interpreted in the display zone.
pub fn parse_instant(value: &str, display_offset: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|naive| naive.and_local_timezone(display_offset).single())
        .map(|dt| dt.with_timezone(&Utc))
}
