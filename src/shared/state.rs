use crate::config::AppConfig;
use crate::gantt::holidays::HolidaySet;
use crate::shared::utils::DbPool;

/// Shared handler state. Holidays are fetched once at startup; an empty set
/// simply means weekday/weekend styling only.
#[derive(Clone)]
pub struct AppState {
    pub conn: DbPool,
    pub config: AppConfig,
    pub holidays: HolidaySet,
}
