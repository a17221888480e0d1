use chrono::{FixedOffset, NaiveDate, Utc};
use serde::Deserialize;
use std::env;

/// Application configuration, loaded once at startup from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub gantt: GanttConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Settings for the Gantt window: the display timezone and the holiday feed.
///
/// The display zone is a fixed UTC offset (the deployment targets Asia/Tokyo,
/// which has no DST), so day boundaries are stable year round.
#[derive(Debug, Clone, Deserialize)]
pub struct GanttConfig {
    pub utc_offset_hours: i32,
    pub holiday_url: String,
}

impl GanttConfig {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// Current calendar date in the display zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset()).date_naive()
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "ganttboard.db".to_string()),
            },
            gantt: GanttConfig {
                utc_offset_hours: env::var("GANTT_UTC_OFFSET_HOURS")
                    .unwrap_or_else(|_| "9".to_string())
                    .parse()?,
                holiday_url: env::var("HOLIDAY_URL")
                    .unwrap_or_else(|_| "https://api.national-holidays.jp/all".to_string()),
            },
        })
    }
}
