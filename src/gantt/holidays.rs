//! Client for the external national-holiday feed.
//!
//! The feed is fetched once at startup. Any failure degrades to an empty set
//! so the grid still renders with plain weekday styling; there is no retry.

use chrono::NaiveDate;
use log::{error, warn};
use serde::Deserialize;
use std::collections::HashSet;

pub type HolidaySet = HashSet<NaiveDate>;

#[derive(Debug, Deserialize)]
struct HolidayRecord {
    date: String,
}

pub async fn fetch_holidays(client: &reqwest::Client, url: &str) -> HolidaySet {
    let records = match request_holidays(client, url).await {
        Ok(records) => records,
        Err(e) => {
            error!("failed to fetch holidays from {url}: {e}");
            return HolidaySet::new();
        }
    };

    records
        .into_iter()
        .filter_map(|record| match NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("skipping malformed holiday date {:?}", record.date);
                None
            }
        })
        .collect()
}

async fn request_holidays(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<HolidayRecord>, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<HolidayRecord>>()
        .await
}
