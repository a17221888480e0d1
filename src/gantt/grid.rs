//! Calendar grid for the Gantt view.
//!
//! Builds the ordered sequence of day buckets for one visible window. The
//! window is a fixed run of consecutive calendar days starting at the anchor;
//! paging moves the anchor by whole windows. Styling precedence is
//! today > holiday > weekday, matching the header colours of the UI.

use crate::gantt::holidays::HolidaySet;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc, Weekday};
use serde::Serialize;

/// Number of days shown at once. Paging always moves by a whole window.
pub const WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStyle {
    Weekday,
    Saturday,
    Sunday,
    Holiday,
    Today,
}

/// One calendar day of the visible window, tagged with its display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub style: DayStyle,
}

/// Builds the buckets for a window of `len` consecutive days starting at
/// `anchor`. `today` is passed in rather than read from the clock so the
/// result is a pure function of its inputs.
pub fn build_window(
    anchor: NaiveDate,
    today: NaiveDate,
    holidays: &HolidaySet,
    len: i64,
) -> Vec<DayBucket> {
    (0..len.max(0))
        .map(|offset| {
            let date = anchor + Duration::days(offset);
            DayBucket {
                date,
                style: day_style(date, today, holidays),
            }
        })
        .collect()
}

fn day_style(date: NaiveDate, today: NaiveDate, holidays: &HolidaySet) -> DayStyle {
    if date == today {
        DayStyle::Today
    } else if holidays.contains(&date) {
        DayStyle::Holiday
    } else {
        match date.weekday() {
            Weekday::Sat => DayStyle::Saturday,
            Weekday::Sun => DayStyle::Sunday,
            _ => DayStyle::Weekday,
        }
    }
}

pub fn next_anchor(anchor: NaiveDate) -> NaiveDate {
    anchor + Duration::days(WINDOW_DAYS)
}

pub fn prev_anchor(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(WINDOW_DAYS)
}

/// UTC instants for the `[start, end)` interval covered by the window: local
/// midnight at the anchor through local midnight `WINDOW_DAYS` later.
pub fn window_bounds(anchor: NaiveDate, offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = anchor.and_time(NaiveTime::MIN);
    // Fixed-offset conversions are never ambiguous.
    let start = midnight
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| DateTime::from_naive_utc_and_offset(midnight, Utc));
    (start, start + Duration::days(WINDOW_DAYS))
}
