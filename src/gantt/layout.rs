//! Task bar placement on the visible window.
//!
//! Pure interval arithmetic: a task's `[start, end)` is clipped to the
//! window's `[start, end)` and converted to percentage offsets for absolute
//! positioning. Overlapping bars for one assignee are allowed to overlap
//! visually; no collision resolution happens here.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Smallest rendered bar width, as a percentage of the window. Zero-duration
/// tasks are clamped up to this so they stay clickable.
pub const MIN_TASK_WIDTH_PCT: f64 = 0.5;

/// Horizontal placement of one task bar, in percent of the row width.
/// Invariant: `0 <= left` and `left + width <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskGeometry {
    pub left: f64,
    pub width: f64,
}

/// Positions a task interval within the window interval.
///
/// Returns `None` when the task lies entirely outside the window; that is an
/// ordinary "don't render this" outcome, not an error. Intervals with
/// `end < start` are treated as zero-duration at `start`.
pub fn layout_task(
    task_start: DateTime<Utc>,
    task_end: DateTime<Utc>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Option<TaskGeometry> {
    if window_end <= window_start {
        return None;
    }
    if task_start > window_end || task_end < window_start {
        return None;
    }

    let effective_start = task_start.max(window_start);
    let effective_end = task_end.min(window_end);

    let total_minutes = (window_end - window_start).num_seconds() as f64 / 60.0;
    let offset_minutes = (effective_start - window_start).num_seconds() as f64 / 60.0;
    let duration_minutes = ((effective_end - effective_start).num_seconds().max(0)) as f64 / 60.0;

    let mut left = offset_minutes / total_minutes * 100.0;
    let mut width = duration_minutes / total_minutes * 100.0;

    // Keep degenerate bars visible, shifting left if the clamp would push the
    // bar past the right edge.
    if width < MIN_TASK_WIDTH_PCT {
        width = MIN_TASK_WIDTH_PCT;
        if left + width > 100.0 {
            left = 100.0 - width;
        }
    }

    Some(TaskGeometry { left, width })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    const EPS: f64 = 1e-9;

    fn jst(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(9 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("valid datetime")
            .with_timezone(&Utc)
    }

    fn week_window() -> (DateTime<Utc>, DateTime<Utc>) {
        (jst(2025, 11, 3, 0, 0), jst(2025, 11, 10, 0, 0))
    }

    #[test]
    fn mid_week_task_matches_hand_computed_percentages() {
        let (ws, we) = week_window();
        let geom = layout_task(jst(2025, 11, 4, 10, 0), jst(2025, 11, 4, 14, 30), ws, we)
            .expect("visible");
        // left = (24h + 10h) / 168h, width = 4.5h / 168h.
        assert!((geom.left - 34.0 / 168.0 * 100.0).abs() < EPS);
        assert!((geom.width - 4.5 / 168.0 * 100.0).abs() < EPS);
        assert!((geom.left - 20.238).abs() < 1e-2);
        assert!((geom.width - 2.679).abs() < 1e-2);
    }

    #[test]
    fn task_fully_before_window_is_not_visible() {
        let (ws, we) = week_window();
        assert!(layout_task(jst(2025, 10, 30, 9, 0), jst(2025, 11, 1, 0, 0), ws, we).is_none());
    }

    #[test]
    fn task_fully_after_window_is_not_visible() {
        let (ws, we) = week_window();
        assert!(layout_task(jst(2025, 11, 11, 9, 0), jst(2025, 11, 12, 0, 0), ws, we).is_none());
    }

    #[test]
    fn spanning_task_clips_to_full_width() {
        let (ws, we) = week_window();
        let geom = layout_task(jst(2025, 10, 1, 0, 0), jst(2025, 12, 1, 0, 0), ws, we)
            .expect("visible");
        assert!((geom.left - 0.0).abs() < EPS);
        assert!((geom.width - 100.0).abs() < EPS);
    }

    #[test]
    fn zero_duration_task_gets_minimum_width() {
        let (ws, we) = week_window();
        let at = jst(2025, 11, 5, 12, 0);
        let geom = layout_task(at, at, ws, we).expect("visible");
        assert!((geom.width - MIN_TASK_WIDTH_PCT).abs() < EPS);
        assert!(geom.left >= 0.0 && geom.left + geom.width <= 100.0 + EPS);
    }

    #[test]
    fn zero_duration_at_right_edge_is_shifted_inside() {
        let (ws, we) = week_window();
        let geom = layout_task(we, we, ws, we).expect("touching the edge is visible");
        assert!((geom.left + geom.width - 100.0).abs() < EPS);
        assert!((geom.width - MIN_TASK_WIDTH_PCT).abs() < EPS);
    }

    #[test]
    fn inverted_interval_is_treated_as_zero_duration() {
        let (ws, we) = week_window();
        let geom = layout_task(jst(2025, 11, 5, 12, 0), jst(2025, 11, 5, 9, 0), ws, we)
            .expect("visible");
        assert!((geom.width - MIN_TASK_WIDTH_PCT).abs() < EPS);
    }

    #[test]
    fn visible_geometry_stays_within_bounds() {
        let (ws, we) = week_window();
        let cases = [
            (jst(2025, 11, 1, 0, 0), jst(2025, 11, 4, 0, 0)),
            (jst(2025, 11, 9, 0, 0), jst(2025, 11, 20, 0, 0)),
            (jst(2025, 11, 3, 0, 0), jst(2025, 11, 3, 0, 1)),
            (jst(2025, 11, 9, 23, 59), jst(2025, 11, 10, 0, 0)),
        ];
        for (start, end) in cases {
            let geom = layout_task(start, end, ws, we).expect("visible");
            assert!(geom.left >= -EPS, "left {} for {start}", geom.left);
            assert!(
                geom.left + geom.width <= 100.0 + EPS,
                "right edge {} for {start}",
                geom.left + geom.width
            );
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let (ws, we) = week_window();
        let a = layout_task(jst(2025, 11, 4, 10, 0), jst(2025, 11, 4, 14, 30), ws, we);
        let b = layout_task(jst(2025, 11, 4, 10, 0), jst(2025, 11, 4, 14, 30), ws, we);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_window_yields_no_geometry() {
        let at = jst(2025, 11, 3, 0, 0);
        assert!(layout_task(at, at, at, at).is_none());
    }
}
