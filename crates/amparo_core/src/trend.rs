//! Mood trend aggregation: turns the newest-first mood log into a
//! bounded, chronological series a chart can render.
//!
//! The series is renderer-agnostic — drawing belongs to the UI layer.

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::Serialize;

use crate::mood::{Mood, MoodEntry};

/// At most this many of the most recent entries feed the chart.
pub const TREND_WINDOW: usize = 14;

/// Minimum entries before a trend is worth drawing.
pub const MIN_TREND_ENTRIES: usize = 2;

/// Single-letter Portuguese day labels, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// One chart point: mood ordinal plus its instant and weekday tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub value: u8,
    pub timestamp: DateTime<Utc>,
    pub weekday: Weekday,
}

impl TrendPoint {
    /// Axis label for this point's weekday.
    pub fn day_label(&self) -> &'static str {
        DAY_LABELS[self.weekday.num_days_from_sunday() as usize]
    }
}

/// Result of aggregating a mood log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MoodTrend {
    /// Fewer than [`MIN_TREND_ENTRIES`] recorded moods.
    InsufficientData,
    /// Chronological series, oldest first, at most [`TREND_WINDOW`] points.
    Series(Vec<TrendPoint>),
}

/// Aggregate a newest-first mood log into a chronological trend series.
///
/// Takes the [`TREND_WINDOW`] most recent entries, reverses them to
/// chronological order and maps each label to its ordinal. Unknown labels
/// map to 0 rather than failing.
pub fn aggregate(log: &[MoodEntry]) -> MoodTrend {
    aggregate_windowed(log, TREND_WINDOW)
}

/// [`aggregate`] with a caller-chosen window (the `[trend] window` config).
pub fn aggregate_windowed(log: &[MoodEntry], window: usize) -> MoodTrend {
    if log.len() < MIN_TREND_ENTRIES {
        return MoodTrend::InsufficientData;
    }

    let points = log
        .iter()
        .take(window)
        .rev()
        .map(|entry| TrendPoint {
            value: Mood::from_label(&entry.mood.label)
                .map(|m| m.value())
                .unwrap_or(0),
            timestamp: entry.timestamp,
            weekday: entry.timestamp.weekday(),
        })
        .collect();

    MoodTrend::Series(points)
}
