//! Mood model: the five canonical moods and the persisted log entry.
//!
//! The closed [`Mood`] enum carries labels, display icons and the trend
//! ordinals. The persisted form ([`MoodOption`]) stays open on purpose:
//! a log written by an older build with a label we no longer know must
//! still load — unknown labels degrade to ordinal 0 during aggregation
//! instead of poisoning the whole collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The five canonical moods, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Feliz,
    Neutro,
    Triste,
    Irritado,
    Relaxado,
}

impl Mood {
    /// All options in the order the mood picker shows them.
    pub const ALL: [Mood; 5] = [
        Mood::Feliz,
        Mood::Neutro,
        Mood::Triste,
        Mood::Irritado,
        Mood::Relaxado,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Feliz => "Feliz",
            Mood::Neutro => "Neutro",
            Mood::Triste => "Triste",
            Mood::Irritado => "Irritado",
            Mood::Relaxado => "Relaxado",
        }
    }

    /// Display glyph name. Opaque to the core; the UI layer resolves it.
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Feliz => "emoticon-happy-outline",
            Mood::Neutro => "emoticon-neutral-outline",
            Mood::Triste => "emoticon-sad-outline",
            Mood::Irritado => "emoticon-angry-outline",
            Mood::Relaxado => "emoticon-cool-outline",
        }
    }

    /// Trend ordinal used by the chart series.
    pub fn value(&self) -> u8 {
        match self {
            Mood::Feliz => 5,
            Mood::Relaxado => 4,
            Mood::Neutro => 3,
            Mood::Irritado => 2,
            Mood::Triste => 1,
        }
    }

    /// Resolve a persisted label back to a canonical mood.
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|m| m.label() == label)
    }

    /// The open, persisted representation of this mood.
    pub fn option(&self) -> MoodOption {
        MoodOption {
            label: self.label().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

/// Persisted mood descriptor: label plus an opaque icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOption {
    pub label: String,
    pub icon: String,
}

/// One user-recorded emotional state.
///
/// Entries are prepended to the mood log (newest first) and never
/// mutated or deleted in-app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: MoodOption,
    #[serde(deserialize_with = "deserialize_timestamp_or_now")]
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Record a mood at the current instant.
    pub fn now(mood: Mood) -> Self {
        Self {
            mood: mood.option(),
            timestamp: Utc::now(),
        }
    }

    pub fn at(mood: Mood, timestamp: DateTime<Utc>) -> Self {
        Self {
            mood: mood.option(),
            timestamp,
        }
    }
}

/// Best-effort timestamp recovery: a malformed persisted value falls
/// back to "now" rather than failing the whole collection.
fn deserialize_timestamp_or_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.parse::<DateTime<Utc>>() {
        Ok(ts) => Ok(ts),
        Err(e) => {
            tracing::warn!("Malformed mood timestamp {:?} ({}), falling back to now", raw, e);
            Ok(Utc::now())
        }
    }
}
