pub mod config;
pub mod message;
pub mod mood;
pub mod trend;

pub use config::AmparoConfig;
pub use message::ChatMessage;
pub use mood::{Mood, MoodEntry, MoodOption};
pub use trend::{aggregate, aggregate_windowed, MoodTrend, TrendPoint};

use async_trait::async_trait;

/// Storage key for the persisted chat transcript.
pub const TRANSCRIPT_KEY: &str = "chatMessages";
/// Storage key for the persisted mood log.
pub const MOOD_LOG_KEY: &str = "moodHistory";

/// Asynchronous key-value storage boundary.
///
/// Values are whole serialized collections; every write replaces the
/// previous value under its key. Backends must tolerate concurrent reads
/// but may assume a single logical writer per key.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
