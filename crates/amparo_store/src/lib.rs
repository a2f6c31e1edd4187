pub mod history;
pub mod memory;
pub mod sqlite;

pub use history::{HistoryStore, InsertOrder, Lifecycle, StoreError};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
