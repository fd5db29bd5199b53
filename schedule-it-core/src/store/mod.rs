//! Persistence.
//!
//! The substrate is a plain key-value blob store. `EventStore` keeps the
//! whole event collection under a single key and is the only thing that
//! reads or writes it.

mod events;
mod file;
mod memory;

pub use events::{EVENTS_KEY, EventStore};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;

/// A persistent string-to-string store.
pub trait KeyValueStore {
    /// Read the blob stored under `key`. Missing or unreadable keys are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key` in a single write.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
