pub mod kv;
pub mod prefs;
pub mod vault;

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, StoreError};
pub use memory::MemoryStore;
pub use prefs::{Language, Theme};
pub use vault::SessionVault;
