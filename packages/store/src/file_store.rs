//! # Filesystem-backed store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each
//! value as one file per key under a base directory. It is what keeps the
//! session and preferences alive across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── auth_token       # bearer credential string
//! ├── auth_user        # serialized user record (JSON)
//! ├── app_theme        # "light" | "dark"
//! └── user_language    # "id" | "en"
//! ```
//!
//! ## Platform data directories
//!
//! Use [`FileStore::in_data_dir`] to obtain a platform-appropriate base via
//! [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/lokatani/` |
//! | Linux | `~/.local/share/lokatani/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\lokatani\` |

use std::path::PathBuf;

use crate::kv::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore, one file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Open a store under the platform data directory. Returns `None` when
    /// the platform has no data directory (callers fall back to
    /// [`crate::MemoryStore`]).
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("lokatani")))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
