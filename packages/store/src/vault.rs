//! # Session vault — typed access over the persisted keys
//!
//! [`SessionVault`] wraps any [`KeyValueStore`] and exposes the four values
//! this client keeps across restarts:
//!
//! | Key | Contents |
//! |-----|----------|
//! | [`TOKEN_KEY`] | Bearer credential string, stored verbatim |
//! | [`USER_KEY`] | The authenticated user's record, serialized as JSON |
//! | [`THEME_KEY`] | [`Theme`] preference (`"light"` / `"dark"`) |
//! | [`LANGUAGE_KEY`] | [`Language`] preference (`"id"` / `"en"`) |
//!
//! Credential and user record are written together by
//! [`save_session`](SessionVault::save_session) and removed together by
//! [`clear_session`](SessionVault::clear_session); one without the other is
//! treated as no session at all by the session layer. The vault stays
//! generic over the user record type so it does not need to know the wire
//! model.
//!
//! Preference reads are lenient: a missing, unreadable, or unrecognized
//! stored value yields the default rather than an error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::{KeyValueStore, StoreError};
use crate::prefs::{Language, Theme};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";
pub const THEME_KEY: &str = "app_theme";
pub const LANGUAGE_KEY: &str = "user_language";

/// Typed access to the persisted session and preferences.
#[derive(Clone, Debug)]
pub struct SessionVault<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted bearer credential, if any.
    pub async fn credential(&self) -> Result<Option<String>, StoreError> {
        self.store.get(TOKEN_KEY).await
    }

    /// The persisted user record, if present and well-formed.
    pub async fn user<U: DeserializeOwned>(&self) -> Result<Option<U>, StoreError> {
        let Some(raw) = self.store.get(USER_KEY).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persist credential and user record together.
    pub async fn save_session<U: Serialize>(
        &self,
        token: &str,
        user: &U,
    ) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token).await?;
        let raw = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &raw).await
    }

    /// Remove credential and user record together. Idempotent.
    pub async fn clear_session(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_KEY).await
    }

    /// The stored theme preference, defaulting on any failure.
    pub async fn theme(&self) -> Theme {
        match self.store.get(THEME_KEY).await {
            Ok(Some(raw)) => Theme::parse_lenient(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("failed to read theme preference: {e}");
                Theme::default()
            }
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str()).await
    }

    /// The stored language preference, defaulting on any failure.
    pub async fn language(&self) -> Language {
        match self.store.get(LANGUAGE_KEY).await {
            Ok(Some(raw)) => Language::parse_lenient(&raw),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!("failed to read language preference: {e}");
                Language::default()
            }
        }
    }

    pub async fn set_language(&self, language: Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE_KEY, language.as_str()).await
    }
}
