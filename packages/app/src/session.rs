//! # Session lifecycle
//!
//! [`SessionManager`] is the one writer of authentication state. It owns the
//! credential/user pair, keeps the [`api::MarketApi`] client's attached
//! credential in step with every transition, and persists the pair through a
//! [`store::SessionVault`] so a restart lands back in the same session.
//!
//! The state machine is small: [`SessionState::Unknown`] until
//! [`restore`](SessionManager::restore) has read the vault exactly once at
//! startup, then [`SessionState::Unauthenticated`] or
//! [`SessionState::Authenticated`]. Persistence is best-effort throughout:
//! a vault that cannot be read means no session (never a crash), and a vault
//! that cannot be written leaves the in-memory session authoritative for the
//! running process.

use api::{ApiError, AuthResponse, MarketApi, RegisterRequest, User};
use store::{KeyValueStore, SessionVault};

/// Authentication state of the running client.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Initial state, before the persisted session has been read.
    Unknown,
    Unauthenticated,
    /// A credential is attached to the client and a user is loaded. The two
    /// are set and cleared together.
    Authenticated { user: User, token: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

/// Owns the session state machine: one writer, many readers.
pub struct SessionManager<A: MarketApi, S: KeyValueStore> {
    api: A,
    vault: SessionVault<S>,
    state: SessionState,
}

impl<A: MarketApi, S: KeyValueStore> SessionManager<A, S> {
    pub fn new(api: A, vault: SessionVault<S>) -> Self {
        Self {
            api,
            vault,
            state: SessionState::Unknown,
        }
    }

    /// Load the persisted session. Runs once at startup and always resolves:
    /// an unreadable vault or a corrupt record fails open to
    /// [`SessionState::Unauthenticated`].
    pub async fn restore(&mut self) -> &SessionState {
        let token = match self.vault.credential().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("session restore: credential unreadable: {e}");
                None
            }
        };
        let user = match self.vault.user::<User>().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("session restore: user record unreadable: {e}");
                None
            }
        };

        self.state = match (token, user) {
            (Some(token), Some(user)) => {
                self.api.set_token(Some(token.clone()));
                SessionState::Authenticated { user, token }
            }
            _ => SessionState::Unauthenticated,
        };
        &self.state
    }

    /// Authenticate with the server and adopt the returned session. On
    /// failure the state and the vault are left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        let auth = self.api.login(username, password).await?;
        self.adopt(auth).await;
        Ok(())
    }

    /// Same contract as [`login`](SessionManager::login), against the
    /// registration endpoint.
    pub async fn register(&mut self, req: &RegisterRequest) -> Result<(), ApiError> {
        let auth = self.api.register(req).await?;
        self.adopt(auth).await;
        Ok(())
    }

    /// Attach the credential to the client before anything else can
    /// dispatch, then persist best-effort, then transition.
    async fn adopt(&mut self, auth: AuthResponse) {
        self.api.set_token(Some(auth.access_token.clone()));
        if let Err(e) = self.vault.save_session(&auth.access_token, &auth.user).await {
            tracing::warn!("session not persisted, staying in-memory only: {e}");
        }
        self.state = SessionState::Authenticated {
            user: auth.user,
            token: auth.access_token,
        };
    }

    /// End the session. Never fails: a vault that cannot be cleared is
    /// logged and ignored, because the in-memory transition is what the
    /// running process acts on.
    pub async fn logout(&mut self) {
        self.api.set_token(None);
        if let Err(e) = self.vault.clear_session().await {
            tracing::warn!("persisted session not cleared: {e}");
        }
        self.state = SessionState::Unauthenticated;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Preference access for the shell (theme, language).
    pub fn vault(&self) -> &SessionVault<S> {
        &self.vault
    }
}
