use thiserror::Error;

/// Errors surfaced by [`crate::MarketApi`] calls.
///
/// Every failure is meant to be caught at the triggering user action and
/// turned into a notice; nothing here is retried automatically and nothing
/// should escalate past the screen that observed it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or registration was rejected. Carries the server-provided
    /// message when one exists, otherwise a generic fallback. The session
    /// is unaffected.
    #[error("{message}")]
    Auth { message: String },

    /// Any other transport or server failure. `status` is present when a
    /// response arrived at all.
    #[error("request failed: {message}")]
    Request {
        status: Option<u16>,
        message: String,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
