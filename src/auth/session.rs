//! The signed-in dashboard user.

use chrono::{DateTime, Utc};

/// The authenticated user on whose behalf the backend is called.
///
/// A session is created by the host application after login and handed to
/// the clients explicitly. The bearer token authenticates every request;
/// the backend resolves `/users/preferences/...` routes from it, so
/// `user_id` is informational.
///
/// # Example
///
/// ```rust
/// use catalog_ops::Session;
///
/// let session = Session::new("session-id", Some("user-1".to_string()), "access-token", None);
///
/// assert!(session.is_active());
/// assert_eq!(session.authorization().as_deref(), Some("Bearer access-token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Session identifier assigned by the host application.
    pub id: String,

    /// The signed-in user, when known.
    pub user_id: Option<String>,

    /// Bearer token for the dashboard API.
    pub access_token: String,

    /// Expiry of the token, if it has one.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: Option<String>,
        access_token: impl Into<String>,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id,
            access_token: access_token.into(),
            expires,
        }
    }

    /// Returns `true` once the expiry has passed. Sessions without an expiry
    /// never expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|at| at < Utc::now())
    }

    /// Returns `true` if the session has a token that has not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }

    /// The `Authorization` header value, or `None` without a token.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        (!self.access_token.is_empty()).then(|| format!("Bearer {}", self.access_token))
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
