//! Session store: the server-asserted identity of the current user.

use tracing::warn;

use crate::api::{ApiClient, ApiError};

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    /// Opaque user id; empty while anonymous.
    pub user_id: String,
    /// Server running with auth disabled.
    pub dev: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Re-derive identity from the server. Anonymous sessions store an
    /// empty id.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let session = api.me().await?;
        self.user_id = session.user_id;
        self.dev = session.dev;
        Ok(())
    }

    /// Log in and re-derive the session. Prior state is untouched on
    /// failure; the caller reports the error and re-boots only on success.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        email: &str,
        passcode: &str,
    ) -> Result<(), ApiError> {
        api.login(email, passcode).await?;
        self.refresh(api).await
    }

    /// Register a new account and re-derive the session.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        email: &str,
        passcode: &str,
    ) -> Result<(), ApiError> {
        api.register(email, passcode).await?;
        self.refresh(api).await
    }

    /// Log out. Failures are swallowed: the caller re-boots either way,
    /// so the UI converges on the server's best-known state.
    pub async fn logout(&mut self, api: &ApiClient) {
        if let Err(err) = api.logout().await {
            warn!("logout failed: {err}");
        }
    }
}
