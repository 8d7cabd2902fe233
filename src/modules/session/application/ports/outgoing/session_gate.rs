use async_trait::async_trait;

/// The display identity carried by an admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionGateError {
    #[error("session store error: {0}")]
    StoreError(String),
}

/// Boundary to the external authentication collaborator.
///
/// The only contract this service has with auth: resolve a session token to
/// "authenticated or not" plus a display identity. Credential checking,
/// hashing and token issuance all live outside this repository.
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// Returns the session's user when `token` names an unexpired session,
    /// `None` otherwise.
    async fn current_session(&self, token: &str) -> Result<Option<SessionUser>, SessionGateError>;
}
