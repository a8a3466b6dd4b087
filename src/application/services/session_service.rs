//! Dashboard session service.

use std::sync::Arc;

use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use tracing::info;

/// Length of a session token in bytes before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Service gating the dashboard behind a login.
///
/// There is no credential backend: a login always succeeds and simply opens a
/// session. The session token is what marks a browser as logged in.
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
}

impl<R: SessionRepository> SessionService<R> {
    /// Creates a new session service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Opens a session and returns its token (64 lowercase hex characters).
    pub async fn login(&self) -> Result<String, AppError> {
        let token = generate_token();
        self.repository.insert(token.clone()).await?;
        info!("session opened");
        Ok(token)
    }

    /// Returns true if `token` belongs to an open session.
    pub async fn is_authenticated(&self, token: &str) -> Result<bool, AppError> {
        self.repository.contains(token).await
    }

    /// Closes the session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if self.repository.remove(token).await? {
            info!("session closed");
        }
        Ok(())
    }

    /// Number of open sessions.
    pub async fn active_sessions(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    hex::encode(bytes)
}
