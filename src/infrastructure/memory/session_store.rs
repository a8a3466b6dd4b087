//! In-memory session token set.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Live session tokens. Sessions end on logout or process exit.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    tokens: RwLock<HashSet<String>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, token: String) -> Result<(), AppError> {
        self.tokens.write().await.insert(token);
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, AppError> {
        Ok(self.tokens.read().await.contains(token))
    }

    async fn remove(&self, token: &str) -> Result<bool, AppError> {
        Ok(self.tokens.write().await.remove(token))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.tokens.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let repo = InMemorySessionRepository::new();

        repo.insert("abc".to_string()).await.unwrap();
        assert!(repo.contains("abc").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        assert!(repo.remove("abc").await.unwrap());
        assert!(!repo.contains("abc").await.unwrap());
        assert!(!repo.remove("abc").await.unwrap());
    }
}
