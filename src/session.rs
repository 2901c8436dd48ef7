use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

use crate::errors::ClientError;

/// Persistence for the session token between runs
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, ClientError>;
    async fn save(&self, token: &str) -> Result<(), ClientError>;
    async fn clear(&self) -> Result<(), ClientError>;
}

/// Keeps the token in a plain file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, ClientError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &str) -> Result<(), ClientError> {
        if token.is_empty() {
            return Err(ClientError::TokenStore("refusing to save an empty token".to_string()));
        }
        tokio::fs::write(&self.path, token).await?;
        debug!("Saved session token to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, ClientError> {
        self.token
            .lock()
            .map_err(|_| ClientError::TokenStore("token lock poisoned".to_string()))
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self.lock()?.clone())
    }

    async fn save(&self, token: &str) -> Result<(), ClientError> {
        if token.is_empty() {
            return Err(ClientError::TokenStore("refusing to save an empty token".to_string()));
        }
        *self.lock()? = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save("jwt-value").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("jwt-value".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_ignores_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        tokio::fs::write(&path, "  \n").await.unwrap();

        let store = FileTokenStore::new(path);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();

        tokio_test::block_on(async {
            assert!(store.save("").await.is_err());
            store.save("abc").await.unwrap();
            assert_eq!(store.load().await.unwrap(), Some("abc".to_string()));
            store.clear().await.unwrap();
            assert_eq!(store.load().await.unwrap(), None);
        });
    }
}
