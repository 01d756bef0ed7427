use async_trait::async_trait;

// ============================================================================
// Repository Contract
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Stored {entity} {id} is invalid: {reason}")]
    Corrupt {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn corrupt(entity: &'static str, id: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::Corrupt {
            entity,
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Persistence contract shared by every aggregate.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when no row matches `id`.
    async fn find(&self, id: &str) -> Result<T, RepositoryError>;

    /// Storage-native order; callers must not rely on it.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}
