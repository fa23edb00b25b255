use thiserror::Error;

use crate::items::domain::ItemId;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(id: ItemId) -> Self { Self::NotFound(id) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }
}
