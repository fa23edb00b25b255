use std::sync::Arc;

use axum::http::StatusCode;
use configs::AppConfig;
use service::errors::ServiceError;
use service::items::{DynItemService, IdStrategy, InMemoryItemStore, ItemRepository, ItemService};

use crate::errors::{ApiError, StartupError};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub items: Arc<DynItemService>,
    /// Status paired with the not-found body (200 unless configured otherwise).
    pub not_found_status: StatusCode,
}

fn id_strategy(setting: configs::IdStrategy) -> IdStrategy {
    match setting {
        configs::IdStrategy::CountBased => IdStrategy::CountBased,
        configs::IdStrategy::Monotonic => IdStrategy::Monotonic,
    }
}

impl ServerState {
    pub fn new(repo: Arc<dyn ItemRepository>, not_found_status: StatusCode) -> Self {
        Self {
            items: Arc::new(ItemService::new(repo)),
            not_found_status,
        }
    }

    /// Fresh in-memory store wired according to `cfg`. The not-found status
    /// is checked here too, so callers that skip config validation cannot
    /// serve missing items with an arbitrary code.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, StartupError> {
        cfg.server
            .check_not_found_status()
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        let status = StatusCode::from_u16(cfg.server.not_found_status)
            .map_err(|e| StartupError::InvalidConfig(format!("server.not_found_status: {e}")))?;
        let repo: Arc<dyn ItemRepository> = InMemoryItemStore::new(id_strategy(cfg.store.id_strategy));
        Ok(Self::new(repo, status))
    }

    pub fn api_error(&self, err: ServiceError) -> ApiError {
        ApiError::from_service(err, self.not_found_status)
    }
}
