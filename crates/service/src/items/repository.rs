use async_trait::async_trait;

use super::domain::{Item, ItemId};
use crate::errors::ServiceError;

/// Storage abstraction for item records.
/// Implementations own their synchronisation: every method is one atomic
/// check-then-act step against the mapping.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, ServiceError>;

    /// Mint an id according to the store's strategy and put `item` under it.
    /// An existing entry with the minted id is overwritten.
    async fn insert_next(&self, item: Item) -> Result<ItemId, ServiceError>;

    /// Replace the value under `id`; returns `false` and leaves the map
    /// untouched when `id` is absent.
    async fn replace(&self, id: ItemId, item: Item) -> Result<bool, ServiceError>;

    /// Remove `id`; returns whether it existed.
    async fn remove(&self, id: ItemId) -> Result<bool, ServiceError>;

    async fn len(&self) -> usize;
}
