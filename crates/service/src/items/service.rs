use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{DeletedItem, Item, ItemId, StoredItem, UpdatedItem};
use super::repository::ItemRepository;
use crate::errors::ServiceError;

/// Item business service independent of web framework
pub struct ItemService<R: ItemRepository + ?Sized> {
    repo: Arc<R>,
}

/// The form the HTTP layer holds: repository behind a trait object.
pub type DynItemService = ItemService<dyn ItemRepository>;

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up one record.
    #[instrument(skip(self))]
    pub async fn get(&self, item_id: ItemId) -> Result<StoredItem, ServiceError> {
        let item = self
            .repo
            .get(item_id)
            .await?
            .ok_or(ServiceError::not_found(item_id))?;
        debug!(item_id, "item_read");
        Ok(StoredItem { item_id, item })
    }

    /// Store a new record under a freshly minted id.
    ///
    /// # Examples
    /// ```
    /// use service::items::{IdStrategy, InMemoryItemStore, ItemService};
    /// let svc = ItemService::new(InMemoryItemStore::new(IdStrategy::CountBased));
    /// let rt = tokio::runtime::Runtime::new().unwrap();
    /// let created = rt.block_on(svc.create(serde_json::json!({"name": "pen"}))).unwrap();
    /// assert_eq!(created.item_id, 1);
    /// ```
    #[instrument(skip(self, item))]
    pub async fn create(&self, item: Item) -> Result<StoredItem, ServiceError> {
        let item_id = self.repo.insert_next(item.clone()).await?;
        let items = self.repo.len().await;
        info!(item_id, items, event = "item_created", "item created");
        Ok(StoredItem { item_id, item })
    }

    /// Replace the whole record under `item_id`; no merging.
    #[instrument(skip(self, item))]
    pub async fn update(&self, item_id: ItemId, item: Item) -> Result<UpdatedItem, ServiceError> {
        if !self.repo.replace(item_id, item.clone()).await? {
            return Err(ServiceError::not_found(item_id));
        }
        info!(item_id, event = "item_updated", "item updated");
        Ok(UpdatedItem { item_id, updated_item: item })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, item_id: ItemId) -> Result<DeletedItem, ServiceError> {
        if !self.repo.remove(item_id).await? {
            return Err(ServiceError::not_found(item_id));
        }
        let items = self.repo.len().await;
        info!(item_id, items, event = "item_deleted", "item deleted");
        Ok(DeletedItem::new(item_id))
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> usize {
        self.repo.len().await
    }
}
