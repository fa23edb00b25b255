use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::items::domain::{IdStrategy, Item, ItemId};
use crate::items::repository::ItemRepository;

/// Process-local item map. Nothing is persisted; the contents live as long
/// as the store does.
pub struct InMemoryItemStore {
    inner: RwLock<StoreState>,
    strategy: IdStrategy,
}

struct StoreState {
    items: HashMap<ItemId, Item>,
    // only advanced under IdStrategy::Monotonic
    next_id: ItemId,
}

impl StoreState {
    fn mint_id(&mut self, strategy: IdStrategy) -> ItemId {
        match strategy {
            IdStrategy::CountBased => self.items.len() as ItemId + 1,
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }
}

impl InMemoryItemStore {
    /// Create an empty store that mints ids with `strategy`.
    pub fn new(strategy: IdStrategy) -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(StoreState { items: HashMap::new(), next_id: 1 }),
            strategy,
        })
    }

    /// Snapshot of all entries ordered by id.
    #[cfg(test)]
    pub(crate) async fn snapshot(&self) -> Vec<(ItemId, Item)> {
        let state = self.inner.read().await;
        let mut entries: Vec<_> = state.items.iter().map(|(k, v)| (*k, v.clone())).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemStore {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn insert_next(&self, item: Item) -> Result<ItemId, ServiceError> {
        let mut state = self.inner.write().await;
        let id = state.mint_id(self.strategy);
        if state.items.insert(id, item).is_some() {
            debug!(item_id = id, "minted id collided with a live entry; previous value overwritten");
        }
        Ok(id)
    }

    async fn replace(&self, id: ItemId, item: Item) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        match state.items.get_mut(&id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: ItemId) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        Ok(state.items.remove(&id).is_some())
    }

    async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_basic_crud() -> Result<(), anyhow::Error> {
        let store = InMemoryItemStore::new(IdStrategy::CountBased);

        // initially empty
        assert_eq!(store.len().await, 0);
        assert_eq!(store.get(1).await?, None);

        let id = store.insert_next(json!({"name": "pen"})).await?;
        assert_eq!(id, 1);
        assert_eq!(store.get(1).await?, Some(json!({"name": "pen"})));

        // replace is a full overwrite
        assert!(store.replace(1, json!({"colour": "red"})).await?);
        assert_eq!(store.get(1).await?, Some(json!({"colour": "red"})));

        // replace on an absent id changes nothing
        assert!(!store.replace(7, json!({})).await?);
        assert_eq!(store.len().await, 1);

        assert!(store.remove(1).await?);
        assert!(!store.remove(1).await?);
        assert_eq!(store.len().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn count_based_ids_collide_after_delete() -> Result<(), anyhow::Error> {
        let store = InMemoryItemStore::new(IdStrategy::CountBased);
        assert_eq!(store.insert_next(json!({"n": 1})).await?, 1);
        assert_eq!(store.insert_next(json!({"n": 2})).await?, 2);
        assert!(store.remove(1).await?);

        // len is 1 again, so the next id is 2 and item 2 is overwritten
        assert_eq!(store.insert_next(json!({"n": 3})).await?, 2);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.snapshot().await, vec![(2, json!({"n": 3}))]);
        Ok(())
    }

    #[tokio::test]
    async fn monotonic_ids_are_never_reused() -> Result<(), anyhow::Error> {
        let store = InMemoryItemStore::new(IdStrategy::Monotonic);
        assert_eq!(store.insert_next(json!({"n": 1})).await?, 1);
        assert_eq!(store.insert_next(json!({"n": 2})).await?, 2);
        assert!(store.remove(1).await?);
        assert!(store.remove(2).await?);

        assert_eq!(store.insert_next(json!({"n": 3})).await?, 3);
        assert_eq!(store.snapshot().await, vec![(3, json!({"n": 3}))]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() -> Result<(), anyhow::Error> {
        let store = InMemoryItemStore::new(IdStrategy::CountBased);
        let mut handles = Vec::new();
        for n in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.insert_next(json!({"n": n})).await }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await??);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=64).collect::<Vec<ItemId>>());
        assert_eq!(store.len().await, 64);
        Ok(())
    }
}
