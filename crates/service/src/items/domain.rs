use serde::Serialize;

/// Integer key of a stored record.
pub type ItemId = i64;

/// Records are schemaless JSON documents; nothing about their shape is checked.
pub type Item = serde_json::Value;

/// How a store mints ids for newly created items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `len + 1` at creation time. After a delete this can hand out an id
    /// that is still in use, and the create overwrites that entry.
    #[default]
    CountBased,
    /// Counter starting at 1 that never hands out the same id twice.
    Monotonic,
}

/// Result of a read or a create: `{"item_id": .., "item": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredItem {
    pub item_id: ItemId,
    pub item: Item,
}

/// Result of a successful update: `{"item_id": .., "updated_item": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedItem {
    pub item_id: ItemId,
    pub updated_item: Item,
}

/// Result of a successful delete: `{"message": "Item deleted", "item_id": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedItem {
    pub message: &'static str,
    pub item_id: ItemId,
}

impl DeletedItem {
    pub const MESSAGE: &'static str = "Item deleted";

    pub fn new(item_id: ItemId) -> Self {
        Self { message: Self::MESSAGE, item_id }
    }
}
