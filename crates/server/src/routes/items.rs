use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};
use service::items::domain::{DeletedItem, ItemId, StoredItem, UpdatedItem};

use crate::errors::ApiError;
use crate::state::ServerState;

/// Request bodies must be JSON objects; their contents are stored untouched.
type ItemBody = Json<Map<String, Value>>;

/// GET /items/:item_id
pub async fn read_item(
    State(state): State<ServerState>,
    Path(item_id): Path<ItemId>,
) -> Result<Json<StoredItem>, ApiError> {
    state
        .items
        .get(item_id)
        .await
        .map(Json)
        .map_err(|e| state.api_error(e))
}

/// POST /items/
pub async fn create_item(
    State(state): State<ServerState>,
    Json(body): ItemBody,
) -> Result<Json<StoredItem>, ApiError> {
    state
        .items
        .create(Value::Object(body))
        .await
        .map(Json)
        .map_err(|e| state.api_error(e))
}

/// PUT /items/:item_id
pub async fn update_item(
    State(state): State<ServerState>,
    Path(item_id): Path<ItemId>,
    Json(body): ItemBody,
) -> Result<Json<UpdatedItem>, ApiError> {
    state
        .items
        .update(item_id, Value::Object(body))
        .await
        .map(Json)
        .map_err(|e| state.api_error(e))
}

/// DELETE /items/:item_id
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(item_id): Path<ItemId>,
) -> Result<Json<DeletedItem>, ApiError> {
    state
        .items
        .delete(item_id)
        .await
        .map(Json)
        .map_err(|e| state.api_error(e))
}
