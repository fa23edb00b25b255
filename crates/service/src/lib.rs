//! Service layer for the item store.
//! - Keeps the id -> record mapping behind the `ItemRepository` trait.
//! - `ItemService` holds the business rules independent of the web framework.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod items;
