//! Items module: three-layer architecture (domain, repository, service).
//!
//! The repository owns the id -> record mapping and its locking; the service
//! turns absent ids into `ServiceError::NotFound` and shapes the results.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{IdStrategy, Item, ItemId};
pub use repo::memory::InMemoryItemStore;
pub use repository::ItemRepository;
pub use service::{DynItemService, ItemService};
