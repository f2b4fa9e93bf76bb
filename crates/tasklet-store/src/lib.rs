//! # tasklet-store
//!
//! Task state management for Tasklet.
//!
//! [`TaskStore`] owns the authoritative task list, the current filter and the
//! theme preference. Every mutation writes the whole collection through a
//! [`PersistenceGateway`], which maps tasks and theme onto two keys of a
//! [`KeyValueStore`] medium (in memory, or one file per key on disk).

pub mod error;
pub mod gateway;
pub mod medium;
pub mod store;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use gateway::{PersistenceGateway, TASKS_KEY, THEME_KEY};
pub use medium::{FileStore, KeyValueStore, MemoryStore};
pub use store::TaskStore;
