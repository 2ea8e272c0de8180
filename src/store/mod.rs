//! Store backends for the task and meeting collections.
//!
//! `Remote` mirrors an external document store through a store binary;
//! `Memory` is the non-persisted variant with in-process collections.
//! Both assign opaque string ids.

mod memory;
mod remote;

pub use memory::MemoryStore;
pub use remote::RemoteStore;

use teamtrack_core::TrackerResult;
use teamtrack_core::protocol::{Collection, Document};

use crate::config::GlobalConfig;

/// A document store backend.
pub enum Backend {
    Memory(MemoryStore),
    Remote(RemoteStore),
}

impl Backend {
    pub fn from_config(config: &GlobalConfig) -> Backend {
        match config.store.as_str() {
            "memory" => Backend::Memory(MemoryStore::new()),
            name => Backend::Remote(RemoteStore::new(name, config.params_json())),
        }
    }

    /// Create a document; returns the store-assigned id.
    pub async fn create(
        &mut self,
        collection: Collection,
        fields: serde_json::Value,
    ) -> TrackerResult<String> {
        match self {
            Backend::Memory(store) => Ok(store.create(collection, fields)),
            Backend::Remote(store) => store.create(collection, fields).await,
        }
    }

    /// List every document in a collection.
    pub async fn list(&mut self, collection: Collection) -> TrackerResult<Vec<Document>> {
        match self {
            Backend::Memory(store) => Ok(store.list(collection)),
            Backend::Remote(store) => store.list(collection).await,
        }
    }

    /// Merge a partial field map into a document.
    pub async fn update(
        &mut self,
        collection: Collection,
        id: &str,
        fields: serde_json::Value,
    ) -> TrackerResult<()> {
        match self {
            Backend::Memory(store) => {
                store.update(collection, id, fields);
                Ok(())
            }
            Backend::Remote(store) => store.update(collection, id, fields).await,
        }
    }

    /// Delete a document by id.
    pub async fn delete(&mut self, collection: Collection, id: &str) -> TrackerResult<()> {
        match self {
            Backend::Memory(store) => {
                store.delete(collection, id);
                Ok(())
            }
            Backend::Remote(store) => store.delete(collection, id).await,
        }
    }
}
