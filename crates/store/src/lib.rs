//! In-memory asset store.
//!
//! Holds every accepted [`AssetRecord`] for the lifetime of the process.
//! The store is an ordinary value: construct one, wrap it in `Arc` and hand
//! it to whoever serves requests. Tests build their own independent stores.

use assetwatch_core::asset::AssetRecord;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Asset records keyed by id.
///
/// Thread-safe via interior `RwLock`. Each method holds the lock only for its
/// own duration. Listing returns records in first-insertion order; an
/// overwrite keeps the record's original position.
#[derive(Default)]
pub struct AssetStore {
    assets: RwLock<IndexMap<String, AssetRecord>>,
}

impl AssetStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the record for `id`, replacing any existing one.
    pub async fn upsert(&self, id: String, record: AssetRecord) {
        let replaced = self.assets.write().await.insert(id, record).is_some();
        tracing::trace!(replaced, "Asset upserted");
    }

    /// Upsert every record of an accepted batch under a single write lock.
    ///
    /// Concurrent readers see either none or all of the batch, and no other
    /// batch can interleave with it. Returns the number of records applied.
    pub async fn upsert_batch(&self, records: Vec<AssetRecord>) -> usize {
        let mut assets = self.assets.write().await;
        let count = records.len();
        for record in records {
            let existed = assets.contains_key(&record.id);
            tracing::info!(asset_id = %record.id, updated = existed, "Asset created/updated");
            assets.insert(record.id.clone(), record);
        }
        count
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: &str) -> Option<AssetRecord> {
        self.assets.read().await.get(id).cloned()
    }

    /// Snapshot of all stored records.
    pub async fn list_all(&self) -> Vec<AssetRecord> {
        self.assets.read().await.values().cloned().collect()
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.assets.read().await.len()
    }

    /// Remove every record. Reset hook for tests and administration.
    pub async fn clear(&self) {
        let mut assets = self.assets.write().await;
        let removed = assets.len();
        assets.clear();
        tracing::debug!(removed, "Asset store cleared");
    }
}
