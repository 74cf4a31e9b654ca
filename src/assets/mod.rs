//! Asset requests and their loaded results
//!
//! Scene setup only *requests* textures and models. The frame loop later
//! pulls requests off the queue, loads them through an [`AssetSource`]
//! and resolves each slot to either data or a failure. Until then the
//! slot stays pending and anything depending on it is skipped.

mod model;
mod source;
mod texture;

pub use model::{ModelData, ModelFormat};
pub use source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use texture::TextureData;

use std::collections::VecDeque;

use crate::error::LoadResult;

/// Handle to a requested asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Model,
}

/// A queued load
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub id: AssetId,
    pub kind: AssetKind,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetData {
    Texture(TextureData),
    Model(ModelData),
}

/// Load state of a single asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSlot {
    Pending,
    Ready(AssetData),
    Failed(String),
}

struct AssetEntry {
    kind: AssetKind,
    path: String,
    slot: AssetSlot,
}

/// Every asset a scene has asked for
#[derive(Default)]
pub struct AssetStore {
    entries: Vec<AssetEntry>,
    queue: VecDeque<AssetId>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an asset. Asking twice for the same path returns the same id.
    pub fn request(&mut self, kind: AssetKind, path: &str) -> AssetId {
        if let Some(index) = self
            .entries
            .iter()
            .position(|e| e.kind == kind && e.path == path)
        {
            return AssetId(index);
        }

        let id = AssetId(self.entries.len());
        self.entries.push(AssetEntry {
            kind,
            path: path.to_string(),
            slot: AssetSlot::Pending,
        });
        self.queue.push_back(id);
        log::debug!("Requested {:?} '{}'", kind, path);
        id
    }

    pub fn request_texture(&mut self, path: &str) -> AssetId {
        self.request(AssetKind::Texture, path)
    }

    pub fn request_model(&mut self, path: &str) -> AssetId {
        self.request(AssetKind::Model, path)
    }

    /// Take the oldest outstanding request
    pub fn next_request(&mut self) -> Option<AssetRequest> {
        let id = self.queue.pop_front()?;
        let entry = &self.entries[id.0];
        Some(AssetRequest {
            id,
            kind: entry.kind,
            path: entry.path.clone(),
        })
    }

    /// Store the outcome of a load. Failures are logged and never retried.
    pub fn resolve(&mut self, id: AssetId, result: LoadResult<AssetData>) {
        let Some(entry) = self.entries.get_mut(id.0) else {
            log::warn!("Resolve for unknown asset {:?}", id);
            return;
        };

        entry.slot = match result {
            Ok(data) => {
                log::info!("Loaded '{}'", entry.path);
                AssetSlot::Ready(data)
            }
            Err(e) => {
                log::error!("{}", e);
                AssetSlot::Failed(e.to_string())
            }
        };
    }

    /// Load up to `budget` queued requests from `source`. Returns how many were resolved.
    pub fn load_pending(&mut self, source: &dyn AssetSource, budget: usize) -> usize {
        let mut resolved = 0;
        while resolved < budget {
            let Some(request) = self.next_request() else {
                break;
            };
            let result = source.load(&request);
            self.resolve(request.id, result);
            resolved += 1;
        }
        resolved
    }

    pub fn slot(&self, id: AssetId) -> Option<&AssetSlot> {
        self.entries.get(id.0).map(|e| &e.slot)
    }

    pub fn path(&self, id: AssetId) -> Option<&str> {
        self.entries.get(id.0).map(|e| e.path.as_str())
    }

    pub fn is_ready(&self, id: AssetId) -> bool {
        matches!(self.slot(id), Some(AssetSlot::Ready(_)))
    }

    pub fn is_failed(&self, id: AssetId) -> bool {
        matches!(self.slot(id), Some(AssetSlot::Failed(_)))
    }

    pub fn texture(&self, id: AssetId) -> Option<&TextureData> {
        match self.slot(id) {
            Some(AssetSlot::Ready(AssetData::Texture(t))) => Some(t),
            _ => None,
        }
    }

    pub fn model(&self, id: AssetId) -> Option<&ModelData> {
        match self.slot(id) {
            Some(AssetSlot::Ready(AssetData::Model(m))) => Some(m),
            _ => None,
        }
    }

    /// Number of requests not yet loaded
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn duplicate_requests_share_an_id() {
        let mut store = AssetStore::new();
        let a = store.request_texture("textures/wall1.jpg");
        let b = store.request_texture("textures/wall1.jpg");
        assert_eq!(a, b);
        assert_eq!(store.pending_count(), 1);
    }

    #[test]
    fn requests_start_pending() {
        let mut store = AssetStore::new();
        let id = store.request_model("models/house.glb");
        assert_eq!(store.slot(id), Some(&AssetSlot::Pending));
        assert!(!store.is_ready(id));
        assert!(store.model(id).is_none());
    }

    #[test]
    fn load_pending_respects_budget() {
        let mut source = MemoryAssetSource::new();
        source.insert("a.gltf", b"{}".to_vec());
        source.insert("b.gltf", b"{}".to_vec());

        let mut store = AssetStore::new();
        let a = store.request_model("a.gltf");
        let b = store.request_model("b.gltf");

        assert_eq!(store.load_pending(&source, 1), 1);
        assert!(store.is_ready(a));
        assert!(!store.is_ready(b));

        assert_eq!(store.load_pending(&source, 5), 1);
        assert!(store.is_ready(b));
        assert_eq!(store.load_pending(&source, 5), 0);
    }

    #[test]
    fn failures_are_recorded() {
        let mut store = AssetStore::new();
        let id = store.request_texture("missing.jpg");
        let request = store.next_request().unwrap();
        store.resolve(
            request.id,
            Err(LoadError::NotFound {
                path: request.path.clone(),
            }),
        );
        assert!(store.is_failed(id));
        assert!(store.texture(id).is_none());
    }
}
