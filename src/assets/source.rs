//! Where asset bytes come from

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{AssetData, AssetKind, AssetRequest, ModelData, TextureData};
use crate::error::{LoadError, LoadResult};

/// Provider of raw asset bytes
pub trait AssetSource {
    /// Read the raw bytes stored under `path`
    fn read(&self, path: &str) -> LoadResult<Vec<u8>>;

    /// Read and decode a requested asset
    fn load(&self, request: &AssetRequest) -> LoadResult<AssetData> {
        let bytes = self.read(&request.path)?;
        match request.kind {
            AssetKind::Texture => TextureData::from_bytes(&bytes, &request.path).map(AssetData::Texture),
            AssetKind::Model => ModelData::from_bytes(bytes, &request.path).map(AssetData::Model),
        }
    }
}

/// Assets read from a directory tree
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsAssetSource {
    fn read(&self, path: &str) -> LoadResult<Vec<u8>> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_string(),
            },
            _ => LoadError::Io {
                path: path.to_string(),
                source,
            },
        })
    }
}

/// Assets held in memory, keyed by path
#[derive(Default)]
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn read(&self, path: &str) -> LoadResult<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| LoadError::NotFound {
            path: path.to_string(),
        })
    }
}
