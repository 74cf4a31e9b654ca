//! Model containers (glTF / GLB)
//!
//! Models are handed to the renderer as raw container bytes. Only the
//! container header is checked here.

use crate::error::{LoadError, LoadResult};

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_HEADER_LEN: usize = 12;

/// Container format of a model file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// JSON glTF document
    Gltf,
    /// Binary glTF container
    Glb,
}

/// Loaded model bytes
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    pub name: String,
    pub format: ModelFormat,
    pub bytes: Vec<u8>,
}

impl ModelData {
    pub fn from_bytes(bytes: Vec<u8>, name: &str) -> LoadResult<Self> {
        let format = detect_format(&bytes, name)?;
        Ok(Self {
            name: name.to_string(),
            format,
            bytes,
        })
    }
}

fn decode_error(name: &str, message: impl Into<String>) -> LoadError {
    LoadError::Decode {
        path: name.to_string(),
        message: message.into(),
    }
}

fn detect_format(bytes: &[u8], name: &str) -> LoadResult<ModelFormat> {
    if bytes.starts_with(GLB_MAGIC) {
        if bytes.len() < GLB_HEADER_LEN {
            return Err(decode_error(name, "truncated GLB header"));
        }
        let word = |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        let version = word(4);
        if version != 2 {
            return Err(decode_error(name, format!("unsupported GLB version {version}")));
        }
        let declared = word(8) as usize;
        if declared > bytes.len() {
            return Err(decode_error(
                name,
                format!("GLB declares {declared} bytes but file has {}", bytes.len()),
            ));
        }
        return Ok(ModelFormat::Glb);
    }

    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(ModelFormat::Gltf),
        Some(_) => Err(LoadError::UnsupportedFormat {
            path: name.to_string(),
        }),
        None => Err(decode_error(name, "empty model file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glb(version: u32, declared: u32, total: usize) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(total);
        bytes.extend_from_slice(GLB_MAGIC);
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&declared.to_le_bytes());
        bytes.resize(total, 0);
        bytes
    }

    #[test]
    fn detects_json_gltf() {
        let model = ModelData::from_bytes(b"  {\"asset\":{}}".to_vec(), "lock.gltf").unwrap();
        assert_eq!(model.format, ModelFormat::Gltf);
    }

    #[test]
    fn detects_binary_glb() {
        let model = ModelData::from_bytes(glb(2, 20, 20), "setup.glb").unwrap();
        assert_eq!(model.format, ModelFormat::Glb);
    }

    #[test]
    fn rejects_bad_glb_headers() {
        assert!(ModelData::from_bytes(glb(1, 12, 12), "old.glb").is_err());
        assert!(ModelData::from_bytes(glb(2, 64, 16), "short.glb").is_err());
        assert!(ModelData::from_bytes(b"glTF".to_vec(), "tiny.glb").is_err());
    }

    #[test]
    fn rejects_unknown_and_empty() {
        let err = ModelData::from_bytes(b"OBJ v 1 2 3".to_vec(), "x.obj").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
        let err = ModelData::from_bytes(b"   ".to_vec(), "empty.gltf").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
