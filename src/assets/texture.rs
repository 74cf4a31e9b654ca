//! Texture decoding

use crate::error::{LoadError, LoadResult};
use image::{DynamicImage, GenericImageView};

/// Decoded RGBA8 texture data
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub name: String,
}

impl TextureData {
    /// Decode texture from encoded image bytes (PNG, JPEG, ...)
    pub fn from_bytes(bytes: &[u8], name: &str) -> LoadResult<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| LoadError::Decode {
            path: name.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_image(img, name))
    }

    fn from_image(img: DynamicImage, name: &str) -> Self {
        let (width, height) = img.dimensions();
        let data = img.to_rgba8().into_raw();

        Self {
            width,
            height,
            data,
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageOutputFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png() {
        let tex = TextureData::from_bytes(&png_bytes(3, 2), "t1.png").unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.data.len(), 3 * 2 * 4);
        assert_eq!(&tex.data[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = TextureData::from_bytes(b"not an image", "bad.jpg").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert_eq!(err.path(), "bad.jpg");
    }
}
