//! Texture format conversion.
//!
//! [`TextureConverter`] is the seam between the unpack/repack flows and the
//! tools that actually transcode pixels. [`DefaultConverter`] decodes DDS
//! with the `image` crate and encodes through texconv.

use std::fs;
use std::path::Path;

use image::ImageFormat;

use crate::error::{Result, TexkitError};

use super::texconv::Texconv;

/// How texconv should encode a PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// texconv `-f` format name, such as `BC3_UNORM`.
    pub format: &'static str,
    /// Number of mip levels to generate.
    pub mip_count: u32,
    /// Treat the source as sRGB.
    pub srgb: bool,
    /// Write a `DX10` extended header instead of a legacy FourCC.
    pub dx10_header: bool,
}

/// Converts textures between DDS and PNG.
pub trait TextureConverter {
    /// Decode the DDS file at `dds` and write it as a PNG to `png`.
    fn dds_to_png(&self, dds: &Path, png: &Path) -> Result<()>;

    /// Encode the PNG at `png` as a complete DDS file and return its bytes.
    fn png_to_dds(&self, png: &Path, options: &EncodeOptions) -> Result<Vec<u8>>;

    /// Rebuild the mip chain of the DDS file at `dds` in place.
    fn regenerate_mipmaps(&self, dds: &Path, mip_count: u32) -> Result<()>;
}

/// `image` for decoding, texconv for encoding.
#[derive(Debug, Clone)]
pub struct DefaultConverter {
    texconv: Texconv,
}

impl DefaultConverter {
    /// Create a converter that runs the given texconv.
    pub fn new(texconv: Texconv) -> Self {
        Self { texconv }
    }
}

impl TextureConverter for DefaultConverter {
    fn dds_to_png(&self, dds: &Path, png: &Path) -> Result<()> {
        decode_dds_to_png(dds, png)
    }

    fn png_to_dds(&self, png: &Path, options: &EncodeOptions) -> Result<Vec<u8>> {
        self.texconv.encode(png, options)
    }

    fn regenerate_mipmaps(&self, dds: &Path, mip_count: u32) -> Result<()> {
        self.texconv.regenerate_mipmaps(dds, mip_count)
    }
}

/// Decode a DXT1/DXT3/DXT5 DDS file and save it as PNG.
pub fn decode_dds_to_png(dds: &Path, png: &Path) -> Result<()> {
    let bytes = fs::read(dds)?;
    let image = image::load_from_memory_with_format(&bytes, ImageFormat::Dds).map_err(|e| {
        TexkitError::Conversion {
            path: dds.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    image
        .save_with_format(png, ImageFormat::Png)
        .map_err(|e| TexkitError::Conversion {
            path: png.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!("Decoded {} to {}", dds.display(), png.display());
    Ok(())
}

/// Pad `bytes` with zeros to exactly `slot_len`, or `None` if they do not fit.
pub fn fit_to_slot(mut bytes: Vec<u8>, slot_len: usize) -> Option<Vec<u8>> {
    if bytes.len() > slot_len {
        return None;
    }
    bytes.resize(slot_len, 0);
    Some(bytes)
}
