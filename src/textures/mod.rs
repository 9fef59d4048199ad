//! Texture unpacking and repacking.
//!
//! - [`unpack`] - Split a container into `dds_NNN.png` files plus an index log
//! - [`repack`] - Write edited textures back into their original slots
//! - [`convert`] - The [`TextureConverter`] seam and its default implementation
//! - [`texconv`] - Running (and fetching) Microsoft's texconv

pub mod convert;
pub mod repack;
pub mod texconv;
pub mod unpack;

pub use convert::{DefaultConverter, EncodeOptions, TextureConverter};
pub use repack::{RepackJob, RepackReport, Repacker, DEFAULT_OUTPUT_FILE};
pub use texconv::{Texconv, DEFAULT_TEXCONV, TEXCONV_URL};
pub use unpack::{UnpackReport, Unpacker, DEFAULT_OUTPUT_DIR};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Final path component as text, or the whole path when there is none.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Entries of `dir`, sorted by path so batch runs are repeatable.
pub(crate) fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    children.sort();
    Ok(children)
}
