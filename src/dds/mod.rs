//! DDS textures embedded in game container files.
//!
//! - [`header`] - Header fields and texconv format names
//! - [`scan`] - Finding textures and their slot sizes
//! - [`index`] - The `dds_index.txt` extraction log

pub mod header;
pub mod index;
pub mod scan;

pub use header::{
    dxgi_format, fourcc, header_format, is_dds_header, mipmap_count, texconv_format_for_dxgi,
    texconv_format_for_fourcc, DX10_FOURCC, DX10_HEADER_LEN, HEADER_LEN, SIGNATURE, UNKNOWN_FORMAT,
};
pub use index::{entry_name, parse_index, render_index, IndexEntry, INDEX_FILE, REPAIR_LOG_FILE};
pub use scan::{embedded_len, find_signatures, split_ranges};
